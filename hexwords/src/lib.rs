//! Turn an assembler's plain hex-words dump into Rust array literals, for
//! embedding machine code in tests.

pub mod assembler;
pub mod cli;
pub mod dump;
pub mod env;
pub mod format;
pub mod generate;
pub mod layout;
pub mod runner;
pub mod tracing;
