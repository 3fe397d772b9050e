use std::path::Path;

use crate::runner::{RunError, Runner};

/// Assembler invoked when none is configured.
pub const DEFAULT_ASSEMBLER: &str = "masm";

/// Turns an assembly source file into a plain hex-words dump.
#[cfg_attr(test, mockall::automock)]
pub trait Assembler {
    /// Assemble `input`, writing the dump to `output`.
    fn assemble(&self, input: &Path, output: &Path) -> Result<(), RunError>;
}

/// An assembler found on `PATH`, called as `<program> -o <output> <input>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAssembler {
    program: String,
}

impl CommandAssembler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_ASSEMBLER)
    }
}

impl CommandAssembler {
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Assembler for CommandAssembler {
    fn assemble(&self, input: &Path, output: &Path) -> Result<(), RunError> {
        Runner::new(&self.program)
            .args([Path::new("-o"), output, input].map(Path::as_os_str))
            .run()
    }
}
