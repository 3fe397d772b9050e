//! Assemble `assembly/<NAME>.s` into `hex/<NAME>.hex` and print Rust code to
//! paste into a test: the source as a block comment, then the machine words
//! as a `const` array.
//!
//! Example usage:
//! ```
//! RUST_LOG=info cargo run --bin asm2array -- --base-dir helpers tty_test TTY_TEST
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use hexwords::assembler::CommandAssembler;
use hexwords::env::{self, load_dotenvy_vars_if_present};
use hexwords::generate::{GenerateError, Generator};
use hexwords::layout::Layout;
use tracing::error;

use self::asm2array::*;
mod asm2array {
    pub mod cli;
}

fn main() -> Result<ExitCode> {
    let dotenv = load_dotenvy_vars_if_present();
    hexwords::tracing::init();
    env::report(dotenv);

    let args = cli::Cli::parse();

    let assembler = CommandAssembler::new(args.assembler);
    let generator = Generator::new(
        Layout::new(args.base_dir),
        assembler.clone(),
        args.parse_options.into(),
    );

    let mut stdout = io::stdout().lock();
    match generator.generate(&args.name, &args.array_name, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(GenerateError::Assemble(e)) => {
            error!("{e}");
            writeln!(stdout, "{} failed!", assembler.program())?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
