//! Print the words of a plain hex-words dump as a bracketed `u32` list,
//! followed by the word count.
//!
//! Example usage:
//! ```
//! cargo run --bin hex2array -- helpers/hex/tty_test.hex
//! ```

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use hexwords::dump::HexDump;
use hexwords::env::{self, load_dotenvy_vars_if_present};
use hexwords::format::ListLiteral;
use tracing::info;

use self::hex2array::*;
mod hex2array {
    pub mod cli;
}

fn main() -> Result<()> {
    let dotenv = load_dotenvy_vars_if_present();
    hexwords::tracing::init();
    env::report(dotenv);

    let args = cli::Cli::parse();

    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("couldn't read {}", args.path.display()))?;
    let dump = HexDump::parse(&text, &args.parse_options.into())
        .with_context(|| format!("malformed hex dump {}", args.path.display()))?;
    info!("Read {} words from {}", dump.len(), args.path.display());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", ListLiteral(&dump))?;
    Ok(())
}
