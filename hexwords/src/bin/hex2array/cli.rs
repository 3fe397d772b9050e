use std::path::PathBuf;

use clap::{Parser, ValueHint};
use hexwords::cli::CliParseOptions;

/// Convert a hex-words dump into a `u32` list literal
#[derive(Parser)]
#[command(version)]
pub(crate) struct Cli {
    /// The hex-words dump to convert.
    #[arg(value_hint = ValueHint::FilePath)]
    pub(crate) path: PathBuf,

    #[clap(flatten)]
    pub(crate) parse_options: CliParseOptions,
}
