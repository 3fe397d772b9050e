use std::path::PathBuf;

use clap::{Parser, ValueHint};
use hexwords::assembler::DEFAULT_ASSEMBLER;
use hexwords::cli::CliParseOptions;
use hexwords::format::{ArrayName, DEFAULT_ARRAY_NAME};

/// Assemble a source file and print it as a `const` u32 array
#[derive(Parser)]
#[command(version)]
pub(crate) struct Cli {
    /// Base name of the source: reads `assembly/<NAME>.s`, writes
    /// `hex/<NAME>.hex`.
    pub(crate) name: String,

    /// Name of the generated constant.
    #[arg(default_value = DEFAULT_ARRAY_NAME)]
    pub(crate) array_name: ArrayName,

    /// Directory holding `assembly/` and `hex/`.
    #[arg(short, long, env = "HEXWORDS_BASE_DIR", default_value = ".", value_hint = ValueHint::DirPath)]
    pub(crate) base_dir: PathBuf,

    /// Assembler to run, called as `<ASSEMBLER> -o <hex> <source>`.
    #[arg(short, long, env = "HEXWORDS_ASSEMBLER", default_value = DEFAULT_ASSEMBLER, value_hint = ValueHint::CommandName)]
    pub(crate) assembler: String,

    #[clap(flatten)]
    pub(crate) parse_options: CliParseOptions,
}
