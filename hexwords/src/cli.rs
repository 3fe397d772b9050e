use clap::Args;

use crate::dump::{ParseMode, ParseOptions};

const PARSING_HELP_HEADING: &str = "Parsing options";

/// Hex-dump parsing options shared by the binaries.
#[derive(Args, Clone, Debug, Default)]
pub struct CliParseOptions {
    /// Skip malformed words with a warning instead of failing.
    #[arg(long, help_heading = PARSING_HELP_HEADING)]
    pub lenient: bool,
    /// Require every word to have exactly this many hex digits.
    #[arg(long, help_heading = PARSING_HELP_HEADING, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub width: Option<u8>,
}

impl From<CliParseOptions> for ParseOptions {
    fn from(cli: CliParseOptions) -> Self {
        Self {
            mode: if cli.lenient {
                ParseMode::Lenient
            } else {
                ParseMode::Strict
            },
            width: cli.width.map(usize::from),
        }
    }
}
