//! Parsing of the assembler's plain hex-words output.
//!
//! The format is a single header line, [`HEADER`], followed by
//! whitespace-separated hexadecimal machine words. Line breaks carry no
//! meaning.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

/// Header line emitted by the assembler ahead of the words.
pub const HEADER: &str = "v3.0 hex words plain";

/// Widest token that still fits a [`u32`].
pub const MAX_WORD_DIGITS: usize = 8;

/// A single machine word, as written in the dump.
///
/// The original text is kept so that leading zeros and digit case make it
/// into the generated literal untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexWord {
    text: String,
    value: u32,
}

impl HexWord {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}u32", self.text)
    }
}

/// What to do with a token that is not a valid word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Fail on the first malformed token.
    #[default]
    Strict,
    /// Drop malformed tokens with a warning and keep going.
    Lenient,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// If set, every token must have exactly this many digits.
    pub width: Option<usize>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("word #{position} `{token}` on line {line}: {reason}")]
pub struct ParseError {
    /// 1-based index in the token stream.
    pub position: usize,
    /// 1-based line in the source text.
    pub line: usize,
    pub token: String,
    pub reason: ParseErrorReason,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorReason {
    #[error("`{0}` is not a hexadecimal digit")]
    NotHex(char),
    #[error("{digits} digits do not fit in 32 bits")]
    TooWide { digits: usize },
    #[error("expected {expected} digits, found {found}")]
    WidthMismatch { expected: usize, found: usize },
}

/// The words of a hex dump, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexDump {
    words: Vec<HexWord>,
}

impl HexDump {
    /// Parse the contents of a hex-dump file.
    ///
    /// The header is stripped once if it is the first line; if it is missing
    /// the whole text is tokenized.
    pub fn parse(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let (body, first_line) = match strip_header(text) {
            Some(body) => (body, 2),
            None => {
                debug!("no `{HEADER}` header, tokenizing the whole input");
                (text, 1)
            }
        };

        let mut words = Vec::new();
        for (position, (line, token)) in tokens(body, first_line).enumerate() {
            match decode_word(token, options.width) {
                Ok(word) => words.push(word),
                Err(reason) => {
                    let err = ParseError {
                        position: position + 1,
                        line,
                        token: token.to_owned(),
                        reason,
                    };
                    match options.mode {
                        ParseMode::Strict => return Err(err),
                        ParseMode::Lenient => warn!("skipping {err}"),
                    }
                }
            }
        }

        Ok(Self { words })
    }

    pub fn words(&self) -> &[HexWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.words.iter().map(HexWord::value)
    }
}

/// Returns the text following the header line, or `None` if the first line
/// is not the header.
fn strip_header(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(HEADER)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
}

/// Whitespace-separated tokens, each paired with its 1-based line number.
fn tokens(body: &str, first_line: usize) -> impl Iterator<Item = (usize, &str)> {
    body.lines()
        .enumerate()
        .flat_map(move |(idx, line)| line.split_whitespace().map(move |t| (first_line + idx, t)))
}

fn decode_word(token: &str, width: Option<usize>) -> Result<HexWord, ParseErrorReason> {
    if let Some(bad) = token.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseErrorReason::NotHex(bad));
    }

    let digits = token.len();
    if let Some(expected) = width {
        if digits != expected {
            return Err(ParseErrorReason::WidthMismatch {
                expected,
                found: digits,
            });
        }
    }
    if digits > MAX_WORD_DIGITS {
        return Err(ParseErrorReason::TooWide { digits });
    }

    // Only hex digits, at most eight of them: this cannot overflow.
    let value = u32::from_str_radix(token, 16).map_err(|_| ParseErrorReason::TooWide { digits })?;
    Ok(HexWord {
        text: token.to_owned(),
        value,
    })
}
