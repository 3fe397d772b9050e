//! Rendering of hex words as Rust array literals.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::dump::{HexDump, HexWord};

/// Words per output line.
pub const WORDS_PER_LINE: usize = 4;

/// Array name used when none is given.
pub const DEFAULT_ARRAY_NAME: &str = "PMEM";

/// Writes `0x<word>u32, ` for every word, breaking the line after every
/// [`WORDS_PER_LINE`]th one. The last line is left as is.
fn write_words(f: &mut fmt::Formatter<'_>, words: &[HexWord]) -> fmt::Result {
    for (i, word) in words.iter().enumerate() {
        write!(f, "{word}, ")?;
        if (i + 1) % WORDS_PER_LINE == 0 {
            writeln!(f)?;
        }
    }
    Ok(())
}

/// A bare bracketed list followed by the word count, e.g.
///
/// ```text
/// [ 0x0001u32, 0x00abu32, 0x00ffu32, 0x1234u32,
/// 0x5678u32, ] // n = 5
/// ```
pub struct ListLiteral<'a>(pub &'a HexDump);

impl fmt::Display for ListLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        write_words(f, self.0.words())?;
        write!(f, "] // n = {}", self.0.len())
    }
}

/// A `const` declaration of a fixed-size `u32` array holding every word.
pub struct ConstArray<'a> {
    pub name: &'a ArrayName,
    pub dump: &'a HexDump,
}

impl fmt::Display for ConstArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "const {}: [u32; {}] = [ ", self.name, self.dump.len())?;
        write_words(f, self.dump.words())?;
        f.write_str("];")
    }
}

/// Wraps assembly source in a block comment, one delimiter per line.
pub struct SourceComment<'a>(pub &'a str);

impl fmt::Display for SourceComment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/*")?;
        writeln!(f, "{}", self.0)?;
        f.write_str("*/")
    }
}

/// Identifier of the generated constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayName(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrayNameError {
    #[error("array name is empty")]
    Empty,
    #[error("`{0}` is not a valid identifier")]
    Invalid(String),
    #[error("`{0}` is a Rust keyword")]
    Keyword(String),
}

/// Strict and reserved keywords, across editions.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

impl ArrayName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ArrayName {
    fn default() -> Self {
        Self(DEFAULT_ARRAY_NAME.to_owned())
    }
}

impl FromStr for ArrayName {
    type Err = ArrayNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return Err(ArrayNameError::Empty);
        };
        let valid = (first == '_' || first.is_ascii_alphabetic())
            && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
            && s != "_";
        if !valid {
            return Err(ArrayNameError::Invalid(s.to_owned()));
        }
        if KEYWORDS.contains(&s) {
            return Err(ArrayNameError::Keyword(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for ArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
