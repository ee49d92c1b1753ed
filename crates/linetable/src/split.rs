//! Field splitting

use crate::error::{Error, Result};
use crate::options::Delimiter;

/// Split `line` on every occurrence of `delimiter`, keeping empty fields.
///
/// The empty line has no fields at all, which is not what `str::split`
/// gives (one empty field).
pub fn split_fields<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(delimiter).collect()
}

/// Turns one line into its ordered field values.
pub trait SplitLine {
    fn split_line(&self, line: &str) -> Vec<String>;
}

impl<F> SplitLine for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn split_line(&self, line: &str) -> Vec<String> {
        self(line)
    }
}

/// Splits on a fixed delimiter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter {
    delimiter: String,
}

impl Splitter {
    /// # Panics
    ///
    /// Panics if `delimiter` is empty; see [`Splitter::try_new`].
    pub fn new(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        assert!(!delimiter.is_empty(), "delimiter must not be empty");
        Self { delimiter }
    }

    pub fn try_new(delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(Error::EmptyDelimiter);
        }
        Ok(Self { delimiter })
    }

    pub fn comma() -> Self {
        Self::from(Delimiter::Comma)
    }

    pub fn tab() -> Self {
        Self::from(Delimiter::Tab)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        split_fields(line, &self.delimiter)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::comma()
    }
}

impl From<Delimiter> for Splitter {
    fn from(delimiter: Delimiter) -> Self {
        Self {
            delimiter: delimiter.as_str().to_string(),
        }
    }
}

impl SplitLine for Splitter {
    fn split_line(&self, line: &str) -> Vec<String> {
        self.split(line).into_iter().map(str::to_string).collect()
    }
}
