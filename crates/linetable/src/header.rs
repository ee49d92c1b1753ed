//! Header providers: zero-based field index to field name.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::error::HeaderError;
use crate::split::SplitLine;

pub trait HeaderProvider {
    fn resolve(&self, index: usize) -> Result<Cow<'_, str>, HeaderError>;
}

impl<F> HeaderProvider for F
where
    F: Fn(usize) -> Result<String, HeaderError>,
{
    fn resolve(&self, index: usize) -> Result<Cow<'_, str>, HeaderError> {
        self(index).map(Cow::Owned)
    }
}

/// Infallible naming function, e.g. `FnHeader(|i| format!("col{i}"))`.
#[derive(Debug, Clone, Copy)]
pub struct FnHeader<F>(pub F);

impl<F> HeaderProvider for FnHeader<F>
where
    F: Fn(usize) -> String,
{
    fn resolve(&self, index: usize) -> Result<Cow<'_, str>, HeaderError> {
        Ok(Cow::Owned((self.0)(index)))
    }
}

/// Names every field by its decimal index: `"0"`, `"1"`, ...
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexHeader;

impl HeaderProvider for IndexHeader {
    fn resolve(&self, index: usize) -> Result<Cow<'_, str>, HeaderError> {
        Ok(Cow::Owned(index.to_string()))
    }
}

/// Ordered list of names; field `i` gets the `i`-th name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListHeader {
    names: Vec<String>,
}

impl ListHeader {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Names taken from a header line, split the same way as data lines.
    pub fn from_line<P: SplitLine + ?Sized>(header_line: &str, splitter: &P) -> Self {
        Self {
            names: splitter.split_line(header_line),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl HeaderProvider for ListHeader {
    fn resolve(&self, index: usize) -> Result<Cow<'_, str>, HeaderError> {
        self.names
            .get(index)
            .map(|name| Cow::Borrowed(name.as_str()))
            .ok_or(HeaderError::OutOfRange {
                index,
                len: self.names.len(),
            })
    }
}

impl From<Vec<String>> for ListHeader {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl<S: Into<String>> FromIterator<S> for ListHeader {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Explicit index to name mapping. Indices need not be contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapHeader {
    names: HashMap<usize, String>,
}

impl MapHeader {
    pub fn new(names: HashMap<usize, String>) -> Self {
        Self { names }
    }
}

impl HeaderProvider for MapHeader {
    fn resolve(&self, index: usize) -> Result<Cow<'_, str>, HeaderError> {
        self.names
            .get(&index)
            .map(|name| Cow::Borrowed(name.as_str()))
            .ok_or(HeaderError::MissingKey { index })
    }
}

impl From<HashMap<usize, String>> for MapHeader {
    fn from(names: HashMap<usize, String>) -> Self {
        Self { names }
    }
}

impl From<BTreeMap<usize, String>> for MapHeader {
    fn from(names: BTreeMap<usize, String>) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for MapHeader {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(i, s)| (i, s.into())).collect(),
        }
    }
}
