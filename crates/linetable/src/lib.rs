#![doc = include_str!("../README.md")]

pub mod error;
pub mod header;
pub mod options;
pub mod reader;
pub mod record;
pub mod split;

pub use crate::error::{Error, HeaderError, Result};
pub use crate::header::{FnHeader, HeaderProvider, IndexHeader, ListHeader, MapHeader};
pub use crate::options::{Delimiter, Options};
#[cfg(feature = "parallel")]
pub use crate::reader::read_table_par;
pub use crate::reader::{
    read_from_reader, read_str, read_table, read_table_with, read_table_with_header,
    read_table_with_header_using, split_lines,
};
pub use crate::record::{Record, Table, map_line};
pub use crate::split::{SplitLine, Splitter, split_fields};
