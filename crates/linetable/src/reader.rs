//! Table reading entry points

use std::io::Read;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::header::{HeaderProvider, IndexHeader, ListHeader};
use crate::options::Options;
use crate::record::{Table, map_line};
use crate::split::{SplitLine, Splitter};

/// Read lines with positional names (`"0"`, `"1"`, ...) split on commas.
pub fn read_table<I, S>(lines: I) -> Result<Table>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    read_table_with(lines, &IndexHeader, &Splitter::comma())
}

/// Read lines with an explicit header provider and splitter.
///
/// Stops at the first line that cannot be mapped; the error carries its
/// 1-based line number.
pub fn read_table_with<I, S, H, P>(lines: I, header: &H, splitter: &P) -> Result<Table>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    H: HeaderProvider + ?Sized,
    P: SplitLine + ?Sized,
{
    let lines = lines.into_iter();
    let mut table = Table::with_capacity(lines.size_hint().0);
    for (idx, line) in lines.enumerate() {
        let line = line.as_ref();
        trace!(line = idx + 1, len = line.len(), "mapping line");
        let record = map_line(line, header, splitter).map_err(|source| Error::Header {
            line: idx + 1,
            source,
        })?;
        table.push(record);
    }
    debug!(records = table.len(), "read table");
    Ok(table)
}

/// Read lines named by `header_line`, everything split on commas.
pub fn read_table_with_header<I, S>(header_line: &str, lines: I) -> Result<Table>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    read_table_with_header_using(header_line, lines, &Splitter::comma())
}

/// Read lines named by `header_line`; the header line and the data lines
/// share `splitter`.
pub fn read_table_with_header_using<I, S, P>(
    header_line: &str,
    lines: I,
    splitter: &P,
) -> Result<Table>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: SplitLine + ?Sized,
{
    let header = ListHeader::from_line(header_line, splitter);
    debug!(names = header.len(), "resolved header line");
    read_table_with(lines, &header, splitter)
}

/// Split `text` into lines and read them per `options`.
///
/// Lines end at `\n`; a trailing `\r` is dropped from each line and a
/// final newline does not start another line.
pub fn read_str(text: &str, options: &Options) -> Result<Table> {
    let splitter = Splitter::from(options.delimiter);
    let mut lines = split_lines(text);
    if options.has_header {
        match lines.next() {
            // errors count input lines, header included
            Some(header_line) => read_table_with_header_using(header_line, lines, &splitter)
                .map_err(|e| match e {
                    Error::Header { line, source } => Error::Header {
                        line: line + 1,
                        source,
                    },
                    other => other,
                }),
            None => Ok(Table::new()),
        }
    } else {
        read_table_with(lines, &IndexHeader, &splitter)
    }
}

pub fn read_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Table> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    read_str(&s, options)
}

/// Lines of `text` as [`read_str`] sees them.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let mut split = body.split('\n');
    // "" would otherwise yield one empty line
    if text.is_empty() {
        split.next();
    }
    split.map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Like [`read_table_with`], mapping lines on the rayon pool. Output keeps
/// input order; on failure the lowest failing line is reported.
#[cfg(feature = "parallel")]
pub fn read_table_par<S, H, P>(lines: &[S], header: &H, splitter: &P) -> Result<Table>
where
    S: AsRef<str> + Sync,
    H: HeaderProvider + Sync + ?Sized,
    P: SplitLine + Sync + ?Sized,
{
    use rayon::prelude::*;

    let mapped: Vec<Result<_>> = lines
        .par_iter()
        .enumerate()
        .map(|(idx, line)| {
            map_line(line.as_ref(), header, splitter).map_err(|source| Error::Header {
                line: idx + 1,
                source,
            })
        })
        .collect();
    let table = mapped.into_iter().collect::<Result<Table>>()?;
    debug!(records = table.len(), "read table in parallel");
    Ok(table)
}
