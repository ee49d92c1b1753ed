//! Line to record mapping

use indexmap::IndexMap;

use crate::error::HeaderError;
use crate::header::HeaderProvider;
use crate::split::SplitLine;

/// One parsed line: field name to field value, in field order.
///
/// Equality ignores key order.
pub type Record = IndexMap<String, String>;

/// Records in input line order. Records may have different key sets.
pub type Table = Vec<Record>;

/// Map one line to a record.
///
/// Names come from `header` for `0..n` where `n` is this line's own field
/// count. A repeated name keeps its first position and the later value.
pub fn map_line<H, P>(line: &str, header: &H, splitter: &P) -> Result<Record, HeaderError>
where
    H: HeaderProvider + ?Sized,
    P: SplitLine + ?Sized,
{
    let values = splitter.split_line(line);
    let mut record = Record::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let name = header.resolve(index)?;
        record.insert(name.into_owned(), value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{IndexHeader, ListHeader};
    use crate::split::Splitter;

    #[test]
    fn empty_line_is_empty_record() {
        let r = map_line("", &IndexHeader, &Splitter::comma()).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn keys_follow_field_order() {
        let h = ListHeader::new(["b", "a"]);
        let r = map_line("1,2", &h, &Splitter::comma()).unwrap();
        let keys: Vec<_> = r.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn short_line_uses_fewer_names() {
        let h = ListHeader::new(["a", "b", "c"]);
        let r = map_line("1", &h, &Splitter::comma()).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r["a"], "1");
    }

    #[test]
    fn duplicate_name_last_value_wins() {
        let h = ListHeader::new(["a", "a"]);
        let r = map_line("1,2", &h, &Splitter::comma()).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r["a"], "2");
    }

    #[test]
    fn long_line_fails() {
        let h = ListHeader::new(["a"]);
        let err = map_line("1,2", &h, &Splitter::comma()).unwrap_err();
        assert_eq!(err, HeaderError::OutOfRange { index: 1, len: 1 });
    }
}
