#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linetable::{Error, HeaderError, ListHeader, Splitter, read_table_with, split_fields};

#[derive(Arbitrary, Debug)]
struct Input {
    delimiter: String,
    names: Vec<String>,
    lines: Vec<String>,
}

fuzz_target!(|input: Input| {
    if input.delimiter.is_empty() {
        return;
    }
    let splitter = Splitter::new(input.delimiter.as_str());
    let header = ListHeader::new(input.names.iter().cloned());
    let widest = input
        .lines
        .iter()
        .map(|l| split_fields(l, &input.delimiter).len())
        .max()
        .unwrap_or(0);

    match read_table_with(&input.lines, &header, &splitter) {
        Ok(table) => {
            assert!(widest <= header.len());
            assert_eq!(table.len(), input.lines.len());
            for (record, line) in table.iter().zip(&input.lines) {
                assert!(record.len() <= split_fields(line, &input.delimiter).len());
            }
        }
        Err(Error::Header { source: HeaderError::OutOfRange { index, len }, .. }) => {
            assert_eq!(len, header.len());
            assert!(index >= len);
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
