#![cfg(feature = "parallel")]
use linetable::{IndexHeader, ListHeader, Splitter, read_table_par, read_table_with};

#[test]
fn parallel_matches_sequential() -> Result<(), linetable::Error> {
    let lines: Vec<String> = (0..2_000).map(|i| format!("{i},v{i},{}", i * 2)).collect();
    let header = ListHeader::new(["id", "name", "double"]);
    let seq = read_table_with(&lines, &header, &Splitter::comma())?;
    let par = read_table_par(&lines, &header, &Splitter::comma())?;
    assert_eq!(seq, par);
    assert_eq!(par[1_999]["id"], "1999");
    Ok(())
}

#[test]
fn parallel_reports_lowest_failing_line() {
    let mut lines: Vec<String> = (0..1_000).map(|i| i.to_string()).collect();
    lines[10] = "a,b".into();
    lines[900] = "a,b,c".into();
    let header = ListHeader::new(["n"]);
    let err = read_table_par(&lines, &header, &Splitter::comma()).unwrap_err();
    assert!(matches!(err, linetable::Error::Header { line: 11, .. }));
}

#[test]
fn parallel_empty_input() -> Result<(), linetable::Error> {
    let lines: Vec<&str> = Vec::new();
    assert!(read_table_par(&lines, &IndexHeader, &Splitter::comma())?.is_empty());
    Ok(())
}
