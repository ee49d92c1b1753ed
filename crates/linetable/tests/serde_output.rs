#![cfg(feature = "serde")]
use serde_json::json;

#[test]
fn table_serializes_in_field_order() -> Result<(), Box<dyn std::error::Error>> {
    let table = linetable::read_table_with_header("b,a", ["2,1", ""])?;
    let s = serde_json::to_string(&table)?;
    assert_eq!(s, r#"[{"b":"2","a":"1"},{}]"#);
    Ok(())
}

#[test]
fn options_from_json() -> Result<(), Box<dyn std::error::Error>> {
    let opts: linetable::Options = serde_json::from_value(json!({"delimiter": "tab"}))?;
    assert_eq!(opts.delimiter, linetable::Delimiter::Tab);
    assert!(!opts.has_header);
    Ok(())
}
