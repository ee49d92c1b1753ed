use linetable::{Record, read_table_with_header};

#[derive(Debug, PartialEq)]
struct MyData {
    first: i32,
    second: String,
    third: String,
}

fn to_my_data(r: &Record) -> Result<MyData, Box<dyn std::error::Error>> {
    Ok(MyData {
        first: r.get("column0").ok_or("column0")?.parse()?,
        second: r.get("column1").ok_or("column1")?.clone(),
        third: r.get("column2").ok_or("column2")?.clone(),
    })
}

#[test]
fn read_csv_into_typed_rows() -> Result<(), Box<dyn std::error::Error>> {
    let csv = "column0,column1,column2\n0,cell01,cell02\n1,cell11,cell12";
    let lines: Vec<&str> = csv.split('\n').collect();

    let table = read_table_with_header(lines[0], &lines[1..])?;
    let rows = table
        .iter()
        .map(to_my_data)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(
        rows,
        vec![
            MyData {
                first: 0,
                second: "cell01".into(),
                third: "cell02".into(),
            },
            MyData {
                first: 1,
                second: "cell11".into(),
                third: "cell12".into(),
            },
        ]
    );
    Ok(())
}
