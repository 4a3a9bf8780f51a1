use super::*;

fn sample() -> Table {
    Table::new(vec![
        Column::new("land", ["NL", "BE", "NL", "DE"]),
        Column::new("jaar", [2020, 2020, 2021, 2021]),
        Column::new("waarde", [1.5, 2.0, 2.5, 3.0]),
    ])
    .unwrap()
}

#[test]
fn rejects_ragged_columns() {
    let err = Table::new(vec![
        Column::new("a", [1, 2, 3]),
        Column::new("b", [1, 2]),
    ])
    .unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
}

#[test]
fn rejects_duplicate_column_names() {
    let err = Table::new(vec![Column::new("a", [1]), Column::new("a", [2])]).unwrap_err();
    assert!(err.to_string().contains("duplicate column name 'a'"));
}

#[test]
fn unknown_column_is_unknown_field() {
    let t = sample();
    assert!(matches!(
        t.column("country"),
        Err(ChartError::UnknownField { .. })
    ));
    assert!(t.require(["land", "jaar"]).is_ok());
    assert!(t.require(["land", "maand"]).is_err());
}

#[test]
fn distinct_keeps_first_appearance_order() {
    let t = sample();
    let d: Vec<String> = t.distinct("land").unwrap().iter().map(|c| c.label()).collect();
    assert_eq!(d, vec!["NL", "BE", "DE"]);
    assert_eq!(t.distinct_count("jaar").unwrap(), 2);
}

#[test]
fn ints_and_integral_floats_share_a_key() {
    let t = Table::new(vec![Column::new(
        "n",
        vec![Cell::Int(3), Cell::Float(3.0), Cell::Float(-0.0), Cell::Int(0)],
    )])
    .unwrap();
    assert_eq!(t.distinct_count("n").unwrap(), 2);
}

#[test]
fn to_dict_matches_pandas_shape() {
    let t = sample().head(2);
    let dict = t.to_dict();
    let keys: Vec<&String> = dict.keys().collect();
    assert_eq!(keys, vec!["land", "jaar", "waarde"]);
    assert_eq!(dict["land"]["0"], serde_json::json!("NL"));
    assert_eq!(dict["jaar"]["1"], serde_json::json!(2020));
    assert_eq!(dict["waarde"]["1"], serde_json::json!(2.0));
}

#[test]
fn head_and_select_project_rows_and_columns() {
    let t = sample();
    assert_eq!(t.head(10).row_count(), 4);
    let s = t.select(["waarde", "land"]).unwrap().head(1);
    let names: Vec<&str> = s.column_names().collect();
    assert_eq!(names, vec!["waarde", "land"]);
    assert_eq!(s.row_count(), 1);
}

#[test]
fn pivot_fills_matrix_and_leaves_gaps_null() {
    let p = sample().pivot("jaar", "land", "waarde").unwrap();
    assert_eq!(p.x_labels, vec![Cell::Int(2020), Cell::Int(2021)]);
    assert_eq!(p.y_labels.len(), 3);
    // NL row
    assert_eq!(p.z[0], vec![Cell::Float(1.5), Cell::Float(2.5)]);
    // BE has no 2021 value
    assert_eq!(p.z[1], vec![Cell::Float(2.0), Cell::Null]);
}

#[test]
fn pivot_rejects_duplicate_pairs() {
    let t = Table::new(vec![
        Column::new("x", ["a", "a"]),
        Column::new("y", ["b", "b"]),
        Column::new("v", [1, 2]),
    ])
    .unwrap();
    let err = t.pivot("x", "y", "v").unwrap_err();
    assert!(matches!(err, ChartError::PivotConflict { .. }));
}

#[test]
fn json_roundtrip_preserves_column_order_and_types() {
    let s = r#"{"sectoren": ["A", "B"], "uitstroom": [63589, 7615.5], "leeg": [null, "x"]}"#;
    let t: Table = serde_json::from_str(s).unwrap();
    let names: Vec<&str> = t.column_names().collect();
    assert_eq!(names, vec!["sectoren", "uitstroom", "leeg"]);
    assert_eq!(t.column("uitstroom").unwrap().values[0], Cell::Int(63589));
    assert_eq!(t.column("uitstroom").unwrap().values[1], Cell::Float(7615.5));
    assert!(t.column("leeg").unwrap().values[0].is_null());

    let back = serde_json::to_string(&t).unwrap();
    assert_eq!(
        back,
        r#"{"sectoren":["A","B"],"uitstroom":[63589,7615.5],"leeg":[null,"x"]}"#
    );
}

#[test]
fn json_with_ragged_columns_fails_to_parse() {
    let s = r#"{"a": [1, 2], "b": [1]}"#;
    assert!(serde_json::from_str::<Table>(s).is_err());
}

#[test]
fn numeric_cells_read_as_f64() {
    assert_eq!(Cell::Int(3).as_f64(), Some(3.0));
    assert_eq!(Cell::Float(2.5).as_f64(), Some(2.5));
    assert_eq!(Cell::from("3").as_f64(), None);
    assert_eq!(Cell::Null.as_f64(), None);
    assert_eq!(Cell::Float(-0.0).key(), Cell::Int(0).key());
}
