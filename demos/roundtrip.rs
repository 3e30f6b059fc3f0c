//! Writing typed values back to cell text, including the escaping that keeps
//! reserved-looking strings safe on re-read.
//!
//! Run with: cargo run --example roundtrip

use typed_cell::{
    parse_cell, stringify_cell, stringify_cell_with_options, structured, CellValue,
    StringifyOptions, Value, YamlOptions,
};

fn main() {
    // values that came from cells go back to equivalent cells
    for raw in ["42", "true", "[1, 2, 3]", "2021-05-04T10:00:00Z"] {
        let value = parse_cell(raw);
        let written = stringify_cell(&value).unwrap();
        println!("{raw:24} -> {written:?} (re-reads equal: {})", parse_cell(&written) == value);
    }

    // strings that look like other types get escaped
    for raw in ["=1+1", "#comment", "2021-05-04", "true"] {
        let value = CellValue::Structured(Value::from(raw));
        let written = stringify_cell(&value).unwrap();
        println!("string {raw:17} -> {written:?}");
    }

    // flow style keeps collections on one line
    let table = CellValue::Structured(structured!({
        "name": "Alice",
        "scores": [1, 2, 3]
    }));
    let options = StringifyOptions::new().with_yaml(YamlOptions::new().with_flow(true));
    println!("flow: {}", stringify_cell_with_options(&table, options).unwrap());

    // nulls can write as empty cells
    let options = StringifyOptions::new().with_null_as_empty(true);
    let empty = stringify_cell_with_options(&CellValue::Null, options).unwrap();
    println!("null as empty: {empty:?}");
}
