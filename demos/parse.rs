//! First steps: what the classifier makes of a row of raw cells.
//!
//! Run with: cargo run --example parse

use typed_cell::parse_cell;

fn main() {
    let row = [
        "",
        "null",
        "42",
        "2.5",
        "true",
        ".nan",
        "-inf",
        "/ab+c/gi",
        "2021-05-04T10:00:00Z",
        "[1, 2, 3]",
        "{name: Alice, admin: true}",
        "plain text",
        "not: valid: yaml: at all:",
    ];

    for cell in row {
        println!("{:28} => {:?}", format!("{cell:?}"), parse_cell(cell));
    }
}
