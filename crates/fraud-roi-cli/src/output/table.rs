use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell, row_cells, row_headers};

/// Keys printed as trailing notes rather than table rows.
const TRAILER_KEYS: [&str; 2] = ["warnings", "methodology"];

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_fields(result);
            } else if let Some(Value::Array(rows)) = map.get("results") {
                print_rows(rows);
                print_extras(map);
            } else {
                print_fields(value);
            }
            print_trailer(map);
        }
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", cell(value)),
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if TRAILER_KEYS.contains(&key.as_str()) {
            continue;
        }
        builder.push_record([key.clone(), cell(val)]);
    }
    Table::from(builder)
}

fn print_fields(value: &Value) {
    match value {
        Value::Object(map) => println!("{}", field_table(map)),
        other => println!("{}", cell(other)),
    }
}

fn print_rows(rows: &[Value]) {
    let Some(headers) = row_headers(rows) else {
        if rows.is_empty() {
            println!("(empty)");
        }
        for row in rows {
            println!("{}", cell(row));
        }
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows {
        builder.push_record(row_cells(&headers, row));
    }
    println!("{}", Table::from(builder));
}

/// Anything beside the row set: matrix totals, the expanded attribute,
/// the positioning statement.
fn print_extras(map: &Map<String, Value>) {
    for (key, val) in map {
        if key == "results" || TRAILER_KEYS.contains(&key.as_str()) {
            continue;
        }
        match val {
            Value::Null => {}
            Value::Object(inner) => {
                println!("\n{key}:");
                if let Some(Value::Array(details)) = inner.get("details") {
                    let mut head = inner.clone();
                    head.remove("details");
                    println!("{}", field_table(&head));
                    print_rows(details);
                } else {
                    println!("{}", field_table(inner));
                }
            }
            other => println!("\n{key}: {}", cell(other)),
        }
    }
}

fn print_trailer(map: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                println!("  - {}", cell(w));
            }
        }
    }

    if let Some(Value::String(meth)) = map.get("methodology") {
        println!("\nMethodology: {meth}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_table_skips_trailer_keys() {
        let map = json!({"saved_cost": "2709375", "warnings": [], "methodology": "m"});
        let rendered = field_table(map.as_object().unwrap()).to_string();
        assert!(rendered.contains("saved_cost"));
        assert!(!rendered.contains("methodology"));
    }
}
