pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a JSON value as a single cell. Decimals arrive as strings.
pub(crate) fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Column headers for an array of row objects, taken from the first row.
pub(crate) fn row_headers(rows: &[Value]) -> Option<Vec<String>> {
    match rows.first() {
        Some(Value::Object(first)) => Some(first.keys().cloned().collect()),
        _ => None,
    }
}

/// One row's cells, in header order. Missing keys become empty cells.
pub(crate) fn row_cells(headers: &[String], row: &Value) -> Vec<String> {
    headers
        .iter()
        .map(|h| row.get(h.as_str()).map(cell).unwrap_or_default())
        .collect()
}
