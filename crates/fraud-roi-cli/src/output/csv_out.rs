use serde_json::Value;
use std::io;

use super::{cell, row_cells, row_headers};

/// Write output as CSV to stdout.
///
/// Row sets (sweeps, matrix, plan) become one record per row; a single
/// projection becomes `field,value` pairs. Warnings are not emitted.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let written = write_csv(&mut wtr, value).and_then(|_| wtr.flush().map_err(csv::Error::from));
    if let Err(e) = written {
        tracing::error!("failed to write CSV output: {e}");
    }
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> Result<(), csv::Error> {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.get("results") {
                write_rows(wtr, rows)
            } else {
                let fields = match map.get("result") {
                    Some(Value::Object(result)) => result,
                    _ => map,
                };
                wtr.write_record(["field", "value"])?;
                for (key, val) in fields {
                    wtr.write_record([key.as_str(), &cell(val)])?;
                }
                Ok(())
            }
        }
        Value::Array(rows) => write_rows(wtr, rows),
        _ => wtr.write_record([cell(value)]),
    }
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), csv::Error> {
    match row_headers(rows) {
        Some(headers) => {
            wtr.write_record(&headers)?;
            for row in rows {
                wtr.write_record(row_cells(&headers, row))?;
            }
        }
        None => {
            for row in rows {
                wtr.write_record([cell(row)])?;
            }
        }
    }
    Ok(())
}
