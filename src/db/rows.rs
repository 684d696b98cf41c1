//! Result-set serialization.
//!
//! Every cell is rendered as text regardless of its storage class, and SQL
//! NULL becomes the empty string rather than JSON null, so every row of a
//! query carries the same key set. Pure conversion: no I/O, row and column
//! order preserved as returned by the database.

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Convert fetched rows into one JSON object per row, keys in result-set
/// column order.
pub fn serialize_rows(rows: &[SqliteRow]) -> Result<Vec<Value>, sqlx::Error> {
    rows.iter().map(serialize_row).collect()
}

fn serialize_row(row: &SqliteRow) -> Result<Value, sqlx::Error> {
    let mut object = Map::with_capacity(row.len());
    for (idx, column) in row.columns().iter().enumerate() {
        object.insert(column.name().to_string(), Value::String(cell_text(row, idx)?));
    }
    Ok(Value::Object(object))
}

/// Textual rendering of one cell. NULL is the empty-string sentinel; numeric
/// values go through their canonical `to_string`; blobs are decoded as lossy
/// UTF-8.
fn cell_text(row: &SqliteRow, idx: usize) -> Result<String, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(String::new());
    }
    let info = raw.type_info();
    let text = match info.name() {
        "INTEGER" => row.try_get::<i64, _>(idx)?.to_string(),
        "REAL" => row.try_get::<f64, _>(idx)?.to_string(),
        "BLOB" => String::from_utf8_lossy(&row.try_get::<Vec<u8>, _>(idx)?).into_owned(),
        // TEXT and everything declared on top of it
        _ => row.try_get::<String, _>(idx)?,
    };
    Ok(text)
}
