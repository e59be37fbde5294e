// src/core/gviz.rs
//! Google Visualization ("gviz") query responses.
//!
//! The endpoint answers with a JSON object wrapped in a callback:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"version":"0.6","status":"ok","table":{...}});
//! ```
//!
//! The wrapper is treated as a micro-format: the payload is whatever lies between
//! the first `{` and the last `}` of the body. Multi-object bodies are not supported.
//! If the endpoint ever offers a plain JSON contract, [`unwrap`] is the only piece to drop.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SheetError;
use crate::sheets::Row;

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    errors: Vec<ResponseError>,
    #[serde(default)]
    table: Option<Table>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detailed_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Table {
    #[serde(default)]
    cols: Vec<Col>,
    #[serde(default)]
    rows: Vec<TableRow>,
}

#[derive(Debug, Deserialize)]
struct Col {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TableRow {
    #[serde(default)]
    c: Vec<Option<Cell>>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    #[serde(default)]
    v: Option<Value>,
}

/// Slice out the JSON payload: first `{` through last `}`.
pub fn unwrap(body: &str) -> Result<&str, SheetError> {
    let start = body.find('{');
    let end = body.rfind('}');
    match (start, end) {
        (Some(s), Some(e)) if e > s => Ok(&body[s..=e]),
        _ => Err(SheetError::Parse(s!("no JSON object in response body"))),
    }
}

/// Unwrap + decode a full response body into keyed rows.
pub fn parse(body: &str) -> Result<Vec<Row>, SheetError> {
    let resp: Response = serde_json::from_str(unwrap(body)?)?;

    if resp.status.as_deref() == Some("error") {
        let msg = resp
            .errors
            .first()
            .and_then(|e| e.detailed_message.clone().or_else(|| e.message.clone()))
            .unwrap_or_else(|| s!("endpoint reported an error"));
        return Err(SheetError::Parse(msg));
    }

    let table = resp
        .table
        .ok_or_else(|| SheetError::Parse(s!("response has no table")))?;

    let labels: Vec<Option<String>> = table.cols.iter().map(column_label).collect();

    let rows = table
        .rows
        .into_iter()
        .map(|r| {
            let mut row = Row::new();
            for (idx, cell) in r.c.into_iter().enumerate() {
                let key = labels
                    .get(idx)
                    .cloned()
                    .flatten()
                    .unwrap_or_else(|| format!("col_{idx}"));
                let val = cell.and_then(|c| c.v).map(|v| cell_text(&v)).unwrap_or_default();
                row.insert(key, val);
            }
            row
        })
        .collect();

    Ok(rows)
}

/// Label, else id, else nothing (caller falls back to `col_{idx}`).
fn column_label(c: &Col) -> Option<String> {
    [c.label.as_deref(), c.id.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(String::from)
}

/// Cell value as the page would stringify it.
fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(number_text).unwrap_or_default()
            }
        }
        other => other.to_string(),
    }
}

// Same text as JS `String(n)`: "2023" for 2023.0, exponent form ("1e+21",
// "1e-7") outside [1e-6, 1e21).
fn number_text(f: f64) -> String {
    if f == 0.0 {
        return s!("0");
    }
    let a = f.abs();
    if a.is_finite() && (a >= 1e21 || a < 1e-6) {
        let e = format!("{f:e}");
        match e.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => join!(mantissa, "e+", exp),
            _ => e,
        }
    } else {
        f.to_string()
    }
}
