//! Tabular datasets handed to the grid.
//!
//! A [`Dataset`] is an ordered list of column names plus JSON rows. It is
//! loaded from CSV (values typed by inference) or from a JSON array of
//! records, and it knows how to describe itself as grid column definitions
//! when a table declares no columns of its own.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Number, Value};

use crate::error::{GridError, Result};

/// One record, keyed by column name.
pub type Row = Map<String, Value>;

/// An in-memory table.
///
/// Cloning produces the independent copy handed to a renderer, so the
/// caller's data is never shared with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates a dataset from explicit columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { columns, rows }
    }

    /// Creates a dataset from rows, taking columns in first-seen order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Dataset { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reads CSV with a header row. Cell types are inferred per cell: empty
    /// cells become `null`, then integers, floats and `true`/`false` are
    /// recognized, and anything else stays a string.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let row: Row = columns
                .iter()
                .zip(record.iter())
                .map(|(column, cell)| (column.clone(), infer_cell(cell)))
                .collect();
            rows.push(row);
        }
        Ok(Dataset { columns, rows })
    }

    /// Parses a JSON array of objects.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        let Value::Array(items) = value else {
            return Err(GridError::UnsupportedFormat(
                "JSON dataset must be an array of records".to_string(),
            ));
        };
        let rows = items
            .into_iter()
            .map(|item| match item {
                Value::Object(row) => Ok(row),
                other => Err(GridError::UnsupportedFormat(format!(
                    "JSON dataset record must be an object, got {}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Dataset::from_rows(rows))
    }

    /// Loads a `.csv` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let dataset = match ext.as_deref() {
            Some("csv") => Dataset::from_csv(fs::File::open(path)?)?,
            Some("json") => Dataset::from_json_str(&fs::read_to_string(path)?)?,
            _ => {
                return Err(GridError::UnsupportedFormat(format!(
                    "{} (expected .csv or .json)",
                    path.display()
                )))
            }
        };
        log::debug!(
            "loaded dataset {}: {} columns, {} rows",
            path.display(),
            dataset.columns.len(),
            dataset.rows.len()
        );
        Ok(dataset)
    }

    /// True when the column holds at least one number and nothing else
    /// except nulls.
    pub fn is_numeric(&self, column: &str) -> bool {
        let mut seen = false;
        for value in self.rows.iter().filter_map(|row| row.get(column)) {
            match value {
                Value::Number(_) => seen = true,
                Value::Null => {}
                _ => return false,
            }
        }
        seen
    }

    /// Column definitions derived from the data alone.
    pub fn default_column_defs(&self) -> Vec<Value> {
        self.columns
            .iter()
            .map(|column| {
                let mut def = Map::new();
                def.insert("headerName".into(), Value::String(column.clone()));
                def.insert("field".into(), Value::String(column.clone()));
                if self.is_numeric(column) {
                    def.insert(
                        "type".into(),
                        json!(["numericColumn", "numberColumnFilter"]),
                    );
                }
                Value::Object(def)
            })
            .collect()
    }
}

/// Serializes as the row array (`rowData`).
impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

fn infer_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if let Some(number) = Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(cell.to_string()),
    }
}
