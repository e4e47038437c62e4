//! Column compilation into grid column definitions.

use serde_json::{Map, Value};

use super::Column;
use crate::style::{DEFAULT_CELL_STYLE, DEFAULT_HEADER_STYLE};

impl Column {
    /// Compiles the column into the option map the grid expects.
    ///
    /// Pure: compiling the same column twice yields identical maps. Extra
    /// options are merged last and may override any computed key.
    pub fn compile(&self) -> Map<String, Value> {
        let def = &self.def;
        let mut out = Map::new();

        out.insert(
            "field".into(),
            def.id.clone().map(Value::String).unwrap_or(Value::Null),
        );
        if let Some(alias) = &def.alias {
            out.insert("headerName".into(), Value::String(alias.clone()));
        }
        out.insert("filter".into(), def.filter.to_value());

        if let Some(width) = def.width {
            out.insert("width".into(), Value::from(width));
            out.insert("flex".into(), Value::from(0));
            out.insert("suppressSizeToFit".into(), Value::Bool(true));
        }
        if let Some(min) = def.min_width {
            out.insert("minWidth".into(), Value::from(min));
        }
        if let Some(max) = def.max_width {
            out.insert("maxWidth".into(), Value::from(max));
        }
        if def.pinned {
            out.insert("pinned".into(), Value::from("left"));
        }
        if let Some(show) = def.column_group_show {
            out.insert("columnGroupShow".into(), Value::from(show.as_str()));
        }
        if !self.children.is_empty() {
            out.insert(
                "children".into(),
                Value::Array(compile_columns(&self.children)),
            );
        }

        let header = def
            .header_style
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADER_STYLE.compile());
        out.insert("headerStyle".into(), Value::Object(header));
        let cell = def
            .cell_style
            .clone()
            .unwrap_or_else(|| DEFAULT_CELL_STYLE.compile());
        out.insert("cellStyle".into(), Value::Object(cell));

        for (key, value) in &self.extra {
            out.insert(key.clone(), value.clone());
        }

        log::trace!(
            "compiled column '{}' with {} keys",
            self.display_name(),
            out.len()
        );
        out
    }
}

/// Compiles a column list in order.
pub fn compile_columns(columns: &[Column]) -> Vec<Value> {
    columns
        .iter()
        .map(|column| Value::Object(column.compile()))
        .collect()
}
