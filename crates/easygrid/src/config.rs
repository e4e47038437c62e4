//! Table configuration files.
//!
//! A table can be described in YAML or JSON instead of code:
//!
//! ```yaml
//! style:
//!   fontSize: 14
//! options:
//!   sideBar: true
//!   rowHeight: 36
//! columns:
//!   - { kind: text, id: name, alias: Name }
//!   - kind: status
//!     id: state
//!     alias: State
//!     states:
//!       - { id: 1, label: OK, color: "#0f0" }
//!       - { id: 2, label: Risk, color: "#f00" }
//! ```
//!
//! Every column needs a `kind` (`base` for a plain column). Keys are
//! camelCase throughout, matching the grid's own option names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnDef};
use crate::error::{ConfigError, GridError, Result};
use crate::style::StyleDescriptor;
use crate::table::{Table, TableOptions};

/// A deserialized table description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Default cell style; the built-in default when absent.
    pub style: Option<StyleDescriptor>,
    pub options: TableOptions,
    pub columns: Vec<ColumnDef>,
}

impl TableConfig {
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Loads a `.yaml`, `.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let config = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&fs::read_to_string(path)?)?,
            Some("json") => Self::from_json(&fs::read_to_string(path)?)?,
            _ => {
                return Err(GridError::UnsupportedFormat(format!(
                    "{} (expected .yaml, .yml or .json)",
                    path.display()
                )))
            }
        };
        log::debug!(
            "loaded table config {}: {} columns",
            path.display(),
            config.columns.len()
        );
        Ok(config)
    }

    /// Finalizes every column and assembles the table.
    pub fn into_table(self) -> std::result::Result<Table, ConfigError> {
        let columns = self
            .columns
            .into_iter()
            .map(ColumnDef::build)
            .collect::<std::result::Result<Vec<Column>, _>>()?;
        let mut table = Table::new(columns).options(self.options);
        if let Some(style) = self.style {
            table = table.style(style);
        }
        Ok(table)
    }
}
