//! Table assembly.
//!
//! [`Table`] combines finalized columns, a grid-wide cell style and
//! [`TableOptions`] into the `gridOptions` structure, then hands it with a
//! copy of the data to a [`GridRenderer`].
//!
//! ```rust
//! use easygrid::{ColumnDef, Dataset, Table, TableOptions};
//!
//! let columns = vec![ColumnDef::text("name").alias("Name").build().unwrap()];
//! let data = Dataset::from_json_str(r#"[{"name": "bolt"}]"#).unwrap();
//! let options = Table::new(columns)
//!     .options(TableOptions { side_bar: true, ..TableOptions::default() })
//!     .grid_options(&data);
//!
//! let defs = options["columnDefs"].as_array().unwrap();
//! assert_eq!(defs[0]["field"], "__selection__");
//! assert_eq!(defs[1]["field"], "name");
//! assert!(options.get("sideBar").is_some());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::column::{compile_columns, Column};
use crate::dataset::{Dataset, Row};
use crate::render::{GridRenderer, RenderRequest};
use crate::script::Script;
use crate::style::{StyleDescriptor, DEFAULT_CELL_STYLE};

/// Field name of the synthetic selection column.
pub const SELECTION_FIELD: &str = "__selection__";

/// Grid-wide behavior flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Prepend a pinned selection checkbox column.
    pub select_checkbox: bool,
    /// Show row count and aggregation panels.
    pub status_bar: bool,
    /// Show the columns and filters tool panels.
    pub side_bar: bool,
    pub row_height: u32,
    pub floating_filter: bool,
    pub fit_columns_on_grid_load: bool,
    /// Widget height in pixels.
    pub height: Option<u32>,
    /// Body of a `getRowStyle` function.
    pub row_style: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            select_checkbox: true,
            status_bar: true,
            side_bar: false,
            row_height: 40,
            floating_filter: false,
            fit_columns_on_grid_load: false,
            height: None,
            row_style: None,
        }
    }
}

/// A table ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    style: StyleDescriptor,
    options: TableOptions,
}

impl Table {
    /// Creates a table over the given columns. With no columns, column
    /// definitions are derived from the dataset at assembly time.
    pub fn new(columns: Vec<Column>) -> Self {
        Table {
            columns,
            style: DEFAULT_CELL_STYLE,
            options: TableOptions::default(),
        }
    }

    /// Sets the default cell style for every column.
    pub fn style(mut self, style: StyleDescriptor) -> Self {
        self.style = style;
        self
    }

    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn table_options(&self) -> &TableOptions {
        &self.options
    }

    /// Assembles the full `gridOptions` structure.
    pub fn grid_options(&self, data: &Dataset) -> Value {
        let opts = &self.options;
        let mut out = Map::new();

        out.insert(
            "columnDefs".into(),
            Value::Array(self.column_defs(data)),
        );
        out.insert(
            "defaultColDef".into(),
            json!({
                "filter": true,
                "sortable": true,
                "resizable": true,
                "editable": false,
                "floatingFilter": opts.floating_filter,
                "cellStyle": Value::Object(self.style.compile()),
            }),
        );
        if opts.status_bar {
            out.insert("statusBar".into(), status_bar());
        }
        if opts.side_bar {
            out.insert("sideBar".into(), side_bar());
        }
        out.insert("rowSelection".into(), Value::from("single"));
        out.insert("enableRangeSelection".into(), Value::Bool(true));
        out.insert("enableCellTextSelection".into(), Value::Bool(false));
        out.insert("suppressRowClickSelection".into(), Value::Bool(true));
        out.insert("suppressMovableColumns".into(), Value::Bool(true));
        out.insert("suppressColumnVirtualisation".into(), Value::Bool(true));
        out.insert("rowHeight".into(), Value::from(opts.row_height));
        if let Some(body) = &opts.row_style {
            out.insert("getRowStyle".into(), Script::new(body.clone()).into());
        }

        log::debug!(
            "assembled grid options: {} columns, status bar {}, side bar {}",
            out["columnDefs"].as_array().map_or(0, Vec::len),
            opts.status_bar,
            opts.side_bar
        );
        Value::Object(out)
    }

    fn column_defs(&self, data: &Dataset) -> Vec<Value> {
        if self.columns.is_empty() {
            let mut defs = data.default_column_defs();
            if self.options.select_checkbox {
                if let Some(Value::Object(first)) = defs.first_mut() {
                    first.insert("checkboxSelection".into(), Value::Bool(true));
                }
            }
            return defs;
        }
        let mut defs = compile_columns(&self.columns);
        if self.options.select_checkbox {
            defs.insert(0, selection_column());
        }
        defs
    }

    /// Builds the request for a dataset. The request owns a copy of the
    /// data.
    pub fn request(&self, data: &Dataset) -> RenderRequest {
        let mut request = RenderRequest::new(self.grid_options(data), data.clone());
        request.height = self.options.height;
        request.fit_columns_on_grid_load = self.options.fit_columns_on_grid_load;
        request
    }

    /// Renders through `renderer` and returns its selection.
    pub fn render<R: GridRenderer>(
        &self,
        data: &Dataset,
        renderer: &mut R,
    ) -> Result<Vec<Row>, R::Error> {
        renderer.render(self.request(data))
    }
}

/// The pinned checkbox column prepended when `select_checkbox` is set.
pub fn selection_column() -> Value {
    json!({
        "headerName": "",
        "field": SELECTION_FIELD,
        "checkboxSelection": true,
        "headerCheckboxSelection": false,
        "width": 40,
        "maxWidth": 40,
        "minWidth": 40,
        "pinned": "left",
        "sortable": false,
        "resizable": false,
        "filter": false,
        "cellStyle": {
            "display": "flex",
            "alignItems": "center",
            "justifyContent": "center",
            "padding": "0",
        },
    })
}

/// Row count, filtered, selected and aggregation panels.
pub fn status_bar() -> Value {
    json!({
        "statusPanels": [
            { "statusPanel": "agTotalRowCountComponent", "align": "left" },
            { "statusPanel": "agFilteredRowCountComponent" },
            { "statusPanel": "agSelectedRowCountComponent" },
            { "statusPanel": "agAggregationComponent" },
        ]
    })
}

/// Columns and filters tool panels.
pub fn side_bar() -> Value {
    json!({
        "toolPanels": [
            {
                "id": "columns",
                "labelDefault": "Columnas",
                "iconKey": "columns",
                "toolPanel": "agColumnsToolPanel",
                "toolPanelParams": {
                    "suppressRowGroups": true,
                    "suppressValues": true,
                    "suppressPivots": true,
                    "suppressPivotMode": true,
                },
            },
            {
                "id": "filters",
                "labelDefault": "Filtros",
                "iconKey": "filter",
                "toolPanel": "agFiltersToolPanel",
            },
        ]
    })
}
