//! # easygrid - Declarative Data Grid Configuration
//!
//! `easygrid` compiles typed column descriptions into the `gridOptions`
//! structure consumed by an AG Grid style data-grid widget: column
//! definitions, filters, cell and header styles, generated cell renderers
//! (status badges, boolean pills, bars, progress rings, icon labels), and
//! grid-wide chrome such as the status bar and tool panels.
//!
//! The widget itself is external. It is reached through the
//! [`GridRenderer`] trait, which receives the assembled options and a copy
//! of the data and returns the selected rows.
//!
//! ## Core Concepts
//!
//! - [`StyleDescriptor`]: font size, family, weight and color, compiled to a
//!   style map
//! - [`ColumnDef`]: a column declaration; [`ColumnDef::build`] validates it
//!   into an immutable [`Column`]
//! - [`ColumnKind`]: the closed set of column kinds and their rules
//! - [`Table`]: assembles columns, style and [`TableOptions`] into grid
//!   options and renders them
//! - [`TableConfig`]: the same description loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use easygrid::{ColumnDef, Dataset, StatusState, Table};
//!
//! let columns = vec![
//!     ColumnDef::text("name").alias("Name").build()?,
//!     ColumnDef::date("created").alias("Created").build()?,
//!     ColumnDef::status(
//!         "state",
//!         vec![StatusState::new(1, "OK", "#16a34a"), StatusState::new(2, "Risk", "#dc2626")],
//!     )
//!     .alias("State")
//!     .build()?,
//! ];
//!
//! let data = Dataset::from_csv("name,created,state\nbolt,2024-01-05,1\n".as_bytes())?;
//! let options = Table::new(columns).grid_options(&data);
//!
//! // selection column + three declared columns
//! assert_eq!(options["columnDefs"].as_array().unwrap().len(), 4);
//! assert_eq!(options["rowHeight"], 40);
//! # Ok::<(), easygrid::GridError>(())
//! ```
//!
//! ## Generated Scripts
//!
//! Renderers and formatters are JavaScript sources produced from templates
//! in [`script`]. In the options JSON they appear as strings wrapped in
//! [`SCRIPT_MARKER`], which the widget bridge turns back into functions.
//! Every value spliced into a script goes through [`script::js_literal`].
//!
//! ## Configuration Files
//!
//! ```rust
//! use easygrid::TableConfig;
//!
//! let config = TableConfig::from_yaml(r#"
//! options: { sideBar: true }
//! columns:
//!   - { kind: text, id: name, alias: Name }
//!   - { kind: progress_ring, id: done, alias: Done }
//! "#)?;
//! let table = config.into_table()?;
//! assert_eq!(table.columns().len(), 2);
//! # Ok::<(), easygrid::GridError>(())
//! ```

pub mod color;
pub mod column;
pub mod config;
pub mod dataset;
mod error;
pub mod icons;
pub mod render;
pub mod script;
pub mod style;
pub mod table;

pub use column::{
    compile_columns, BoolPill, Column, ColumnDef, ColumnKind, DivergingBar, FilterKind,
    FilterMode, GroupShow, IconStatusEntry, LegacyState, ProgressRing, RingBand, StatusState,
};
pub use config::TableConfig;
pub use dataset::{Dataset, Row};
pub use error::{ConfigError, GridError, Result};
pub use render::{GridRenderer, JsonRenderer, RenderRequest};
pub use script::{Script, SCRIPT_MARKER};
pub use style::{
    FontWeight, StyleDescriptor, StyleMap, DEFAULT_CELL_STYLE, DEFAULT_FONT_FAMILY,
    DEFAULT_HEADER_STYLE,
};
pub use table::{Table, TableOptions};
