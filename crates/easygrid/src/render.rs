//! The seam to the grid widget.
//!
//! The grid itself is external. A [`GridRenderer`] receives one
//! [`RenderRequest`] (the assembled options plus a private copy of the
//! data) and reports back the rows the user selected.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::dataset::{Dataset, Row};

/// Column auto-size mode requested from the widget.
pub const AUTO_SIZE_MODE: &str = "FIT_ALL_COLUMNS_TO_VIEW";

/// Widget theme name.
pub const THEME: &str = "streamlit";

/// Everything the widget needs to draw one table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub grid_options: Value,
    pub row_data: Dataset,
    /// Explicit pixel height; the widget picks one when absent.
    pub height: Option<u32>,
    pub fit_columns_on_grid_load: bool,
    pub columns_auto_size_mode: &'static str,
    pub enable_enterprise_modules: bool,
    pub allow_unsafe_jscode: bool,
    pub theme: &'static str,
}

impl RenderRequest {
    pub fn new(grid_options: Value, row_data: Dataset) -> Self {
        RenderRequest {
            grid_options,
            row_data,
            height: None,
            fit_columns_on_grid_load: false,
            columns_auto_size_mode: AUTO_SIZE_MODE,
            enable_enterprise_modules: true,
            allow_unsafe_jscode: true,
            theme: THEME,
        }
    }
}

/// A grid widget.
///
/// Implementations draw the request and return the selected rows. Errors
/// are the renderer's own and reach the caller unchanged.
pub trait GridRenderer {
    type Error;

    fn render(&mut self, request: RenderRequest) -> Result<Vec<Row>, Self::Error>;
}

impl<R: GridRenderer + ?Sized> GridRenderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, request: RenderRequest) -> Result<Vec<Row>, Self::Error> {
        (**self).render(request)
    }
}

/// Writes the request as JSON and selects nothing.
///
/// Used to hand the payload to an out-of-process widget bridge, or to
/// inspect it.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        JsonRenderer {
            writer,
            pretty: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GridRenderer for JsonRenderer<W> {
    type Error = crate::GridError;

    fn render(&mut self, request: RenderRequest) -> Result<Vec<Row>, Self::Error> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &request)?;
        } else {
            serde_json::to_writer(&mut self.writer, &request)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(Vec::new())
    }
}
