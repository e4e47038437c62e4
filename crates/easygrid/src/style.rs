//! Cell and header text styling.
//!
//! A [`StyleDescriptor`] is a small immutable value describing font size,
//! family, weight and color. [`StyleDescriptor::compile`] projects it into
//! the CSS-like property map the grid expects for `cellStyle` and
//! `headerStyle`.
//!
//! ```rust
//! use easygrid::{FontWeight, StyleDescriptor};
//!
//! let style = StyleDescriptor::new().font_size(13).font_weight(FontWeight::Bold);
//! let map = style.compile();
//! assert_eq!(map["fontSize"], "13px");
//! assert_eq!(map["fontWeight"], "bold");
//! assert_eq!(map["display"], "flex");
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A compiled style: CSS property name → value.
pub type StyleMap = Map<String, Value>;

/// Font weight. Only bold is distinguished; absence means the grid default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Bold => "bold",
        }
    }
}

/// Text styling for cells or headers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// Font size in pixels.
    pub font_size: Option<u32>,
    /// CSS font family list.
    pub font_family: Option<Cow<'static, str>>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Text color, usually hex (`"#000000"`).
    pub color: Option<Cow<'static, str>>,
}

/// Font family used by the default styles.
pub const DEFAULT_FONT_FAMILY: &str = "Neo Sans, sans-serif";

/// Default style applied to cells when a column does not set its own.
pub const DEFAULT_CELL_STYLE: StyleDescriptor = StyleDescriptor {
    font_size: Some(14),
    font_family: Some(Cow::Borrowed(DEFAULT_FONT_FAMILY)),
    font_weight: None,
    color: None,
};

/// Default style applied to headers when a column does not set its own.
pub const DEFAULT_HEADER_STYLE: StyleDescriptor = StyleDescriptor {
    font_size: Some(15),
    font_family: Some(Cow::Borrowed(DEFAULT_FONT_FAMILY)),
    font_weight: Some(FontWeight::Bold),
    color: None,
};

impl StyleDescriptor {
    /// Creates a descriptor with every attribute absent.
    pub const fn new() -> Self {
        StyleDescriptor {
            font_size: None,
            font_family: None,
            font_weight: None,
            color: None,
        }
    }

    pub fn font_size(mut self, px: u32) -> Self {
        self.font_size = Some(px);
        self
    }

    pub fn font_family(mut self, family: impl Into<Cow<'static, str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Shorthand for `.font_weight(FontWeight::Bold)`.
    pub fn bold(self) -> Self {
        self.font_weight(FontWeight::Bold)
    }

    pub fn color(mut self, color: impl Into<Cow<'static, str>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Compiles the descriptor into a style map.
    ///
    /// Absent attributes are omitted. `display: flex` and
    /// `alignItems: center` are always present so cell content is
    /// vertically centered.
    pub fn compile(&self) -> StyleMap {
        let mut map = StyleMap::new();
        if let Some(size) = self.font_size {
            map.insert("fontSize".into(), Value::String(format!("{}px", size)));
        }
        if let Some(family) = &self.font_family {
            map.insert("fontFamily".into(), Value::String(family.to_string()));
        }
        if let Some(weight) = self.font_weight {
            map.insert("fontWeight".into(), Value::from(weight.as_str()));
        }
        if let Some(color) = &self.color {
            map.insert("color".into(), Value::String(color.to_string()));
        }
        map.insert("display".into(), Value::from("flex"));
        map.insert("alignItems".into(), Value::from("center"));
        map
    }
}

impl From<StyleDescriptor> for StyleMap {
    fn from(style: StyleDescriptor) -> Self {
        style.compile()
    }
}

impl From<&StyleDescriptor> for StyleMap {
    fn from(style: &StyleDescriptor) -> Self {
        style.compile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_descriptor_emits_layout_keys_only() {
        let map = StyleDescriptor::new().compile();
        assert_eq!(map.len(), 2);
        assert_eq!(map["display"], "flex");
        assert_eq!(map["alignItems"], "center");
    }

    #[test]
    fn font_size_has_px_suffix() {
        let map = StyleDescriptor::new().font_size(15).compile();
        assert_eq!(map["fontSize"], "15px");
    }

    #[test]
    fn all_fields_compile() {
        let map = StyleDescriptor::new()
            .font_size(12)
            .font_family("Inter")
            .bold()
            .color("#111111")
            .compile();
        assert_eq!(map["fontSize"], "12px");
        assert_eq!(map["fontFamily"], "Inter");
        assert_eq!(map["fontWeight"], "bold");
        assert_eq!(map["color"], "#111111");
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn default_constants() {
        let cell = DEFAULT_CELL_STYLE.compile();
        assert_eq!(cell["fontSize"], "14px");
        assert_eq!(cell["fontFamily"], DEFAULT_FONT_FAMILY);
        assert!(cell.get("fontWeight").is_none());

        let header = DEFAULT_HEADER_STYLE.compile();
        assert_eq!(header["fontSize"], "15px");
        assert_eq!(header["fontWeight"], "bold");
    }

    #[test]
    fn compile_is_repeatable() {
        let style = DEFAULT_HEADER_STYLE.clone().color("#333333");
        assert_eq!(style.compile(), style.compile());
    }

    #[test]
    fn serde_uses_camel_case() {
        let style: StyleDescriptor =
            serde_yaml::from_str("fontSize: 13\nfontWeight: bold\nfontFamily: Inter").unwrap();
        assert_eq!(style.font_size, Some(13));
        assert_eq!(style.font_weight, Some(FontWeight::Bold));
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
        assert_eq!(style.color, None);
    }

    #[test]
    fn into_style_map() {
        let map: StyleMap = StyleDescriptor::new().color("#fff").into();
        assert_eq!(map["color"], "#fff");
    }
}
