//! Column descriptors.
//!
//! A column is declared as a [`ColumnDef`]: the shape every column shares
//! (identity, sizing, filtering, styles, children, raw overrides) plus a
//! [`ColumnKind`] payload. [`ColumnDef::build`] finalizes it into an
//! immutable [`Column`]: the kind's rule runs exactly once, may adjust the
//! filter mode, dimensions and extra options, and may reject the
//! configuration with a [`ConfigError`].
//!
//! ```rust
//! use easygrid::{ColumnDef, FilterMode, StatusState};
//!
//! let name = ColumnDef::text("name").alias("Name").build().unwrap();
//! assert_eq!(name.filter(), &FilterMode::Kind("agTextColumnFilter".into()));
//!
//! let state = ColumnDef::status(
//!     "state",
//!     vec![StatusState::new(1, "OK", "#0f0"), StatusState::new(2, "Risk", "#f00")],
//! )
//! .build()
//! .unwrap();
//! assert!(state.extra().contains_key("cellRenderer"));
//! ```
//!
//! Column kinds:
//!
//! | Kind | Effect |
//! |------|--------|
//! | `base` | no extra rules |
//! | `text` | text filter |
//! | `date` | text filter, `YYYY-MM-DD` formatter |
//! | `checkbox` | 40px pinned selection checkbox, no filter |
//! | `status` | validated id → badge lookup, set filter |
//! | `bool_pill` | truthy/falsy coercion into a two-state pill |
//! | `diverging_bar` | zero-centered bar, number filter |
//! | `progress_ring` | circular 0–100 indicator, number filter |
//! | `icon_status` | icon + two-line label lookup |

mod compile;
mod kind;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use compile::compile_columns;
pub use kind::{
    BoolPill, ColumnKind, DivergingBar, IconStatusEntry, LegacyState, ProgressRing, RingBand,
    StatusState, FALSY_WORDS, TRUTHY_WORDS,
};

use crate::error::ConfigError;
use crate::style::StyleMap;

/// A built-in filter kind understood by the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Number,
    Date,
    Set,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Text => "agTextColumnFilter",
            FilterKind::Number => "agNumberColumnFilter",
            FilterKind::Date => "agDateColumnFilter",
            FilterKind::Set => "agSetColumnFilter",
        }
    }
}

/// How a column filters.
///
/// Serialized as `false`, `true`, or the filter kind name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FilterRaw", into = "FilterRaw")]
pub enum FilterMode {
    /// No filter.
    Off,
    /// The grid's default filter.
    #[default]
    On,
    /// A specific named filter kind.
    Kind(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FilterRaw {
    Bool(bool),
    Kind(String),
    Null(()),
}

impl From<FilterRaw> for FilterMode {
    fn from(raw: FilterRaw) -> Self {
        match raw {
            FilterRaw::Bool(true) => FilterMode::On,
            FilterRaw::Bool(false) | FilterRaw::Null(()) => FilterMode::Off,
            FilterRaw::Kind(s) if s.is_empty() => FilterMode::Off,
            FilterRaw::Kind(s) => FilterMode::Kind(s),
        }
    }
}

impl From<FilterMode> for FilterRaw {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Off => FilterRaw::Bool(false),
            FilterMode::On => FilterRaw::Bool(true),
            FilterMode::Kind(s) => FilterRaw::Kind(s),
        }
    }
}

impl From<bool> for FilterMode {
    fn from(on: bool) -> Self {
        if on {
            FilterMode::On
        } else {
            FilterMode::Off
        }
    }
}

impl From<FilterKind> for FilterMode {
    fn from(kind: FilterKind) -> Self {
        FilterMode::Kind(kind.as_str().to_string())
    }
}

impl From<&str> for FilterMode {
    fn from(kind: &str) -> Self {
        FilterRaw::Kind(kind.to_string()).into()
    }
}

impl FilterMode {
    /// True unless the filter is off.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, FilterMode::Off)
    }

    /// The value emitted as the `filter` option.
    pub fn to_value(&self) -> Value {
        match self {
            FilterMode::Off => Value::Bool(false),
            FilterMode::On => Value::Bool(true),
            FilterMode::Kind(kind) => Value::String(kind.clone()),
        }
    }

    /// Replaces an enabled filter with a specific kind; leaves `Off` alone.
    pub(crate) fn force_kind(&mut self, kind: FilterKind) {
        if self.is_enabled() {
            *self = kind.into();
        }
    }
}

/// Visibility of a child column inside an expandable header group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupShow {
    Open,
    Closed,
}

impl GroupShow {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupShow::Open => "open",
            GroupShow::Closed => "closed",
        }
    }
}

/// Declaration of one column, before finalization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnDef {
    /// Dataset column this displays. `None` for non-data columns.
    pub id: Option<String>,
    /// Header text.
    pub alias: Option<String>,
    pub filter: FilterMode,
    /// Fixed width in pixels. Disables flex and size-to-fit for the column.
    pub width: Option<u32>,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    /// Pin the column to the left edge.
    pub pinned: bool,
    /// Header style map; the default header style when absent.
    pub header_style: Option<StyleMap>,
    /// Cell style map; the default cell style when absent.
    pub cell_style: Option<StyleMap>,
    pub column_group_show: Option<GroupShow>,
    /// Child columns; a column with children is a group header.
    pub children: Vec<ColumnDef>,
    /// Raw grid options merged last, overriding anything computed.
    pub overrides: Map<String, Value>,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl ColumnDef {
    /// Creates a plain column bound to a dataset column.
    pub fn new(id: impl Into<String>) -> Self {
        ColumnDef {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Creates a column with no dataset binding (group headers, synthetic
    /// columns).
    pub fn unbound() -> Self {
        ColumnDef::default()
    }

    /// Creates a column of the given kind.
    pub fn with_kind(id: impl Into<String>, kind: ColumnKind) -> Self {
        ColumnDef::new(id).kind(kind)
    }

    pub fn text(id: impl Into<String>) -> Self {
        ColumnDef::with_kind(id, ColumnKind::Text)
    }

    pub fn date(id: impl Into<String>) -> Self {
        ColumnDef::with_kind(id, ColumnKind::Date)
    }

    /// A selection checkbox column. Not bound to data.
    pub fn checkbox() -> Self {
        ColumnDef::unbound().kind(ColumnKind::Checkbox)
    }

    pub fn status(id: impl Into<String>, states: Vec<StatusState>) -> Self {
        ColumnDef::with_kind(id, ColumnKind::Status { states })
    }

    pub fn bool_pill(id: impl Into<String>, pill: BoolPill) -> Self {
        ColumnDef::with_kind(id, ColumnKind::BoolPill(pill))
    }

    pub fn diverging_bar(id: impl Into<String>, bar: DivergingBar) -> Self {
        ColumnDef::with_kind(id, ColumnKind::DivergingBar(bar))
    }

    pub fn progress_ring(id: impl Into<String>) -> Self {
        ColumnDef::with_kind(id, ColumnKind::ProgressRing(ProgressRing::default()))
    }

    pub fn icon_status(
        id: impl Into<String>,
        entries: impl IntoIterator<Item = (String, IconStatusEntry)>,
    ) -> Self {
        ColumnDef::with_kind(
            id,
            ColumnKind::IconStatus {
                entries: entries.into_iter().collect(),
            },
        )
    }

    /// Status column keyed by arbitrary strings, without validation.
    #[deprecated(note = "use `ColumnDef::status` with explicit `StatusState`s")]
    pub fn status_dict(id: impl Into<String>, states: BTreeMap<String, LegacyState>) -> Self {
        ColumnDef::with_kind(id, ColumnKind::StatusDict { states })
    }

    /// Boolean pill configured from a `"true"`/`"false"` keyed map.
    #[deprecated(note = "use `ColumnDef::bool_pill` with a `BoolPill`")]
    pub fn bool_dict(id: impl Into<String>, states: BTreeMap<String, LegacyState>) -> Self {
        ColumnDef::with_kind(id, ColumnKind::BoolDict { states })
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<FilterMode>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Shorthand for `.filter(false)`.
    pub fn no_filter(self) -> Self {
        self.filter(FilterMode::Off)
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn header_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    pub fn cell_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.cell_style = Some(style.into());
        self
    }

    pub fn column_group_show(mut self, show: GroupShow) -> Self {
        self.column_group_show = Some(show);
        self
    }

    pub fn child(mut self, child: ColumnDef) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets a raw grid option. Applied after every computed option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Name used in error messages and logs.
    pub fn display_name(&self) -> &str {
        self.id
            .as_deref()
            .or(self.alias.as_deref())
            .unwrap_or("<unnamed>")
    }

    /// Finalizes the declaration into an immutable [`Column`].
    ///
    /// Children are finalized first. The kind's rule runs once and its
    /// options are merged with the caller's overrides, overrides last.
    pub fn build(mut self) -> Result<Column, ConfigError> {
        let children = std::mem::take(&mut self.children)
            .into_iter()
            .map(ColumnDef::build)
            .collect::<Result<Vec<_>, _>>()?;

        let kind = std::mem::take(&mut self.kind);
        let mut extra = kind.finalize(&mut self)?;
        self.kind = kind;

        for (key, value) in std::mem::take(&mut self.overrides) {
            extra.insert(key, value);
        }

        log::trace!(
            "built {} column '{}' ({} extra options)",
            self.kind.name(),
            self.display_name(),
            extra.len()
        );

        Ok(Column {
            def: self,
            children,
            extra,
        })
    }
}

impl TryFrom<ColumnDef> for Column {
    type Error = ConfigError;

    fn try_from(def: ColumnDef) -> Result<Self, Self::Error> {
        def.build()
    }
}

/// A finalized column. Immutable; compile it with [`Column::compile`].
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    def: ColumnDef,
    children: Vec<Column>,
    extra: Map<String, Value>,
}

impl Column {
    pub fn id(&self) -> Option<&str> {
        self.def.id.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.def.alias.as_deref()
    }

    pub fn filter(&self) -> &FilterMode {
        &self.def.filter
    }

    pub fn width(&self) -> Option<u32> {
        self.def.width
    }

    pub fn min_width(&self) -> Option<u32> {
        self.def.min_width
    }

    pub fn max_width(&self) -> Option<u32> {
        self.def.max_width
    }

    pub fn is_pinned(&self) -> bool {
        self.def.pinned
    }

    pub fn header_style(&self) -> Option<&StyleMap> {
        self.def.header_style.as_ref()
    }

    pub fn cell_style(&self) -> Option<&StyleMap> {
        self.def.cell_style.as_ref()
    }

    pub fn column_group_show(&self) -> Option<GroupShow> {
        self.def.column_group_show
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.def.kind
    }

    pub fn children(&self) -> &[Column] {
        &self.children
    }

    /// Options merged after the computed ones: the kind's options followed
    /// by caller overrides.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn display_name(&self) -> &str {
        self.def.display_name()
    }
}
