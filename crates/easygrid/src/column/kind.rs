//! Column kinds and their finalize rules.

use std::collections::{BTreeMap, HashSet};

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{ColumnDef, FilterKind, FilterMode};
use crate::color::{self, CssColor};
use crate::error::ConfigError;
use crate::icons;
use crate::script::{self, fingerprint, js_literal, ClassSuffixes};

/// Alpha applied to a state color for its badge background.
const BADGE_TINT: u8 = 0x22;

/// Text forms coerced to `true` by boolean pills (compared trimmed and
/// lowercased).
pub const TRUTHY_WORDS: &[&str] = &["1", "true", "t", "yes", "y", "si", "sí", "s"];

/// Text forms coerced to `false` by boolean pills.
pub const FALSY_WORDS: &[&str] = &["0", "false", "f", "no", "n"];

/// The closed set of column kinds.
///
/// Serialized with a `kind` tag next to the common column fields:
///
/// ```yaml
/// kind: bool_pill
/// id: active
/// trueLabel: Active
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Base,
    Text,
    Date,
    Checkbox,
    Status {
        states: Vec<StatusState>,
    },
    BoolPill(BoolPill),
    DivergingBar(DivergingBar),
    ProgressRing(ProgressRing),
    IconStatus {
        #[serde(deserialize_with = "scalar_keys")]
        entries: BTreeMap<String, IconStatusEntry>,
    },
    /// Lenient status lookup keyed by arbitrary strings. Deprecated.
    StatusDict {
        #[serde(deserialize_with = "scalar_keys")]
        states: BTreeMap<String, LegacyState>,
    },
    /// Boolean pill configured by `"true"`/`"false"` keys. Deprecated.
    BoolDict {
        #[serde(deserialize_with = "scalar_keys")]
        states: BTreeMap<String, LegacyState>,
    },
}

/// Lookup key written as any scalar in a config file. `1:`, `1.5:` and
/// `true:` become `"1"`, `"1.5"` and `"true"`, the strings the generated
/// scripts see after `String(value)`.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct ScalarKey(String);

impl<'de> Deserialize<'de> for ScalarKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = ScalarKey;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a string, number or boolean key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ScalarKey, E> {
                Ok(ScalarKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ScalarKey, E> {
                Ok(ScalarKey(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ScalarKey, E> {
                Ok(ScalarKey(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ScalarKey, E> {
                Ok(ScalarKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ScalarKey, E> {
                Ok(ScalarKey(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ScalarKey, E> {
                Ok(ScalarKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

fn scalar_keys<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = BTreeMap::<ScalarKey, T>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(key, value)| (key.0, value)).collect())
}

/// One state of a status column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusState {
    pub id: i64,
    #[serde(alias = "alias")]
    pub label: String,
    pub color: String,
}

impl StatusState {
    pub fn new(id: i64, label: impl Into<String>, color: impl Into<String>) -> Self {
        StatusState {
            id,
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Label and color pair used by the deprecated dictionary kinds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyState {
    #[serde(alias = "alias")]
    pub label: String,
    pub color: String,
}

impl LegacyState {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        LegacyState {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Two-state pill for boolean-like values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoolPill {
    pub true_label: String,
    pub false_label: String,
    pub true_color: String,
    pub false_color: String,
}

impl Default for BoolPill {
    fn default() -> Self {
        BoolPill {
            true_label: "Yes".to_string(),
            false_label: "No".to_string(),
            true_color: "#16a34a".to_string(),
            false_color: "#dc2626".to_string(),
        }
    }
}

impl BoolPill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(mut self, true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
        self.true_label = true_label.into();
        self.false_label = false_label.into();
        self
    }

    pub fn colors(mut self, true_color: impl Into<String>, false_color: impl Into<String>) -> Self {
        self.true_color = true_color.into();
        self.false_color = false_color.into();
        self
    }

    /// Coerces a raw cell value the way the generated pill script does.
    ///
    /// Returns `None` for values that are neither truthy nor falsy; those
    /// cells render empty.
    pub fn coerce(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_f64() {
                Some(x) if x == 1.0 => Some(true),
                Some(x) if x == 0.0 => Some(false),
                _ => None,
            },
            Value::String(s) => {
                let text = s.trim().to_lowercase();
                if TRUTHY_WORDS.contains(&text.as_str()) {
                    Some(true)
                } else if FALSY_WORDS.contains(&text.as_str()) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// The label shown for a raw value, if it coerces.
    pub fn label_for(&self, value: &Value) -> Option<&str> {
        Self::coerce(value).map(|state| {
            if state {
                self.true_label.as_str()
            } else {
                self.false_label.as_str()
            }
        })
    }
}

/// Zero-centered horizontal bar for signed values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DivergingBar {
    /// Magnitude that fills half the track. No renderer without it.
    pub max: Option<f64>,
    pub positive_color: String,
    pub negative_color: String,
    pub track_color: String,
    /// Print the number next to the bar.
    pub show_value: bool,
}

impl Default for DivergingBar {
    fn default() -> Self {
        DivergingBar {
            max: None,
            positive_color: "#16a34a".to_string(),
            negative_color: "#dc2626".to_string(),
            track_color: "#e5e7eb".to_string(),
            show_value: true,
        }
    }
}

impl DivergingBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn colors(mut self, positive: impl Into<String>, negative: impl Into<String>) -> Self {
        self.positive_color = positive.into();
        self.negative_color = negative.into();
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    /// Fraction of the track the bar covers for `value`: `|value| / max`,
    /// capped at one half (one side of the axis).
    pub fn fill_fraction(value: f64, max: f64) -> f64 {
        (value.abs() / max).min(0.5)
    }
}

/// Color band of a progress ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingBand {
    High,
    Medium,
    Low,
    Critical,
}

/// Circular 0–100 progress indicator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressRing {
    pub high_color: String,
    pub medium_color: String,
    pub low_color: String,
    pub critical_color: String,
    pub track_color: String,
    /// Ring diameter in pixels.
    pub size: u32,
}

impl Default for ProgressRing {
    fn default() -> Self {
        ProgressRing {
            high_color: "#16a34a".to_string(),
            medium_color: "#eab308".to_string(),
            low_color: "#f97316".to_string(),
            critical_color: "#dc2626".to_string(),
            track_color: "#e5e7eb".to_string(),
            size: 28,
        }
    }
}

impl ProgressRing {
    pub const HIGH_AT: f64 = 80.0;
    pub const MEDIUM_AT: f64 = 50.0;
    pub const LOW_AT: f64 = 25.0;

    /// Band for a value, clamped to `[0, 100]` first.
    pub fn band(value: f64) -> RingBand {
        let pct = value.clamp(0.0, 100.0);
        if pct >= Self::HIGH_AT {
            RingBand::High
        } else if pct >= Self::MEDIUM_AT {
            RingBand::Medium
        } else if pct >= Self::LOW_AT {
            RingBand::Low
        } else {
            RingBand::Critical
        }
    }

    pub fn color_for(&self, value: f64) -> &str {
        match Self::band(value) {
            RingBand::High => &self.high_color,
            RingBand::Medium => &self.medium_color,
            RingBand::Low => &self.low_color,
            RingBand::Critical => &self.critical_color,
        }
    }
}

/// One mapped value of an icon status column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconStatusEntry {
    pub label: String,
    pub color: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Second text line. The raw value when absent.
    #[serde(default)]
    pub caption: Option<String>,
}

fn default_icon() -> String {
    IconStatusEntry::FALLBACK_ICON.to_string()
}

impl IconStatusEntry {
    pub const FALLBACK_ICON: &'static str = "circle";
    pub const FALLBACK_COLOR: &'static str = "#9ca3af";

    pub fn new(label: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        IconStatusEntry {
            label: label.into(),
            color: color.into(),
            icon: icon.into(),
            caption: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Serialize)]
struct BadgeCss {
    suffix: String,
    color: String,
    background: String,
}

impl BadgeCss {
    fn new(suffix: String, color: &CssColor) -> Self {
        BadgeCss {
            suffix,
            color: color.to_css(),
            background: color.tint(BADGE_TINT),
        }
    }
}

impl ColumnKind {
    /// The serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Base => "base",
            ColumnKind::Text => "text",
            ColumnKind::Date => "date",
            ColumnKind::Checkbox => "checkbox",
            ColumnKind::Status { .. } => "status",
            ColumnKind::BoolPill(_) => "bool_pill",
            ColumnKind::DivergingBar(_) => "diverging_bar",
            ColumnKind::ProgressRing(_) => "progress_ring",
            ColumnKind::IconStatus { .. } => "icon_status",
            ColumnKind::StatusDict { .. } => "status_dict",
            ColumnKind::BoolDict { .. } => "bool_dict",
        }
    }

    /// Applies the kind's rule to the column shape and returns the options
    /// it contributes.
    pub(super) fn finalize(&self, def: &mut ColumnDef) -> Result<Map<String, Value>, ConfigError> {
        match self {
            ColumnKind::Base => Ok(Map::new()),
            ColumnKind::Text => {
                def.filter.force_kind(FilterKind::Text);
                Ok(Map::new())
            }
            ColumnKind::Date => finalize_date(def),
            ColumnKind::Checkbox => Ok(finalize_checkbox(def)),
            ColumnKind::Status { states } => finalize_status(def, states),
            ColumnKind::BoolPill(pill) => finalize_bool_pill(def, pill),
            ColumnKind::DivergingBar(bar) => finalize_diverging_bar(def, bar),
            ColumnKind::ProgressRing(ring) => finalize_progress_ring(def, ring),
            ColumnKind::IconStatus { entries } => finalize_icon_status(def, entries),
            ColumnKind::StatusDict { states } => {
                log::warn!(
                    "column '{}': kind `status_dict` is deprecated; use `status` with explicit states",
                    def.display_name()
                );
                finalize_status_dict(def, states)
            }
            ColumnKind::BoolDict { states } => {
                log::warn!(
                    "column '{}': kind `bool_dict` is deprecated; use `bool_pill`",
                    def.display_name()
                );
                finalize_bool_pill(def, &bool_dict_to_pill(states))
            }
        }
    }
}

fn finalize_date(def: &mut ColumnDef) -> Result<Map<String, Value>, ConfigError> {
    def.filter.force_kind(FilterKind::Text);
    let formatter = script::render("date_formatter", json!({}))?;
    let mut extra = Map::new();
    extra.insert(
        "filterParams".into(),
        json!({ "customFormatString": "yyyy-MM-dd" }),
    );
    extra.insert(
        "type".into(),
        json!(["agTextColumnFilter", "customDateTimeFormat"]),
    );
    extra.insert("valueFormatter".into(), formatter.into());
    Ok(extra)
}

fn finalize_checkbox(def: &mut ColumnDef) -> Map<String, Value> {
    def.filter = FilterMode::Off;
    def.width = Some(40);
    def.min_width = Some(40);
    def.max_width = Some(40);
    def.pinned = true;

    let mut extra = Map::new();
    extra.insert("checkboxSelection".into(), Value::Bool(true));
    extra.insert("headerCheckboxSelection".into(), Value::Bool(true));
    extra.insert("pinned".into(), Value::from("left"));
    extra.insert("sortable".into(), Value::Bool(true));
    extra.insert("resizable".into(), Value::Bool(false));
    extra
}

fn finalize_status(
    def: &mut ColumnDef,
    states: &[StatusState],
) -> Result<Map<String, Value>, ConfigError> {
    let column = def.display_name().to_string();
    if states.is_empty() {
        return Err(ConfigError::EmptyStates { column });
    }

    let mut seen = HashSet::new();
    let mut lookup = Map::new();
    let mut classes = ClassSuffixes::new();
    let mut badges = Vec::with_capacity(states.len());
    for state in states {
        if !seen.insert(state.id) {
            return Err(ConfigError::DuplicateStateId {
                column,
                id: state.id,
            });
        }
        if state.label.trim().is_empty() {
            return Err(ConfigError::EmptyStateLabel {
                column,
                id: state.id,
            });
        }
        if state.color.trim().is_empty() {
            return Err(ConfigError::EmptyStateColor {
                column,
                id: state.id,
            });
        }
        let color = color::normalize(&column, &state.color)?;
        let key = state.id.to_string();
        badges.push(BadgeCss::new(classes.assign(&key), &color));
        lookup.insert(
            key,
            json!({ "label": state.label, "color": state.color }),
        );
    }

    def.filter.force_kind(FilterKind::Set);
    status_options(&column, lookup, classes, &badges, false)
}

fn finalize_status_dict(
    def: &mut ColumnDef,
    states: &BTreeMap<String, LegacyState>,
) -> Result<Map<String, Value>, ConfigError> {
    let column = def.display_name().to_string();
    let mut lookup = Map::new();
    let mut classes = ClassSuffixes::new();
    let mut badges = Vec::with_capacity(states.len());
    for (key, state) in states {
        let suffix = classes.assign(key);
        match CssColor::parse(&state.color) {
            Ok(color) => badges.push(BadgeCss::new(suffix, &color)),
            Err(_) => log::warn!(
                "column '{}': state '{}' has unusable color '{}'; badge left unstyled",
                column,
                key,
                state.color
            ),
        }
        lookup.insert(
            key.clone(),
            json!({ "label": state.label, "color": state.color }),
        );
    }

    def.filter.force_kind(FilterKind::Set);
    status_options(&column, lookup, classes, &badges, true)
}

/// Badge renderer, formatter and filter formatter for a status lookup.
///
/// The CSS class prefix is derived from the column name and the lookup so
/// two status columns on one page never share badge classes. Within a
/// column each key has its own suffix from `classes`.
fn status_options(
    column: &str,
    lookup: Map<String, Value>,
    classes: ClassSuffixes,
    badges: &[BadgeCss],
    lenient: bool,
) -> Result<Map<String, Value>, ConfigError> {
    let lookup = js_literal(&Value::Object(lookup))?;
    let prefix = format!(
        "eg-status-{}",
        fingerprint(&format!("{}\n{}", column, lookup))
    );
    let css = script::render_text("status_css", json!({ "prefix": prefix, "states": badges }))?;

    let renderer = script::render(
        "status_renderer",
        json!({
            "lookup": lookup,
            "classes": js_literal(&Value::Object(classes.into_map()))?,
            "lenient": lenient,
            "guard": js_literal(&prefix)?,
            "css": js_literal(&css)?,
            "prefix": prefix,
        }),
    )?;
    let formatter = script::render(
        "status_formatter",
        json!({ "lookup": lookup, "lenient": lenient }),
    )?;

    let mut extra = Map::new();
    extra.insert("cellRenderer".into(), renderer.into());
    extra.insert("valueFormatter".into(), formatter.clone().into());
    extra.insert(
        "filterParams".into(),
        json!({ "valueFormatter": Value::from(formatter) }),
    );
    Ok(extra)
}

fn finalize_bool_pill(
    def: &mut ColumnDef,
    pill: &BoolPill,
) -> Result<Map<String, Value>, ConfigError> {
    let column = def.display_name().to_string();
    let true_color = color::normalize(&column, &pill.true_color)?;
    let false_color = color::normalize(&column, &pill.false_color)?;

    def.filter.force_kind(FilterKind::Set);
    if def.width.is_none() {
        def.min_width = def.min_width.or(Some(80));
        def.max_width = def.max_width.or(Some(140));
    }

    let ctx = json!({
        "truthy": js_literal(TRUTHY_WORDS)?,
        "falsy": js_literal(FALSY_WORDS)?,
        "true_label": js_literal(&pill.true_label)?,
        "false_label": js_literal(&pill.false_label)?,
        "true_color": js_literal(&true_color.to_css())?,
        "false_color": js_literal(&false_color.to_css())?,
        "true_background": js_literal(&true_color.tint(BADGE_TINT))?,
        "false_background": js_literal(&false_color.tint(BADGE_TINT))?,
    });
    let renderer = script::render("bool_pill_renderer", &ctx)?;
    let formatter = script::render("bool_pill_formatter", &ctx)?;

    let mut extra = Map::new();
    extra.insert("cellRenderer".into(), renderer.into());
    extra.insert("valueFormatter".into(), formatter.clone().into());
    extra.insert(
        "filterParams".into(),
        json!({ "valueFormatter": Value::from(formatter) }),
    );
    Ok(extra)
}

fn bool_dict_to_pill(states: &BTreeMap<String, LegacyState>) -> BoolPill {
    let mut pill = BoolPill::default();
    if let Some(state) = states.get("true") {
        if !state.label.is_empty() {
            pill.true_label = state.label.clone();
        }
        if !state.color.is_empty() {
            pill.true_color = state.color.clone();
        }
    }
    if let Some(state) = states.get("false") {
        if !state.label.is_empty() {
            pill.false_label = state.label.clone();
        }
        if !state.color.is_empty() {
            pill.false_color = state.color.clone();
        }
    }
    pill
}

fn finalize_diverging_bar(
    def: &mut ColumnDef,
    bar: &DivergingBar,
) -> Result<Map<String, Value>, ConfigError> {
    let column = def.display_name().to_string();
    def.filter.force_kind(FilterKind::Number);

    let Some(max) = bar.max else {
        return Ok(Map::new());
    };
    if !max.is_finite() || max <= 0.0 {
        return Err(ConfigError::InvalidBound {
            column,
            name: "max",
            value: max,
        });
    }

    let positive = color::normalize(&column, &bar.positive_color)?;
    let negative = color::normalize(&column, &bar.negative_color)?;
    let track = color::normalize(&column, &bar.track_color)?;
    let renderer = script::render(
        "diverging_bar_renderer",
        json!({
            "max": js_literal(&max)?,
            "positive_color": js_literal(&positive.to_css())?,
            "negative_color": js_literal(&negative.to_css())?,
            "track_css": track.to_css(),
            "show_value": bar.show_value,
        }),
    )?;

    let mut extra = Map::new();
    extra.insert("cellRenderer".into(), renderer.into());
    Ok(extra)
}

fn finalize_progress_ring(
    def: &mut ColumnDef,
    ring: &ProgressRing,
) -> Result<Map<String, Value>, ConfigError> {
    let column = def.display_name().to_string();
    def.filter.force_kind(FilterKind::Number);

    if ring.size == 0 {
        return Err(ConfigError::InvalidBound {
            column,
            name: "size",
            value: 0.0,
        });
    }

    let literal = |value: &str| -> Result<String, ConfigError> {
        js_literal(&color::normalize(&column, value)?.to_css())
    };
    let renderer = script::render(
        "progress_ring_renderer",
        json!({
            "high": literal(&ring.high_color)?,
            "medium": literal(&ring.medium_color)?,
            "low": literal(&ring.low_color)?,
            "critical": literal(&ring.critical_color)?,
            "track_color": literal(&ring.track_color)?,
            "high_at": ProgressRing::HIGH_AT,
            "medium_at": ProgressRing::MEDIUM_AT,
            "low_at": ProgressRing::LOW_AT,
            "size": ring.size,
        }),
    )?;

    let mut extra = Map::new();
    extra.insert("cellRenderer".into(), renderer.into());
    Ok(extra)
}

fn finalize_icon_status(
    def: &mut ColumnDef,
    entries: &BTreeMap<String, IconStatusEntry>,
) -> Result<Map<String, Value>, ConfigError> {
    let column = def.display_name().to_string();
    def.filter.force_kind(FilterKind::Text);

    let mut lookup = Map::new();
    for (key, entry) in entries {
        let color = color::normalize(&column, &entry.color)?.to_css();
        let svg = icons::svg(&entry.icon, &color).ok_or_else(|| ConfigError::UnknownIcon {
            column: column.clone(),
            icon: entry.icon.clone(),
        })?;
        let mut mapped = Map::new();
        mapped.insert("label".into(), Value::String(entry.label.clone()));
        mapped.insert("color".into(), Value::String(color));
        if let Some(caption) = &entry.caption {
            mapped.insert("caption".into(), Value::String(caption.clone()));
        }
        mapped.insert("svg".into(), Value::String(svg));
        lookup.insert(key.clone(), Value::Object(mapped));
    }

    let fallback_svg = icons::svg(IconStatusEntry::FALLBACK_ICON, IconStatusEntry::FALLBACK_COLOR)
        .ok_or_else(|| ConfigError::UnknownIcon {
            column: column.clone(),
            icon: IconStatusEntry::FALLBACK_ICON.to_string(),
        })?;
    let renderer = script::render(
        "icon_status_renderer",
        json!({
            "lookup": js_literal(&Value::Object(lookup))?,
            "fallback_color": js_literal(IconStatusEntry::FALLBACK_COLOR)?,
            "fallback_svg": js_literal(&fallback_svg)?,
        }),
    )?;

    let mut extra = Map::new();
    extra.insert("cellRenderer".into(), renderer.into());
    Ok(extra)
}
