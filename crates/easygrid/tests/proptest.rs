//! Property-based tests for column compilation using proptest.

use easygrid::{
    BoolPill, ColumnDef, ConfigError, DivergingBar, ProgressRing, RingBand, StatusState,
    StyleDescriptor, Table, TableOptions,
};
use proptest::prelude::*;
use serde_json::Value;

// ============================================================================
// Strategies
// ============================================================================

fn style_strategy() -> impl Strategy<Value = StyleDescriptor> {
    (
        proptest::option::of(1u32..72),
        proptest::option::of("[A-Za-z ]{1,12}"),
        any::<bool>(),
        proptest::option::of("#[0-9a-f]{6}"),
    )
        .prop_map(|(size, family, bold, color)| {
            let mut style = StyleDescriptor::new();
            if let Some(size) = size {
                style = style.font_size(size);
            }
            if let Some(family) = family {
                style = style.font_family(family);
            }
            if bold {
                style = style.bold();
            }
            if let Some(color) = color {
                style = style.color(color);
            }
            style
        })
}

fn states_strategy() -> impl Strategy<Value = Vec<StatusState>> {
    prop::collection::btree_set(-1000i64..1000, 1..8).prop_flat_map(|ids| {
        let ids: Vec<i64> = ids.into_iter().collect();
        let n = ids.len();
        (
            Just(ids),
            prop::collection::vec("[A-Za-z][A-Za-z ]{0,10}", n),
            prop::collection::vec("#[0-9a-f]{3}|#[0-9a-f]{6}", n),
        )
            .prop_map(|(ids, labels, colors)| {
                ids.into_iter()
                    .zip(labels)
                    .zip(colors)
                    .map(|((id, label), color)| StatusState::new(id, label, color))
                    .collect()
            })
    })
}

fn status_lookup(def: ColumnDef) -> serde_json::Map<String, Value> {
    let column = def.build().unwrap();
    let body = easygrid::Script::from_value(&column.extra()["cellRenderer"])
        .unwrap()
        .body()
        .to_string();
    let start = body.find("const map = ").unwrap() + "const map = ".len();
    let end = start + body[start..].find(";\n").unwrap();
    serde_json::from_str(&body[start..end]).unwrap()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Compiled styles always carry the layout keys and never invent font keys.
    #[test]
    fn style_compile_only_emits_present_fields(style in style_strategy()) {
        let map = style.compile();
        prop_assert_eq!(&map["display"], "flex");
        prop_assert_eq!(&map["alignItems"], "center");
        prop_assert_eq!(map.contains_key("fontSize"), style.font_size.is_some());
        prop_assert_eq!(map.contains_key("fontFamily"), style.font_family.is_some());
        prop_assert_eq!(map.contains_key("fontWeight"), style.font_weight.is_some());
        prop_assert_eq!(map.contains_key("color"), style.color.is_some());
        if let Some(size) = style.font_size {
            prop_assert_eq!(&map["fontSize"], &Value::String(format!("{}px", size)));
        }
    }

    /// A fixed width always comes with flex 0 and suppressSizeToFit.
    #[test]
    fn width_implies_flex_and_size_to_fit(width in 1u32..2000) {
        let map = ColumnDef::text("x").width(width).build().unwrap().compile();
        prop_assert_eq!(&map["width"], &Value::from(width));
        prop_assert_eq!(&map["flex"], &Value::from(0));
        prop_assert_eq!(&map["suppressSizeToFit"], &Value::Bool(true));
    }

    /// Checkbox columns are 40px wide and unfiltered whatever the caller asked.
    #[test]
    fn checkbox_dimensions_are_fixed(
        width in proptest::option::of(0u32..1000),
        min in proptest::option::of(0u32..1000),
        max in proptest::option::of(0u32..1000),
        filter in any::<bool>(),
    ) {
        let mut def = ColumnDef::checkbox().filter(filter);
        if let Some(w) = width { def = def.width(w); }
        if let Some(m) = min { def = def.min_width(m); }
        if let Some(m) = max { def = def.max_width(m); }
        let map = def.build().unwrap().compile();
        prop_assert_eq!(&map["filter"], &Value::Bool(false));
        prop_assert_eq!(&map["width"], &Value::from(40));
        prop_assert_eq!(&map["minWidth"], &Value::from(40));
        prop_assert_eq!(&map["maxWidth"], &Value::from(40));
    }

    /// The status lookup has exactly one entry per state, keyed by id.
    #[test]
    fn status_lookup_matches_states(states in states_strategy()) {
        let lookup = status_lookup(ColumnDef::status("s", states.clone()));
        prop_assert_eq!(lookup.len(), states.len());
        for state in &states {
            let entry = &lookup[&state.id.to_string()];
            prop_assert_eq!(&entry["label"], &Value::String(state.label.clone()));
            prop_assert_eq!(&entry["color"], &Value::String(state.color.clone()));
        }
    }

    /// Repeating any id fails the build.
    #[test]
    fn duplicate_status_ids_fail(states in states_strategy(), pick in any::<prop::sample::Index>()) {
        let mut states = states;
        let dup = states[pick.index(states.len())].clone();
        states.push(dup.clone());
        let result = ColumnDef::status("s", states).build();
        prop_assert_eq!(
            result.unwrap_err(),
            ConfigError::DuplicateStateId { column: "s".to_string(), id: dup.id }
        );
    }

    /// Compilation is pure.
    #[test]
    fn compile_is_idempotent(states in states_strategy(), alias in "[A-Za-z]{0,8}") {
        let column = ColumnDef::status("s", states).alias(alias).build().unwrap();
        prop_assert_eq!(column.compile(), column.compile());
    }

    /// The selection column always comes first when requested.
    #[test]
    fn selection_column_is_first(count in 1usize..6, select in any::<bool>()) {
        let columns = (0..count)
            .map(|i| ColumnDef::text(format!("c{}", i)).build().unwrap())
            .collect();
        let options = Table::new(columns)
            .options(TableOptions { select_checkbox: select, ..TableOptions::default() })
            .grid_options(&easygrid::Dataset::default());
        let defs = options["columnDefs"].as_array().unwrap();
        prop_assert_eq!(defs.len(), count + usize::from(select));
        prop_assert_eq!(defs[0]["field"] == "__selection__", select);
    }

    /// Bar fill never exceeds half the track.
    #[test]
    fn bar_fill_is_bounded(value in -1e9f64..1e9, max in 1e-3f64..1e6) {
        let fill = DivergingBar::fill_fraction(value, max);
        prop_assert!((0.0..=0.5).contains(&fill));
    }

    /// Ring bands are monotonic in the value.
    #[test]
    fn ring_band_is_monotonic(a in -50f64..150.0, b in -50f64..150.0) {
        fn rank(band: RingBand) -> u8 {
            match band {
                RingBand::Critical => 0,
                RingBand::Low => 1,
                RingBand::Medium => 2,
                RingBand::High => 3,
            }
        }
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(ProgressRing::band(lo)) <= rank(ProgressRing::band(hi)));
    }

    /// Whitespace and case never change a boolean coercion.
    #[test]
    fn bool_coercion_ignores_case_and_padding(
        word in prop::sample::select(vec!["yes", "no", "true", "false", "si", "n", "1", "0"]),
        upper in any::<bool>(),
        pad in " {0,3}",
    ) {
        let plain = BoolPill::coerce(&Value::from(word));
        let text = if upper { word.to_uppercase() } else { word.to_string() };
        let decorated = BoolPill::coerce(&Value::from(format!("{}{}{}", pad, text, pad)));
        prop_assert!(plain.is_some());
        prop_assert_eq!(plain, decorated);
    }
}
