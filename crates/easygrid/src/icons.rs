//! Built-in icon catalog.
//!
//! Icons are inline SVG fragments drawn on an 18×18 canvas. Every stroke
//! and fill uses the [`COLOR_PLACEHOLDER`] token so a single fragment can be
//! recolored per use.
//!
//! # Example
//!
//! ```rust
//! use easygrid::icons;
//!
//! let fragment = icons::fragment("check").unwrap();
//! assert!(fragment.contains(icons::COLOR_PLACEHOLDER));
//!
//! let svg = icons::svg("check", "#16a34a").unwrap();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("#16a34a"));
//! assert!(!svg.contains(icons::COLOR_PLACEHOLDER));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Token replaced by the icon color.
pub const COLOR_PLACEHOLDER: &str = "CCC";

/// Icon edge length in pixels.
pub const ICON_SIZE: u32 = 18;

/// Every built-in icon as `(name, fragment)`, in catalog order.
pub const CATALOG: &[(&str, &str)] = &[
    (
        "crown",
        concat!(
            r#"<polyline points="2,13 4,6 7,10 9,3 11,10 14,6 16,13" fill="none" stroke="CCC" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<line x1="2" y1="13" x2="16" y2="13" stroke="CCC" stroke-width="1.6" stroke-linecap="round"/>"#,
            r#"<circle cx="9" cy="3" r="1" fill="CCC"/>"#,
            r#"<circle cx="4" cy="6" r="1" fill="CCC"/>"#,
            r#"<circle cx="14" cy="6" r="1" fill="CCC"/>"#,
        ),
    ),
    (
        "clock",
        concat!(
            r#"<circle cx="9" cy="9" r="7" fill="none" stroke="CCC" stroke-width="1.8" stroke-dasharray="3 2"/>"#,
            r#"<line x1="9" y1="5" x2="9" y2="9" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
            r#"<line x1="9" y1="9" x2="12" y2="11" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
        ),
    ),
    (
        "document",
        concat!(
            r#"<rect x="4" y="2" width="10" height="14" rx="1.5" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
            r#"<line x1="6.5" y1="6" x2="11.5" y2="6" stroke="CCC" stroke-width="1.3" stroke-linecap="round"/>"#,
            r#"<line x1="6.5" y1="9" x2="10" y2="9" stroke="CCC" stroke-width="1.3" stroke-linecap="round"/>"#,
            r#"<polyline points="9,14 9,11" fill="none" stroke="CCC" stroke-width="1.5" stroke-linecap="round"/>"#,
            r#"<polyline points="7.5,12.5 9,11 10.5,12.5" fill="none" stroke="CCC" stroke-width="1.5" stroke-linecap="round"/>"#,
        ),
    ),
    (
        "factory",
        concat!(
            r#"<polygon points="2,16 2,7 6,4 6,16" fill="none" stroke="CCC" stroke-width="1.5" stroke-linejoin="round"/>"#,
            r#"<rect x="7" y="8" width="9" height="8" fill="none" stroke="CCC" stroke-width="1.5" stroke-linejoin="round"/>"#,
            r#"<rect x="9.5" y="11" width="3" height="5" fill="none" stroke="CCC" stroke-width="1.2"/>"#,
            r#"<line x1="12" y1="5" x2="12" y2="8" stroke="CCC" stroke-width="1.5" stroke-linecap="round"/>"#,
            r#"<circle cx="12" cy="4" r="1" fill="CCC"/>"#,
        ),
    ),
    (
        "gear",
        concat!(
            r#"<circle cx="9" cy="9" r="3.5" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
            r#"<circle cx="9" cy="9" r="1.2" fill="CCC"/>"#,
            r#"<line x1="9" y1="2" x2="9" y2="4.5" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
            r#"<line x1="9" y1="13.5" x2="9" y2="16" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
            r#"<line x1="2" y1="9" x2="4.5" y2="9" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
            r#"<line x1="13.5" y1="9" x2="16" y2="9" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
            r#"<line x1="4" y1="4" x2="5.8" y2="5.8" stroke="CCC" stroke-width="1.6" stroke-linecap="round"/>"#,
            r#"<line x1="12.2" y1="12.2" x2="14" y2="14" stroke="CCC" stroke-width="1.6" stroke-linecap="round"/>"#,
            r#"<line x1="14" y1="4" x2="12.2" y2="5.8" stroke="CCC" stroke-width="1.6" stroke-linecap="round"/>"#,
            r#"<line x1="5.8" y1="12.2" x2="4" y2="14" stroke="CCC" stroke-width="1.6" stroke-linecap="round"/>"#,
        ),
    ),
    (
        "split",
        concat!(
            r#"<line x1="3" y1="9" x2="9" y2="9" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
            r#"<polyline points="9,9 15,4" fill="none" stroke="CCC" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<polyline points="12,4 15,4 15,7" fill="none" stroke="CCC" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<polyline points="9,9 15,14" fill="none" stroke="CCC" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<polyline points="12,14 15,14 15,11" fill="none" stroke="CCC" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"/>"#,
        ),
    ),
    (
        "box",
        concat!(
            r#"<polygon points="9,1.5 16,5.5 16,13 9,16.5 2,13 2,5.5" fill="none" stroke="CCC" stroke-width="1.5" stroke-linejoin="round"/>"#,
            r#"<polyline points="2,5.5 9,9.5 16,5.5" fill="none" stroke="CCC" stroke-width="1.3" stroke-linejoin="round"/>"#,
            r#"<line x1="9" y1="9.5" x2="9" y2="16.5" stroke="CCC" stroke-width="1.3"/>"#,
        ),
    ),
    (
        "check",
        concat!(
            r#"<circle cx="9" cy="9" r="7" fill="none" stroke="CCC" stroke-width="1.8"/>"#,
            r#"<polyline points="5.5,9 8,11.5 12.5,6.5" fill="none" stroke="CCC" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
        ),
    ),
    (
        "alert",
        concat!(
            r#"<polygon points="9,2 17,16 1,16" fill="none" stroke="CCC" stroke-width="1.6" stroke-linejoin="round"/>"#,
            r#"<line x1="9" y1="7" x2="9" y2="11" stroke="CCC" stroke-width="1.8" stroke-linecap="round"/>"#,
            r#"<circle cx="9" cy="13.5" r="1" fill="CCC"/>"#,
        ),
    ),
    (
        "star",
        concat!(
            r#"<polygon points="9,1.5 11.3,6.2 16.5,6.9 12.7,10.5 13.6,15.7 9,13.2 4.4,15.7 5.3,10.5 1.5,6.9 6.7,6.2" fill="none" stroke="CCC" stroke-width="1.4" stroke-linejoin="round"/>"#,
        ),
    ),
    (
        "circle",
        concat!(
            r#"<circle cx="9" cy="9" r="4" fill="CCC"/>"#,
        ),
    ),
    (
        "layers",
        concat!(
            r#"<rect x="3" y="3" width="12" height="4" rx="1" fill="none" stroke="CCC" stroke-width="1.5"/>"#,
            r#"<rect x="3" y="7" width="12" height="4" rx="1" fill="none" stroke="CCC" stroke-width="1.5"/>"#,
            r#"<rect x="3" y="11" width="12" height="4" rx="1" fill="none" stroke="CCC" stroke-width="1.5"/>"#,
        ),
    ),
    (
        "layers_small",
        concat!(
            r#"<rect x="4" y="4" width="10" height="4" rx="1" fill="none" stroke="CCC" stroke-width="1.5"/>"#,
            r#"<rect x="4" y="9" width="10" height="4" rx="1" fill="none" stroke="CCC" stroke-width="1.5"/>"#,
        ),
    ),
    (
        "module",
        concat!(
            r#"<rect x="3" y="3" width="12" height="12" rx="2" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
            r#"<line x1="6" y1="1.5" x2="6" y2="3" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="10" y1="1.5" x2="10" y2="3" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="6" y1="15" x2="6" y2="16.5" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="10" y1="15" x2="10" y2="16.5" stroke="CCC" stroke-width="1.4"/>"#,
        ),
    ),
    (
        "chip",
        concat!(
            r#"<rect x="5" y="5" width="8" height="8" rx="1.5" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
            r#"<line x1="3" y1="6" x2="5" y2="6" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="3" y1="9" x2="5" y2="9" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="3" y1="12" x2="5" y2="12" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="13" y1="6" x2="15" y2="6" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="13" y1="9" x2="15" y2="9" stroke="CCC" stroke-width="1.4"/>"#,
            r#"<line x1="13" y1="12" x2="15" y2="12" stroke="CCC" stroke-width="1.4"/>"#,
        ),
    ),
    (
        "cable",
        concat!(
            r#"<circle cx="4" cy="9" r="2" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
            r#"<circle cx="14" cy="9" r="2" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
            r#"<line x1="6" y1="9" x2="12" y2="9" stroke="CCC" stroke-width="1.8"/>"#,
        ),
    ),
    (
        "inductor",
        concat!(
            r#"<path d="M3 9 q2 -4 4 0 q2 -4 4 0 q2 -4 4 0" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
        ),
    ),
    (
        "editbox",
        concat!(
            r#"<rect x="3" y="3" width="12" height="12" rx="2" fill="none" stroke="CCC" stroke-width="1.5"/>"#,
            r#"<line x1="7" y1="11" x2="12" y2="6" stroke="CCC" stroke-width="1.6"/>"#,
            r#"<polyline points="11,6 13,6 13,8" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
        ),
    ),
    (
        "pcb",
        concat!(
            r#"<rect x="3" y="3" width="12" height="12" rx="1.5" fill="none" stroke="CCC" stroke-width="1.5"/>"#,
            r#"<circle cx="6" cy="6" r="1" fill="CCC"/>"#,
            r#"<circle cx="12" cy="10" r="1" fill="CCC"/>"#,
            r#"<line x1="6" y1="6" x2="12" y2="10" stroke="CCC" stroke-width="1.2"/>"#,
        ),
    ),
    (
        "wrench",
        concat!(
            r#"<path d="M14 4a4 4 0 0 1-5 5l-5 5-2-2 5-5a4 4 0 0 1 7-3z" fill="none" stroke="CCC" stroke-width="1.6"/>"#,
        ),
    ),
    (
        "code",
        concat!(
            r#"<polyline points="6,4 2,9 6,14" fill="none" stroke="CCC" stroke-width="1.6" stroke-linecap="round"/>"#,
            r#"<polyline points="12,4 16,9 12,14" fill="none" stroke="CCC" stroke-width="1.6" stroke-linecap="round"/>"#,
        ),
    ),
];

static INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CATALOG.iter().copied().collect());

/// Returns the raw fragment for an icon, with the color placeholder intact.
pub fn fragment(name: &str) -> Option<&'static str> {
    INDEX.get(name).copied()
}

/// Returns true if the catalog has an icon with this name.
pub fn contains(name: &str) -> bool {
    INDEX.contains_key(name)
}

/// Icon names in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

/// Renders a complete `<svg>` element for an icon in the given color.
///
/// The color is substituted verbatim; callers pass a validated CSS color.
pub fn svg(name: &str, color: &str) -> Option<String> {
    fragment(name).map(|body| {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">{body}</svg>"#,
            size = ICON_SIZE,
            body = body.replace(COLOR_PLACEHOLDER, color),
        )
    })
}
