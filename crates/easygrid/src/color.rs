//! CSS color parsing for generated cell styles.
//!
//! Hex colors are parsed and normalized:
//! `"#0f0"`, `"#00ff00"`, `"#0f08"`, `"#00ff0080"`.
//!
//! Any other non-empty value is kept as written (`red`, `currentColor`,
//! `oklch(70% 0.1 120)`, `var(--ok)`) as long as it cannot end the CSS
//! declaration or the string it is placed in.
//!
//! # Example
//!
//! ```rust
//! use easygrid::color::CssColor;
//!
//! let green = CssColor::parse("#0f0").unwrap();
//! assert_eq!(green.to_css(), "#00ff00");
//! assert_eq!(green.tint(0x22), "#00ff0022");
//! ```

/// Characters that could close a declaration, rule, string or tag.
const FORBIDDEN: &str = ";{}<>\"'\\";

/// A validated CSS color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssColor {
    /// RGB hex with optional alpha.
    Hex { r: u8, g: u8, b: u8, a: Option<u8> },
    /// Color keyword such as `red` or `currentColor`.
    Named(String),
    /// Functional notation or custom property reference, kept verbatim.
    Function(String),
}

impl CssColor {
    /// Parses a color string.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty color".to_string());
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(c) = s.chars().find(|&c| FORBIDDEN.contains(c) || c.is_control()) {
            return Err(format!("Invalid character {:?} in color: {}", c, s));
        }
        if s.to_ascii_lowercase().contains("url(") {
            return Err(format!("Invalid color: {}", s));
        }

        if s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(CssColor::Named(s.to_string()));
        }
        Ok(CssColor::Function(s.to_string()))
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex: {}", hex));
        }
        let short = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| format!("Invalid hex: {}", hex))
        };
        let long = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("Invalid hex: {}", hex))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(CssColor::Hex {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: None,
            }),
            4 => Ok(CssColor::Hex {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: Some(short(3)?),
            }),
            6 => Ok(CssColor::Hex {
                r: long(0)?,
                g: long(2)?,
                b: long(4)?,
                a: None,
            }),
            8 => Ok(CssColor::Hex {
                r: long(0)?,
                g: long(2)?,
                b: long(4)?,
                a: Some(long(6)?),
            }),
            _ => Err(format!(
                "Invalid hex color length: expected 3, 4, 6 or 8 digits, got {}",
                hex.len()
            )),
        }
    }

    /// Returns the normalized CSS text. Hex colors are expanded to the long
    /// lowercase form.
    pub fn to_css(&self) -> String {
        match self {
            CssColor::Hex { r, g, b, a: None } => format!("#{:02x}{:02x}{:02x}", r, g, b),
            CssColor::Hex {
                r,
                g,
                b,
                a: Some(a),
            } => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
            CssColor::Named(name) => name.clone(),
            CssColor::Function(text) => text.clone(),
        }
    }

    /// Returns a translucent version of the color with the given alpha.
    ///
    /// Opaque hex colors get the alpha appended; everything else is mixed
    /// with transparent at the equivalent percentage.
    pub fn tint(&self, alpha: u8) -> String {
        match self {
            CssColor::Hex { r, g, b, a: None } => {
                format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha)
            }
            other => {
                let pct = (f64::from(alpha) * 100.0 / 255.0).round() as u32;
                format!("color-mix(in srgb, {} {}%, transparent)", other.to_css(), pct)
            }
        }
    }
}

/// Parses and normalizes a color for a named column, mapping failures to
/// [`ConfigError::InvalidColor`](crate::ConfigError::InvalidColor).
pub(crate) fn normalize(column: &str, value: &str) -> Result<CssColor, crate::ConfigError> {
    CssColor::parse(value).map_err(|_| crate::ConfigError::InvalidColor {
        column: column.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(
            CssColor::parse("#0f0").unwrap(),
            CssColor::Hex {
                r: 0,
                g: 255,
                b: 0,
                a: None
            }
        );
    }

    #[test]
    fn test_parse_hex_6_digit_case_insensitive() {
        let color = CssColor::parse("#FF6B35").unwrap();
        assert_eq!(color.to_css(), "#ff6b35");
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        assert_eq!(CssColor::parse("#0f08").unwrap().to_css(), "#00ff0088");
        assert_eq!(CssColor::parse("#00ff0080").unwrap().to_css(), "#00ff0080");
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(CssColor::parse("#ggg").is_err());
        assert!(CssColor::parse("#12345").is_err());
        assert!(CssColor::parse("#").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(
            CssColor::parse("currentColor").unwrap(),
            CssColor::Named("currentColor".to_string())
        );
    }

    #[test]
    fn test_parse_function() {
        let color = CssColor::parse("rgb(0, 128, 0)").unwrap();
        assert_eq!(color.to_css(), "rgb(0, 128, 0)");
        assert!(CssColor::parse("hsl(120deg 100% 25% / 50%)").is_ok());
    }

    #[test]
    fn test_modern_color_forms_kept_verbatim() {
        for text in ["var(--ok)", "oklch(70% 0.1 120)", "hwb(120 0% 0%)", "color(display-p3 1 0 0)"] {
            assert_eq!(CssColor::parse(text).unwrap().to_css(), text);
        }
        assert_eq!(
            CssColor::parse("var(--Brand-Green)").unwrap(),
            CssColor::Function("var(--Brand-Green)".to_string())
        );
    }

    #[test]
    fn test_rejects_css_injection() {
        assert!(CssColor::parse("red; } body { display:none").is_err());
        assert!(CssColor::parse("rgb(0,0,0); x").is_err());
        assert!(CssColor::parse("url(evil)").is_err());
        assert!(CssColor::parse("red\ncolor").is_err());
        assert!(CssColor::parse("red'").is_err());
        assert!(CssColor::parse("red\"").is_err());
        assert!(CssColor::parse("red</style>").is_err());
        assert!(CssColor::parse("\\72 ed").is_err());
        assert!(CssColor::parse("").is_err());
    }

    #[test]
    fn test_tint_hex() {
        assert_eq!(CssColor::parse("#f00").unwrap().tint(0x22), "#ff000022");
    }

    #[test]
    fn test_tint_non_hex_uses_color_mix() {
        let tint = CssColor::parse("red").unwrap().tint(0x22);
        assert_eq!(tint, "color-mix(in srgb, red 13%, transparent)");
        let tint = CssColor::parse("var(--ok)").unwrap().tint(0x22);
        assert_eq!(tint, "color-mix(in srgb, var(--ok) 13%, transparent)");
    }

    #[test]
    fn test_normalize_maps_to_config_error() {
        let err = normalize("state", "red;}").unwrap_err();
        assert!(matches!(err, crate::ConfigError::InvalidColor { .. }));
    }
}
