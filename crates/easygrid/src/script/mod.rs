//! Generated client-side scripts.
//!
//! Some column kinds attach JavaScript renderers and formatters that the
//! grid runs per cell. They are produced here from typed configuration so
//! that string construction lives in one place:
//!
//! - [`Script`] wraps a finished script body and knows how the grid bridge
//!   expects it to be marked inside the options JSON.
//! - [`js_literal`] turns any serializable value into a JavaScript literal
//!   that is safe to splice into generated source.
//! - Templates are rendered by a shared MiniJinja environment with
//!   auto-escaping disabled; every interpolated value is a pre-escaped
//!   literal or a generated identifier.
//!
//! Every generated script returns an empty result for `null`, `undefined`,
//! empty-string and unparseable values.

mod templates;

use std::collections::HashSet;

use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Marker the grid bridge uses to recognize script values in options JSON.
pub const SCRIPT_MARKER: &str = "::JSCODE::";

/// A script body evaluated by the grid at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script(String);

impl Script {
    /// Wraps a raw script body.
    pub fn new(body: impl Into<String>) -> Self {
        Script(body.into())
    }

    /// The script source.
    pub fn body(&self) -> &str {
        &self.0
    }

    /// Returns the marked string form placed in options JSON.
    pub fn to_marked(&self) -> String {
        format!("{}{}{}", SCRIPT_MARKER, self.0, SCRIPT_MARKER)
    }

    /// Recovers a script from its marked form.
    pub fn from_marked(s: &str) -> Option<Self> {
        s.strip_prefix(SCRIPT_MARKER)
            .and_then(|rest| rest.strip_suffix(SCRIPT_MARKER))
            .map(Script::new)
    }

    /// Recovers a script from an options value, if it holds one.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::from_marked)
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_marked())
    }
}

impl From<Script> for Value {
    fn from(script: Script) -> Self {
        Value::String(script.to_marked())
    }
}

/// Serializes a value as a JavaScript literal.
///
/// JSON is valid JavaScript except for the U+2028/U+2029 separators inside
/// strings on older engines; those and the HTML-significant `<`, `>` and `&`
/// are emitted as `\u` escapes so the literal also survives inline
/// `<script>` embedding.
pub fn js_literal<T: Serialize + ?Sized>(value: &T) -> Result<String, ConfigError> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Maps a lookup key to a CSS class suffix: every UTF-16 code unit outside
/// `[A-Za-z0-9_-]` becomes `_`. Distinct keys can share a suffix; see
/// [`ClassSuffixes`] for the deduplicated form.
pub fn class_suffix(key: &str) -> String {
    key.encode_utf16()
        .map(|unit| match char::from_u32(u32::from(unit)) {
            Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '-' => c,
            _ => '_',
        })
        .collect()
}

/// Assigns each lookup key a class suffix unique within one column.
///
/// The first key to claim a sanitized suffix keeps it; later keys that
/// sanitize to the same text get `-2`, `-3`, ... appended.
#[derive(Debug, Default)]
pub struct ClassSuffixes {
    taken: HashSet<String>,
    by_key: Map<String, Value>,
}

impl ClassSuffixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the suffix for `key`, assigning one on first use.
    pub fn assign(&mut self, key: &str) -> String {
        if let Some(Value::String(existing)) = self.by_key.get(key) {
            return existing.clone();
        }
        let base = class_suffix(key);
        let mut suffix = base.clone();
        let mut n = 2;
        while !self.taken.insert(suffix.clone()) {
            suffix = format!("{}-{}", base, n);
            n += 1;
        }
        self.by_key
            .insert(key.to_string(), Value::String(suffix.clone()));
        suffix
    }

    /// The key to suffix map embedded in generated renderers.
    pub fn into_map(self) -> Map<String, Value> {
        self.by_key
    }
}

/// Stable 32-bit FNV-1a digest, used to scope generated CSS per column.
pub fn fingerprint(input: &str) -> String {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in input.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    format!("{:08x}", hash)
}

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    for &(name, source) in templates::ALL {
        // Sources are compile-time constants covered by tests.
        if let Err(err) = env.add_template(name, source) {
            log::error!("failed to register script template '{}': {}", name, err);
        }
    }
    env
});

/// Renders a named template into text.
pub(crate) fn render_text<S: Serialize>(name: &str, ctx: S) -> Result<String, ConfigError> {
    let template = ENV.get_template(name)?;
    Ok(template.render(ctx)?)
}

/// Renders a named template into a [`Script`].
pub(crate) fn render<S: Serialize>(name: &str, ctx: S) -> Result<Script, ConfigError> {
    render_text(name, ctx).map(Script::new)
}
