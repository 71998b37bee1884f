//! Parsers for the two supported env file formats.
//!
//! `.env` files are line based:
//!
//! ```text
//! # comment
//! APP_NAME=demo
//! GREETING = "hello # not a comment"
//! PORT=8080 # trailing comment
//! ```
//!
//! `.env.toml` files are a flat TOML table of scalars and arrays.

use std::path::Path;

use super::source::RawAssoc;
use super::value::Value;
use super::ConfigError;

/// Parses `.env` text. Later duplicates of a key win.
pub fn parse_dotenv(contents: &str) -> RawAssoc {
    let mut assoc = RawAssoc::new();
    for line in contents.lines() {
        if let Some((key, value)) = parse_line(line) {
            assoc.insert(key, value);
        }
    }
    assoc
}

/// Parses one line into a key and unquoted value.
///
/// Returns `None` for blank lines, comments, lines without `=` and empty keys.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || is_comment(line) {
        return None;
    }

    let (key, raw_value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key.to_string(), unquote(raw_value)))
}

/// A line is a comment unless it starts with `[A-Za-z0-9_-]`.
fn is_comment(line: &str) -> bool {
    !line
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Quoted values are taken verbatim up to the last matching quote; bare
/// values lose any `#` comment and surrounding whitespace.
fn unquote(raw: &str) -> String {
    let raw = raw.trim_start();
    if let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let rest = &raw[1..];
        if let Some(end) = rest.rfind(quote) {
            return rest[..end].to_string();
        }
    }

    let bare = match raw.find('#') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    bare.trim().to_string()
}

/// Parses a `.env.toml` document.
pub fn parse_structured(path: &Path, contents: &str) -> Result<RawAssoc, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidStructuredContent {
        path: path.to_path_buf(),
        reason,
    };

    let table: toml::Table = toml::from_str(contents).map_err(|e| invalid(e.to_string()))?;

    let mut assoc = RawAssoc::new();
    for (key, value) in table {
        let value = scalar_value(&value).ok_or_else(|| invalid(format!("'{key}' is a table")))?;
        assoc.insert(key, value);
    }
    Ok(assoc)
}

fn scalar_value(value: &toml::Value) -> Option<Value> {
    match value {
        toml::Value::String(s) => Some(Value::String(s.clone())),
        toml::Value::Integer(i) => Some(Value::Integer(*i)),
        toml::Value::Float(f) => Some(Value::Float(*f)),
        toml::Value::Boolean(b) => Some(Value::Bool(*b)),
        toml::Value::Datetime(dt) => Some(Value::String(dt.to_string())),
        toml::Value::Array(items) => items
            .iter()
            .map(scalar_value)
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        toml::Value::Table(_) => None,
    }
}
