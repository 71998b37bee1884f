//! Typed values stored in and returned from the environment.

use std::fmt;

/// A scalar (or array of scalars) held by the environment.
///
/// Raw `.env` entries are always [`Value::String`]; the other variants come
/// from coercion or from `.env.toml` files.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Converts into a TOML value for typed deserialization.
    ///
    /// `Null` has no TOML counterpart and maps to `None`; nulls inside arrays
    /// are dropped.
    pub(crate) fn to_toml(&self) -> Option<toml::Value> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(toml::Value::Boolean(*b)),
            Value::Integer(i) => Some(toml::Value::Integer(*i)),
            Value::Float(f) => Some(toml::Value::Float(*f)),
            Value::String(s) => Some(toml::Value::String(s.clone())),
            Value::Array(items) => Some(toml::Value::Array(
                items.iter().filter_map(Value::to_toml).collect(),
            )),
        }
    }
}

/// Textual rendering used when a value is substituted into another one.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_substitution_text() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1,2,3");
    }

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Integer(3).as_str(), None);
        assert_eq!(Value::Integer(3).as_integer(), Some(3));
        assert_eq!(Value::Float(3.0).as_integer(), None);
        assert_eq!(Value::Integer(3).as_float(), Some(3.0));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));

        let list = Value::from(vec!["a", "b"]);
        assert_eq!(list.as_array().map(<[Value]>::len), Some(2));
        assert_eq!(Value::from("a,b").as_array(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn test_to_toml_drops_nulls() {
        let value = Value::Array(vec![Value::Integer(1), Value::Null, Value::from("a")]);
        let toml_value = value.to_toml().unwrap();
        let items = toml_value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(Value::Null.to_toml().is_none());
    }
}
