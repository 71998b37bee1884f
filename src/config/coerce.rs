//! String to typed value coercion.

use super::value::Value;

/// Maps the reserved words `true`, `false`, `null`, `empty` (any case) and the
/// empty string to their values.
pub fn keyword(s: &str) -> Option<Value> {
    if s.is_empty() || s.eq_ignore_ascii_case("empty") {
        return Some(Value::String(String::new()));
    }
    if s.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if s.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    if s.eq_ignore_ascii_case("null") {
        return Some(Value::Null);
    }
    None
}

/// Parses numeric strings as integers or floats; anything else stays a string.
pub fn numeric(s: String) -> Value {
    if !is_numeric(&s) {
        return Value::String(s);
    }

    if looks_like_integer(&s) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    match s.parse::<f64>() {
        Ok(f) => Value::Float(f),
        Err(_) => Value::String(s),
    }
}

/// Decimal number with optional sign, fraction and exponent.
///
/// Hex, `inf`, `nan`, whitespace and `,` separators are not numeric.
pub fn is_numeric(s: &str) -> bool {
    let s = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['-', '+']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

fn looks_like_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce(s: &str) -> Value {
        keyword(s).unwrap_or_else(|| numeric(s.to_string()))
    }

    #[test]
    fn test_keywords() {
        assert_eq!(coerce("true"), Value::Bool(true));
        assert_eq!(coerce("TRUE"), Value::Bool(true));
        assert_eq!(coerce("FALSE"), Value::Bool(false));
        assert_eq!(coerce("null"), Value::Null);
        assert_eq!(coerce("Null"), Value::Null);
        assert_eq!(coerce(""), Value::String(String::new()));
        assert_eq!(coerce("EMPTY"), Value::String(String::new()));
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce("42"), Value::Integer(42));
        assert_eq!(coerce("-3"), Value::Integer(-3));
        assert_eq!(coerce("007"), Value::Integer(7));
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce("-3.75"), Value::Float(-3.75));
        assert_eq!(coerce("1e10"), Value::Float(1e10));
        assert_eq!(coerce(".5"), Value::Float(0.5));
        assert_eq!(coerce("5."), Value::Float(5.0));
        assert_eq!(coerce("+5"), Value::Float(5.0));
        assert_eq!(coerce("2.5E-3"), Value::Float(2.5e-3));
    }

    #[test]
    fn test_integer_overflow_becomes_float() {
        assert_eq!(coerce("99999999999999999999"), Value::Float(1e20));
    }

    #[test]
    fn test_non_numeric_strings() {
        for s in ["hello", "0x1A", "1,5", "inf", "NaN", "1e", "-", ".", "1.2.3", " 42"] {
            assert_eq!(coerce(s), Value::String(s.to_string()), "{s}");
        }
    }
}
