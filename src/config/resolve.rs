//! `${NAME}` interpolation within values.
//!
//! Each placeholder runs to the first `}` after its `${`. Substituted text is
//! not scanned again. An unclosed `${` or an empty `${}` is kept as literal text.

use super::value::Value;

/// Characters stripped from both ends of a placeholder name.
const NAME_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '"', '\''];

/// Replaces every `${NAME}` in `s` with the text of `lookup(NAME)`.
pub fn interpolate<F>(s: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Value,
{
    if !s.contains("${") {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            result.push(ch);
            continue;
        }

        chars.next(); // consume '{'
        match consume_until(&mut chars, '}') {
            Some(raw) if !raw.is_empty() => {
                let name = raw.trim_matches(NAME_TRIM);
                result.push_str(&lookup(name).to_string());
            }
            Some(_) => result.push_str("${}"),
            None => {
                result.push_str("${");
                result.extend(chars.by_ref());
            }
        }
    }

    result
}

/// Consumes characters through the delimiter, returning what preceded it.
/// Leaves `chars` untouched if the delimiter never appears.
fn consume_until(chars: &mut std::iter::Peekable<std::str::Chars>, delim: char) -> Option<String> {
    let mut lookahead = chars.clone();
    let mut result = String::new();
    for ch in lookahead.by_ref() {
        if ch == delim {
            *chars = lookahead;
            return Some(result);
        }
        result.push(ch);
    }
    None
}
