//! Identifier sanitizing and case conversion for generated names.

/// Words that cannot be used as plain Rust identifiers.
const RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Returns true if `word` is reserved in Rust.
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Turns an XML name into a valid identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix and reserved words get a `_` suffix. The result is never empty
/// and never the lone `_` pattern.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    let mut result: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    if is_reserved(&result) || result == "_" {
        result.push('_');
    }
    result
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Converts a name to a snake_case field identifier.
#[must_use]
pub fn field_identifier(name: &str) -> String {
    sanitize_identifier(&to_snake_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("Widget"), "Widget");
        assert_eq!(sanitize_identifier("first-name"), "first_name");
        assert_eq!(sanitize_identifier("a.b"), "a_b");
        assert_eq!(sanitize_identifier("9lives"), "_9lives");
        assert_eq!(sanitize_identifier("type"), "type_");
        assert_eq!(sanitize_identifier(""), "__");
        assert_eq!(sanitize_identifier("-"), "__");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("clOrdId"), "cl_ord_id");
        assert_eq!(to_snake_case("Widget"), "widget");
        assert_eq!(to_snake_case("unitPrice2Value"), "unit_price2_value");
        assert_eq!(to_snake_case("HTTPCode"), "httpcode");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_field_identifier() {
        assert_eq!(field_identifier("Type"), "type_");
        assert_eq!(field_identifier("firstName"), "first_name");
        assert_eq!(field_identifier("self"), "self_");
    }
}
