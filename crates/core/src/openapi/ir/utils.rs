//! Common utilities for TypeScript code generation.
//!
//! Quoting and identifier helpers shared by the catalog builder and codegen.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::types::TsLiteral;
use crate::openapi::spec::EnumValue;

/// TypeScript reserved words that cannot be used as binding names.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Check if an identifier needs bracket notation (or quoting) for property/key access.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_bracket_notation(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in a single-quoted JavaScript/TypeScript literal.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Quote a string if needed for use as a property key or enum key.
pub fn quote_if_needed(name: &str) -> String {
    if needs_bracket_notation(name) {
        format!("'{}'", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Format a parameter access expression (e.g., `params.foo` or `params['foo-bar']`).
pub fn format_param_access(obj: &str, prop: &str, required: bool) -> String {
    if needs_bracket_notation(prop) {
        if required {
            format!("{}['{}']", obj, escape_js_string(prop))
        } else {
            format!("{}?.['{}']", obj, escape_js_string(prop))
        }
    } else if required {
        format!("{obj}.{prop}")
    } else {
        format!("{obj}?.{prop}")
    }
}

/// Make a callable name safe to bind with `const`.
pub fn sanitize_binding(name: &str) -> String {
    let mut result: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    if result.is_empty() {
        return "_empty".to_string();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) || TS_RESERVED_WORDS.contains(result.as_str()) {
        result.insert(0, '_');
    }
    result
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (for comparison purposes).
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert an enum value to the literal used as an enum member value.
pub fn enum_value_to_literal(v: &EnumValue) -> TsLiteral {
    match v {
        EnumValue::String(s) => TsLiteral::String(s.clone()),
        EnumValue::Integer(n) => TsLiteral::Int(*n),
        EnumValue::Float(f) => TsLiteral::Number(*f),
        EnumValue::Bool(_) | EnumValue::Null => TsLiteral::String(v.as_text()),
    }
}

/// Member name for an enum value without a name hint: the upper-cased value,
/// prefixed with `VALUE_` when the value is purely numeric.
pub fn enum_value_to_key(v: &EnumValue) -> String {
    let text = v.as_text();
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        format!("VALUE_{text}")
    } else {
        quote_if_needed(&text.to_uppercase())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_bracket_notation() {
        assert!(!needs_bracket_notation("foo"));
        assert!(!needs_bracket_notation("_foo"));
        assert!(!needs_bracket_notation("$foo"));
        assert!(!needs_bracket_notation("foo123"));

        assert!(needs_bracket_notation(""));
        assert!(needs_bracket_notation("123foo"));
        assert!(needs_bracket_notation("foo-bar"));
        assert!(needs_bracket_notation("foo.bar"));
        assert!(needs_bracket_notation("foo bar"));
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("hello"), "hello");
        assert_eq!(escape_js_string("it's"), "it\\'s");
        assert_eq!(escape_js_string("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo-bar"), "'foo-bar'");
        assert_eq!(quote_if_needed("123"), "'123'");
    }

    #[test]
    fn test_format_param_access() {
        assert_eq!(format_param_access("params", "foo", true), "params.foo");
        assert_eq!(format_param_access("params", "foo", false), "params?.foo");
        assert_eq!(
            format_param_access("params", "foo-bar", true),
            "params['foo-bar']"
        );
        assert_eq!(
            format_param_access("params", "foo-bar", false),
            "params?.['foo-bar']"
        );
    }

    #[test]
    fn test_sanitize_binding() {
        assert_eq!(sanitize_binding("getUsers"), "getUsers");
        assert_eq!(sanitize_binding("delete"), "_delete");
        assert_eq!(sanitize_binding("1st"), "_1st");
        assert_eq!(sanitize_binding("a.b"), "a_b");
        assert_eq!(sanitize_binding(""), "_empty");
    }

    #[test]
    fn test_capitalize_and_lowercase_first() {
        assert_eq!(capitalize_first("foo"), "Foo");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(lowercase_first("FooBar"), "fooBar");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("fooBar"), "foo_bar");
        assert_eq!(to_snake_case("itemId"), "item_id");
    }

    #[test]
    fn test_enum_value_to_key() {
        assert_eq!(enum_value_to_key(&EnumValue::String("active".into())), "ACTIVE");
        assert_eq!(enum_value_to_key(&EnumValue::Integer(2)), "VALUE_2");
        assert_eq!(enum_value_to_key(&EnumValue::String("10".into())), "VALUE_10");
        assert_eq!(
            enum_value_to_key(&EnumValue::String("in-progress".into())),
            "'IN-PROGRESS'"
        );
    }
}
