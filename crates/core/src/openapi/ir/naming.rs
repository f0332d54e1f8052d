//! Identifier naming rules.
//!
//! Case conversion, type-name and filename sanitation, and the operation-name
//! derivation with its prefix/suffix controls. Everything here is a pure
//! function of its inputs.

use super::api::HttpMethod;
use super::utils::{capitalize_first, lowercase_first};

/// Options that shape derived operation names.
#[derive(Debug, Clone, Default)]
pub struct NamingOptions {
    /// Prefixes removed from the front of every operation name.
    pub ignore_prefixes: Vec<String>,
    /// Keep the verb suffix (`Get`, `Post`, ...) on operation names.
    pub add_method_suffix: bool,
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// `UserController` / `user_controller` -> `user-controller`.
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_separator = false;
    for c in s.chars() {
        if is_word_separator(c) {
            if !in_separator {
                out.push('-');
                in_separator = true;
            }
            prev = Some(c);
            continue;
        }
        in_separator = false;
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

/// `user_list-resp dto` -> `UserListRespDto`. Characters other than the first
/// of each segment keep their case.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = true;
    for c in s.chars() {
        if is_word_separator(c) {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `AuthController_login` -> `authControllerLogin`.
pub fn to_camel_case(s: &str) -> String {
    lowercase_first(&to_pascal_case(s))
}

/// Declaration-safe type name: every character outside `[A-Za-z0-9_]`
/// becomes `_`, then the result is Pascal-cased.
pub fn sanitize_type_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    to_pascal_case(&replaced)
}

/// Replace `<>:"/\|?*` and runs of whitespace with `-`.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// Derive an operation name from its path: `/admin/auth/login/{id}` under GET
/// becomes `adminAuthLoginIdGet`.
pub fn path_to_function_name(method: HttpMethod, path: &str) -> String {
    let without_braces = path.replace(['{', '}'], "");
    let mut name = String::new();
    for (i, segment) in without_braces
        .split('/')
        .filter(|s| !s.is_empty())
        .enumerate()
    {
        let clean: String = segment.chars().filter(char::is_ascii_alphanumeric).collect();
        if i == 0 {
            name.push_str(&clean.to_lowercase());
        } else {
            name.push_str(&capitalize_first(&clean.to_lowercase()));
        }
    }
    name.push_str(method.suffix());
    name
}

/// Remove configured prefixes from the front of `name` until none applies.
///
/// Each prefix is compared case-insensitively in its camel-case form. A prefix
/// that would leave nothing is skipped. After a strip the new leading
/// character is lower-cased.
pub fn strip_method_name_prefixes(name: &str, prefixes: &[String]) -> String {
    let prefixes: Vec<String> = prefixes
        .iter()
        .map(|p| to_camel_case(p))
        .filter(|p| !p.is_empty())
        .collect();

    let mut result = name.to_string();
    loop {
        let mut changed = false;
        for prefix in &prefixes {
            if let Some(rest) = strip_prefix_ignore_case(&result, prefix)
                && !rest.is_empty()
            {
                result = lowercase_first(rest);
                changed = true;
            }
        }
        if !changed {
            return result;
        }
    }
}

fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let prefix_len = prefix.chars().count();
    let split_at = name
        .char_indices()
        .nth(prefix_len)
        .map_or(name.len(), |(i, _)| i);
    if name.chars().count() < prefix_len {
        return None;
    }
    let (head, rest) = name.split_at(split_at);
    (head.to_lowercase() == prefix.to_lowercase()).then_some(rest)
}

/// Remove a trailing capitalized verb (`Get`, `Post`, ...) when it matches exactly.
pub fn remove_method_suffix(name: &str, method: HttpMethod) -> String {
    match name.strip_suffix(method.suffix()) {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => name.to_string(),
    }
}

/// Full operation-name derivation.
///
/// An explicit `operationId` is used verbatim with the verb suffix appended;
/// otherwise the name comes from the path. Prefixes are stripped next, and the
/// suffix is removed again last when suffixing is disabled.
pub fn operation_name(
    operation_id: Option<&str>,
    method: HttpMethod,
    path: &str,
    options: &NamingOptions,
) -> String {
    let base = match operation_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("{id}{}", method.suffix()),
        None => path_to_function_name(method, path),
    };
    let stripped = strip_method_name_prefixes(&base, &options.ignore_prefixes);
    if options.add_method_suffix {
        stripped
    } else {
        remove_method_suffix(&stripped, method)
    }
}
