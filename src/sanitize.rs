//! Identifier sanitizing for labels typed into the editor.
//!
//! Labels may carry a namespace separator (`coin::mint`) or spaces; Move
//! identifiers may not. Type expressions that already carry generic
//! arguments (`Coin<SUI>`) are passed through untouched.

/// Returned for a missing or empty label.
pub const FALLBACK_IDENTIFIER: &str = "unknown";

const NAMESPACE_SEPARATOR: &str = "::";

/// Sanitizes a label into a declaration (type) name, preserving case.
pub fn declaration_name(raw: &str) -> String {
    if raw.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }
    if raw.contains('<') {
        return raw.to_string();
    }
    replace_separators(raw)
}

/// Sanitizes a label into a lowercase function name.
pub fn callable_name(raw: &str) -> String {
    if raw.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }
    if raw.contains('<') {
        return raw.to_string();
    }
    replace_separators(raw).to_lowercase()
}

/// Sanitizes a module or package name: lowercase, restricted to `[a-z0-9_]`.
pub fn module_name(raw: &str) -> String {
    let name: String = declaration_name(raw)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();
    if name.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else {
        name
    }
}

fn replace_separators(raw: &str) -> String {
    raw.replace(NAMESPACE_SEPARATOR, "_")
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
