//! Translation trees: parsing locale documents, merging them, and writing
//! them back out.
//!
//! A translations document has a single top-level locale key holding a
//! `rodauth` namespace of flat string keys. Merging and serialization are
//! pure functions over `serde_yml::Mapping`, which keeps key order.

use serde::Deserialize;
use serde_yml::{Mapping, Value};
use std::collections::HashMap;

/// One locale's entry in a translations document.
#[derive(Debug, Clone, Deserialize)]
struct LocaleSection {
    rodauth: Mapping,
}

/// Parse a translations document and pull out the `rodauth` mapping for
/// `locale`. `Ok(None)` means the document is valid YAML but has no entry
/// for the locale; syntactically broken documents and locale entries
/// without a `rodauth` mapping are `Err`.
pub fn parse_document(content: &str, locale: &str) -> Result<Option<Mapping>, serde_yml::Error> {
    let mut document: HashMap<String, LocaleSection> = serde_yml::from_str(content)?;
    Ok(document.remove(locale).map(|section| section.rodauth))
}

/// Merge canonical translations into an existing tree.
///
/// Every key canonical defines takes canonical's value; keys only present
/// in `existing` survive untouched. Existing keys keep their positions and
/// canonical-only keys are appended in canonical order. Nested mappings on
/// both sides merge recursively.
pub fn merge(canonical: &Mapping, existing: &Mapping) -> Mapping {
    let mut merged = existing.clone();
    for (key, canonical_value) in canonical {
        let value = match (existing.get(key), canonical_value) {
            (Some(Value::Mapping(sub_existing)), Value::Mapping(sub_canonical)) => {
                Value::Mapping(merge(sub_canonical, sub_existing))
            }
            _ => canonical_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

/// Serialize a translations tree for `locale` to its on-disk form.
///
/// The first line is `<locale>:` with no document header, the `rodauth`
/// namespace sits under it, and every scalar occupies exactly one line no
/// matter how long. Downstream grep/diff tooling relies on that layout.
pub fn to_yaml(locale: &str, translations: &Mapping) -> String {
    let mut out = String::new();
    out.push_str(&scalar(locale));
    out.push_str(":\n  rodauth:\n");
    write_mapping(&mut out, translations, 2);
    out
}

fn write_mapping(out: &mut String, mapping: &Mapping, depth: usize) {
    let indent = "  ".repeat(depth);
    for (key, value) in mapping {
        out.push_str(&indent);
        out.push_str(&scalar_token(key));
        match value {
            Value::Mapping(nested) => {
                out.push_str(":\n");
                write_mapping(out, nested, depth + 1);
            }
            Value::Sequence(items) => {
                out.push_str(":\n");
                write_sequence(out, items, depth + 1);
            }
            Value::Null => out.push_str(":\n"),
            other => {
                out.push_str(": ");
                out.push_str(&scalar_token(other));
                out.push('\n');
            }
        }
    }
}

fn write_sequence(out: &mut String, items: &[Value], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            Value::Mapping(nested) => {
                out.push_str(&indent);
                out.push_str("-\n");
                write_mapping(out, nested, depth + 1);
            }
            Value::Sequence(nested) => {
                out.push_str(&indent);
                out.push_str("-\n");
                write_sequence(out, nested, depth + 1);
            }
            Value::Null => {
                out.push_str(&indent);
                out.push_str("-\n");
            }
            other => {
                out.push_str(&indent);
                out.push_str("- ");
                out.push_str(&scalar_token(other));
                out.push('\n');
            }
        }
    }
}

fn scalar_token(value: &Value) -> String {
    match value {
        Value::String(s) => scalar(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Tagged(tagged) => scalar_token(&tagged.value),
        _ => String::new(),
    }
}

/// Render a string scalar: plain when that reads back unchanged, otherwise
/// double-quoted with escapes.
fn scalar(value: &str) -> String {
    if plain_safe(value) {
        value.to_string()
    } else {
        quoted(value)
    }
}

fn plain_safe(value: &str) -> bool {
    let Some(first) = value.chars().next() else {
        return false;
    };
    // Tokens the YAML resolver would read back as something other than a
    // string: booleans, nulls, numbers (including hex/octal forms).
    if matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "null" | "~" | ".nan" | ".inf" | "+.inf"
    ) {
        return false;
    }
    if value.parse::<f64>().is_ok() || value.starts_with("0x") || value.starts_with("0o") {
        return false;
    }
    if "-?:,[]{}#&*!|>'\"%@`".contains(first) {
        return false;
    }
    if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        return false;
    }
    if value.contains(": ") || value.ends_with(':') || value.contains(" #") {
        return false;
    }
    if value.chars().any(char::is_control) {
        return false;
    }
    true
}

fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
