//! Shared value and identifier rendering for the generators

use serde_json::Value;
use token_model::TokenPath;

/// Render a token value as a CSS literal.
///
/// Strings pass through unquoted (colors, dimensions); composite values
/// fall back to their compact JSON form.
pub fn css_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Turn a token path into a CSS custom property name,
/// e.g. `color/brand/primary` -> `--color-brand-primary`
pub fn css_variable_name(path: &TokenPath) -> String {
    let joined = path
        .segments()
        .iter()
        .map(|segment| segment.replace([' ', '_'], "-"))
        .collect::<Vec<_>>()
        .join("-");
    format!("--{}", joined.to_lowercase())
}

/// Turn a token path into a camelCase identifier,
/// e.g. `color/brand-primary` -> `colorBrandPrimary`
pub fn camel_case_name(path: &TokenPath) -> String {
    let words: Vec<String> = path
        .segments()
        .iter()
        .flat_map(|segment| {
            segment
                .split(['-', '_', ' '])
                .filter(|part| !part.is_empty())
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
        })
        .collect();

    let mut name = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            name.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }
    name
}

/// Render a token value as a Swift literal
pub fn swift_literal(value: &Value) -> String {
    match value {
        Value::String(s) => swift_string(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => swift_string(&other.to_string()),
    }
}

fn swift_string(raw: &str) -> String {
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}
