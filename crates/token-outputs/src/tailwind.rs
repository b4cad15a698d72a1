//! Tailwind theme generator

use serde_json::{Map, Value};

use token_core::{NormalizedTokens, OutputFile, OutputPlugin, Result};
use token_model::TokenNode;

/// Emits the token tree as a nested theme object for Tailwind's `theme`
/// configuration key, resolved for the default mode.
pub struct TailwindThemePlugin {
    output_path: String,
}

impl TailwindThemePlugin {
    pub fn new() -> Self {
        Self {
            output_path: "tokens.tailwind.json".to_string(),
        }
    }

    /// Override the output path
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for TailwindThemePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPlugin for TailwindThemePlugin {
    fn id(&self) -> &str {
        "tailwind-theme"
    }

    fn build(&self, tokens: &NormalizedTokens) -> Result<Vec<OutputFile>> {
        let theme = theme_value(tokens.root());
        let mut content = serde_json::to_string_pretty(&theme)?;
        content.push('\n');
        Ok(vec![OutputFile::new(self.output_path.clone(), content)])
    }
}

/// Groups become nested objects, leaves become their default-mode value
fn theme_value(node: &TokenNode) -> Value {
    match node {
        TokenNode::Group(children) => {
            let map: Map<String, Value> = children
                .iter()
                .map(|(key, child)| (key.clone(), theme_value(child)))
                .collect();
            Value::Object(map)
        }
        TokenNode::Leaf(leaf) => leaf.value.clone(),
    }
}
