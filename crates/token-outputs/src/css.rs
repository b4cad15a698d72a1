//! CSS custom properties generator

use token_core::{NormalizedTokens, OutputFile, OutputPlugin, Result};

use crate::value::{css_literal, css_variable_name};

/// Emits every token as a CSS custom property.
///
/// The default mode lands in `:root`; each required mode gets an attribute
/// selector block (e.g. `[data-theme="dark"]`) with the fully resolved set,
/// so a stylesheet consumer never depends on fallback order.
pub struct CssVariablesPlugin {
    output_path: String,
    mode_attribute: String,
}

impl CssVariablesPlugin {
    pub fn new() -> Self {
        Self {
            output_path: "tokens.css".to_string(),
            mode_attribute: "data-theme".to_string(),
        }
    }

    /// Override the output path
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Override the attribute used for mode selectors
    pub fn with_mode_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.mode_attribute = attribute.into();
        self
    }

    fn block(&self, selector: &str, tokens: &NormalizedTokens, mode: &str) -> String {
        let mut lines = vec![format!("{} {{", selector)];
        for (path, leaf) in tokens.walk() {
            lines.push(format!(
                "  {}: {};",
                css_variable_name(&path),
                css_literal(tokens.resolve(leaf, mode))
            ));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl Default for CssVariablesPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPlugin for CssVariablesPlugin {
    fn id(&self) -> &str {
        "css-variables"
    }

    fn build(&self, tokens: &NormalizedTokens) -> Result<Vec<OutputFile>> {
        let modes = tokens.modes();
        let mut blocks = vec![self.block(":root", tokens, &modes.default_mode)];
        for mode in &modes.required_modes {
            let selector = format!("[{}=\"{}\"]", self.mode_attribute, mode);
            blocks.push(self.block(&selector, tokens, mode));
        }

        let mut content = blocks.join("\n\n");
        content.push('\n');
        Ok(vec![OutputFile::new(self.output_path.clone(), content)])
    }
}
