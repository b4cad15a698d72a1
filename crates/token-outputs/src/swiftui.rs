//! SwiftUI constants generator

use token_core::{NormalizedTokens, OutputFile, OutputPlugin, Result};

use crate::value::{camel_case_name, swift_literal};

/// Emits tokens as static constants in a Swift enum, one property per
/// token, resolved for the default mode.
pub struct SwiftTokensPlugin {
    output_path: String,
    type_name: String,
}

impl SwiftTokensPlugin {
    pub fn new() -> Self {
        Self {
            output_path: "DesignTokens.swift".to_string(),
            type_name: "DesignTokens".to_string(),
        }
    }

    /// Override the output path
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Override the generated enum name
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = name.into();
        self
    }
}

impl Default for SwiftTokensPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPlugin for SwiftTokensPlugin {
    fn id(&self) -> &str {
        "swiftui-tokens"
    }

    fn build(&self, tokens: &NormalizedTokens) -> Result<Vec<OutputFile>> {
        let mut lines = vec![format!("public enum {} {{", self.type_name)];
        for (path, leaf) in tokens.walk() {
            lines.push(format!(
                "    public static let {} = {}",
                camel_case_name(&path),
                swift_literal(&leaf.value)
            ));
        }
        lines.push("}".to_string());

        let mut content = lines.join("\n");
        content.push('\n');
        Ok(vec![OutputFile::new(self.output_path.clone(), content)])
    }
}
