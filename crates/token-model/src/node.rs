//! Token tree model and document-form parsing
//!
//! The document form is a nested JSON object following the W3C Design Token
//! Format Module conventions: metadata keys carry a `$` sigil, and a node is
//! a leaf iff it has both a `$type` and a `$value` marker at the same level.
//! Parsing classifies every node once, up front, into the tagged
//! [`TokenNode`] model; downstream traversal and merging never probe for
//! marker keys again.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::path::TokenPath;

/// Reserved sigil prefixing metadata keys in the document form
pub const METADATA_SIGIL: char = '$';
/// Leaf type marker
pub const TYPE_KEY: &str = "$type";
/// Leaf value marker
pub const VALUE_KEY: &str = "$value";
/// Optional leaf description
pub const DESCRIPTION_KEY: &str = "$description";
/// Per-mode value overrides on a leaf
pub const MODES_KEY: &str = "$modes";

/// A single named design value with a declared type
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    /// Declared token type, e.g. `color` or `dimension`
    pub token_type: String,
    /// Default-mode value
    pub value: Value,
    /// Optional human-readable description
    pub description: Option<String>,
    /// Mode-specific value overrides, keyed by mode name
    pub mode_values: BTreeMap<String, Value>,
}

impl TokenLeaf {
    /// Create a leaf with just a type and a default-mode value
    pub fn new(token_type: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            token_type: token_type.into(),
            value: value.into(),
            description: None,
            mode_values: BTreeMap::new(),
        }
    }

    /// Add a mode-specific value override
    pub fn with_mode_value(mut self, mode: impl Into<String>, value: impl Into<Value>) -> Self {
        self.mode_values.insert(mode.into(), value.into());
        self
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Serialize back to the document form
    pub fn to_document(&self) -> Value {
        let mut map = Map::new();
        map.insert(TYPE_KEY.to_string(), Value::String(self.token_type.clone()));
        map.insert(VALUE_KEY.to_string(), self.value.clone());
        if let Some(description) = &self.description {
            map.insert(
                DESCRIPTION_KEY.to_string(),
                Value::String(description.clone()),
            );
        }
        if !self.mode_values.is_empty() {
            let modes: Map<String, Value> = self
                .mode_values
                .iter()
                .map(|(mode, value)| (mode.clone(), value.clone()))
                .collect();
            map.insert(MODES_KEY.to_string(), Value::Object(modes));
        }
        Value::Object(map)
    }
}

/// A node in the token tree: a group of named children, or a leaf
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    /// Nested grouping of tokens
    Group(BTreeMap<String, TokenNode>),
    /// A single token
    Leaf(TokenLeaf),
}

impl TokenNode {
    /// An empty group
    pub fn empty_group() -> Self {
        Self::Group(BTreeMap::new())
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Child map if this node is a group
    pub fn as_group(&self) -> Option<&BTreeMap<String, TokenNode>> {
        match self {
            Self::Group(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// Leaf payload if this node is a leaf
    pub fn as_leaf(&self) -> Option<&TokenLeaf> {
        match self {
            Self::Group(_) => None,
            Self::Leaf(leaf) => Some(leaf),
        }
    }

    /// Look up a node by path.
    ///
    /// Returns `None` if the path does not exist; the root path returns
    /// `self`.
    pub fn get(&self, path: &TokenPath) -> Option<&TokenNode> {
        let mut current = self;
        for segment in path.segments() {
            current = current.as_group()?.get(segment)?;
        }
        Some(current)
    }

    /// Parse a document-form tree into the tagged model.
    ///
    /// Metadata keys (`$`-prefixed) are skipped at every nesting level.
    /// A mapping carrying exactly one of the two leaf markers, or a
    /// primitive found at a structural key, is a malformed node and fails
    /// the parse with the offending path, since proceeding would silently
    /// drop a token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedNode`] for any node that is neither a
    /// valid group nor a valid leaf.
    pub fn from_document(doc: &Value) -> Result<Self> {
        parse_node(doc, &TokenPath::root())
    }

    /// Serialize the tree back to the document form.
    ///
    /// Output key order is deterministic (sorted), so serializing the same
    /// tree twice yields byte-identical documents.
    pub fn to_document(&self) -> Value {
        match self {
            Self::Group(children) => {
                let map: Map<String, Value> = children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_document()))
                    .collect();
                Value::Object(map)
            }
            Self::Leaf(leaf) => leaf.to_document(),
        }
    }
}

fn parse_node(value: &Value, path: &TokenPath) -> Result<TokenNode> {
    let Value::Object(map) = value else {
        return Err(Error::malformed(
            path,
            format!("expected a group or token object, got {}", kind_of(value)),
        ));
    };

    let has_type = map.contains_key(TYPE_KEY);
    let has_value = map.contains_key(VALUE_KEY);
    match (has_type, has_value) {
        (true, true) => parse_leaf(map, path),
        (false, false) => parse_group(map, path),
        (true, false) => Err(Error::malformed(
            path,
            "node has a type marker but no value marker",
        )),
        (false, true) => Err(Error::malformed(
            path,
            "node has a value marker but no type marker",
        )),
    }
}

fn parse_leaf(map: &Map<String, Value>, path: &TokenPath) -> Result<TokenNode> {
    let token_type = map
        .get(TYPE_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed(path, "type marker must be a string"))?
        .to_string();

    // contains_key was checked by the caller
    let value = map.get(VALUE_KEY).cloned().unwrap_or(Value::Null);

    let description = map
        .get(DESCRIPTION_KEY)
        .and_then(Value::as_str)
        .map(String::from);

    let mut mode_values = BTreeMap::new();
    match map.get(MODES_KEY) {
        None => {}
        Some(Value::Object(modes)) => {
            for (mode, mode_value) in modes {
                mode_values.insert(mode.clone(), mode_value.clone());
            }
        }
        Some(other) => {
            return Err(Error::malformed(
                path,
                format!("mode overrides must be an object, got {}", kind_of(other)),
            ));
        }
    }

    // A token cannot contain nested tokens; any structural key here would
    // otherwise vanish from traversal.
    for key in map.keys() {
        if !key.starts_with(METADATA_SIGIL) {
            return Err(Error::malformed(
                path,
                format!("token carries a structural child key '{}'", key),
            ));
        }
    }

    Ok(TokenNode::Leaf(TokenLeaf {
        token_type,
        value,
        description,
        mode_values,
    }))
}

fn parse_group(map: &Map<String, Value>, path: &TokenPath) -> Result<TokenNode> {
    let mut children = BTreeMap::new();
    for (key, child) in map {
        if key.starts_with(METADATA_SIGIL) {
            continue;
        }
        let child_path = path.child(key.clone());
        children.insert(key.clone(), parse_node(child, &child_path)?);
    }
    Ok(TokenNode::Group(children))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
