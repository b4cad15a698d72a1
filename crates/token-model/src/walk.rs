//! Depth-first token tree traversal
//!
//! The walker is a finite, restartable iterator driven by an explicit
//! stack; each call to [`walk`] starts a fresh traversal. Metadata keys
//! cannot appear here; the parse step that builds a [`TokenNode`] already
//! skipped them at every nesting level.

use crate::node::{TokenLeaf, TokenNode};
use crate::path::TokenPath;

/// Iterator over `(path, leaf)` pairs in depth-first pre-order
pub struct TokenWalker<'a> {
    stack: Vec<(TokenPath, &'a TokenNode)>,
}

/// Walk a token tree, yielding every leaf with its normalized path.
///
/// Group children are visited in key order, so traversal order is
/// deterministic for a given tree.
pub fn walk(root: &TokenNode) -> TokenWalker<'_> {
    TokenWalker {
        stack: vec![(TokenPath::root(), root)],
    }
}

impl<'a> Iterator for TokenWalker<'a> {
    type Item = (TokenPath, &'a TokenLeaf);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                TokenNode::Leaf(leaf) => return Some((path, leaf)),
                TokenNode::Group(children) => {
                    // Reverse push so the first key is popped first
                    for (key, child) in children.iter().rev() {
                        self.stack.push((path.child(key.clone()), child));
                    }
                }
            }
        }
        None
    }
}

impl TokenNode {
    /// Iterate every leaf in this tree in depth-first pre-order
    pub fn walk(&self) -> TokenWalker<'_> {
        walk(self)
    }

    /// Number of leaves reachable from this node
    pub fn token_count(&self) -> usize {
        self.walk().count()
    }
}
