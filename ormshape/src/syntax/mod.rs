//! Generic syntax tree consumed by the shape engine.
//!
//! Parsing source text is the job of an external front-end; it hands over
//! either a [`SyntaxTree`] assembled with [`TreeBuilder`] or the same tree
//! serialized as JSON (see [`SyntaxTree::from_json`]).
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. Every
//! child is allocated before its parent, so child ids are always smaller than
//! the parent id and the arena cannot contain cycles. A node has at most one
//! parent, so a walk reaches it at most once.

mod builder;
mod node;

pub use builder::TreeBuilder;
pub use node::{Node, NodeId, TypeKeyword};

use serde::{Deserialize, Serialize};

use crate::errors::{ShapeError, ShapeResult};

/// An arena of nodes plus the id of the source-file root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    /// Decode a tree emitted by an external parser and validate its layout.
    pub fn from_json(input: &str) -> ShapeResult<Self> {
        let tree: SyntaxTree = serde_json::from_str(input)?;
        tree.validate()?;
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    ///
    /// Ids handed out by this tree are always valid; indexing with a foreign
    /// id panics like any out-of-range arena index.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Text of an identifier-like node (identifier, private identifier,
    /// string literal or numeric literal), if `id` is one.
    pub fn name_text(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            Node::Identifier { text }
            | Node::PrivateIdentifier { text }
            | Node::StringLiteral { text }
            | Node::NumericLiteral { text } => Some(text),
            _ => None,
        }
    }

    /// Text of a plain identifier node.
    pub fn identifier_text(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            Node::Identifier { text } => Some(text),
            _ => None,
        }
    }

    /// Pre-order walk starting at `start`: every reachable node exactly once,
    /// parents before children, siblings in source order.
    pub fn preorder(&self, start: NodeId) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![start],
        }
    }

    /// Pre-order walk of the whole tree.
    pub fn walk(&self) -> Preorder<'_> {
        self.preorder(self.root)
    }

    fn validate(&self) -> ShapeResult<()> {
        if self.root.index() >= self.nodes.len() {
            return Err(ShapeError::MalformedTree {
                message: format!("root {} is out of range for {} nodes", self.root, self.nodes.len()),
            });
        }

        let mut has_parent = vec![false; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate() {
            for child in node.children() {
                if child.index() >= index {
                    return Err(ShapeError::MalformedTree {
                        message: format!(
                            "{} node #{index} refers to child {child}, which is not allocated before it",
                            node.kind_name()
                        ),
                    });
                }
                if std::mem::replace(&mut has_parent[child.index()], true) {
                    return Err(ShapeError::MalformedTree {
                        message: format!("node {child} has more than one parent"),
                    });
                }
            }
        }

        if has_parent[self.root.index()] {
            return Err(ShapeError::MalformedTree {
                message: format!("root {} is the child of another node", self.root),
            });
        }

        Ok(())
    }
}

/// Iterator returned by [`SyntaxTree::preorder`].
pub struct Preorder<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Reverse so the first child is popped next.
        self.stack.extend(node.children().into_iter().rev());
        Some((id, node))
    }
}
