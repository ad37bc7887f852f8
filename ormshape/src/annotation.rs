//! Lookup of call-shaped decorators attached to declarations.

use crate::errors::ShapeResult;
use crate::literal::{self, LiteralValue};
use crate::syntax::{Node, NodeId, SyntaxTree};

/// A call-shaped annotation (`@Name(...)`) with its raw argument nodes.
///
/// Arguments are left unevaluated so callers can tell a string literal from
/// an object literal before deciding how to read it.
#[derive(Debug, Clone, Copy)]
pub struct Annotation<'t> {
    pub name: &'t str,
    pub arguments: &'t [NodeId],
    pub node: NodeId,
}

impl<'t> Annotation<'t> {
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// Raw node of the positional argument at `index`.
    pub fn argument(&self, index: usize) -> Option<NodeId> {
        self.arguments.get(index).copied()
    }

    /// Evaluate the positional argument at `index`.
    ///
    /// `Ok(None)` covers both a missing argument and one that is not a literal.
    pub fn evaluate_argument(&self, tree: &SyntaxTree, index: usize) -> ShapeResult<Option<LiteralValue>> {
        match self.argument(index) {
            Some(id) => literal::evaluate(tree, id),
            None => Ok(None),
        }
    }

    /// Evaluated positional arguments; arguments that are not literals are dropped.
    pub fn positional_args(&self, tree: &SyntaxTree) -> ShapeResult<Vec<LiteralValue>> {
        literal::evaluate_array(tree, self.arguments)
    }
}

/// Call-shaped annotations attached to `decl`, in source order.
///
/// Bare references (`@Entity` without a call) and calls through a property
/// access (`@orm.Entity()`) are not recognized.
pub fn annotations(tree: &SyntaxTree, decl: NodeId) -> impl Iterator<Item = Annotation<'_>> {
    tree.node(decl)
        .decorators()
        .iter()
        .filter_map(move |&decorator| as_call_annotation(tree, decorator))
}

/// First call-shaped annotation attached to `decl`.
pub fn first_annotation(tree: &SyntaxTree, decl: NodeId) -> Option<Annotation<'_>> {
    annotations(tree, decl).next()
}

/// First call-shaped annotation on `decl` called `name`.
pub fn find_annotation<'t>(tree: &'t SyntaxTree, decl: NodeId, name: &str) -> Option<Annotation<'t>> {
    annotations(tree, decl).find(|annotation| annotation.is_named(name))
}

fn as_call_annotation(tree: &SyntaxTree, decorator: NodeId) -> Option<Annotation<'_>> {
    let Node::Decorator { expression } = tree.node(decorator) else {
        return None;
    };
    let Node::CallExpression { callee, arguments } = tree.node(*expression) else {
        return None;
    };
    let name = tree.identifier_text(*callee)?;

    Some(Annotation {
        name,
        arguments,
        node: decorator,
    })
}
