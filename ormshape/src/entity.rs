//! Entity name resolution from `@Entity(...)` on class declarations.

use crate::annotation;
use crate::errors::{DeclarationKind, ShapeError, ShapeResult};
use crate::literal;
use crate::naming::NamingStrategy;
use crate::syntax::{Node, NodeId, SyntaxTree};

/// Decorator that marks a class as a persisted entity.
pub const ENTITY_DECORATOR: &str = "Entity";

/// Persisted name of the entity declared by `class`, or `None` when the node
/// is not a class or carries no `@Entity(...)`.
///
/// Precedence:
/// 1. a string first argument, verbatim (`@Entity("users")`)
/// 2. a non-empty `name` in an options object (`@Entity({ name: "users" })`)
/// 3. the class identifier, rendered with `naming`
pub fn resolve_entity_name(tree: &SyntaxTree, class: NodeId, naming: NamingStrategy) -> ShapeResult<Option<String>> {
    if !matches!(tree.node(class), Node::ClassDeclaration { .. }) {
        return Ok(None);
    }

    let Some(entity) = annotation::find_annotation(tree, class, ENTITY_DECORATOR) else {
        return Ok(None);
    };

    let Some(first) = entity.argument(0) else {
        return class_name(tree, class, naming).map(Some);
    };

    let name = match tree.node(first) {
        Node::StringLiteral { text } => text.clone(),
        Node::ObjectLiteral { properties } => {
            let options = literal::evaluate_object(tree, properties)?;
            match options.get("name").and_then(|name| name.as_str()) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => class_name(tree, class, naming)?,
            }
        }
        _ => class_name(tree, class, naming)?,
    };

    Ok(Some(name))
}

/// Identifier of a class declaration, rendered with `naming`.
pub fn class_name(tree: &SyntaxTree, class: NodeId, naming: NamingStrategy) -> ShapeResult<String> {
    let Node::ClassDeclaration { name, .. } = tree.node(class) else {
        return Err(ShapeError::MissingName {
            declaration: DeclarationKind::Class,
        });
    };

    (*name)
        .and_then(|id| tree.identifier_text(id))
        .map(|identifier| naming.apply(identifier))
        .ok_or(ShapeError::MissingName {
            declaration: DeclarationKind::Class,
        })
}
