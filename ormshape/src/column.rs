//! Column name and type resolution from `@Column(...)` on property declarations.

use crate::annotation::{self, Annotation};
use crate::descriptor::{ColumnDescriptor, TypeDescriptor};
use crate::errors::{DeclarationKind, ShapeError, ShapeResult};
use crate::literal::LiteralValue;
use crate::naming::NamingStrategy;
use crate::syntax::{Node, NodeId, SyntaxTree};
use crate::type_map;

/// Decorator that marks a property as a persisted column.
pub const COLUMN_DECORATOR: &str = "Column";

/// The first two `@Column` arguments, evaluated once.
///
/// `@Column(type?, options?)` and `@Column(options?)` are the recognized
/// call shapes; later arguments are never consulted.
struct ColumnArgs {
    count: usize,
    first: Option<LiteralValue>,
    second: Option<LiteralValue>,
}

impl ColumnArgs {
    fn evaluate(tree: &SyntaxTree, column: &Annotation<'_>) -> ShapeResult<Self> {
        Ok(Self {
            count: column.arguments.len(),
            first: column.evaluate_argument(tree, 0)?,
            second: column.evaluate_argument(tree, 1)?,
        })
    }

    /// Options object carrying the `array`/`nullable` modifiers.
    fn options(&self) -> Option<&LiteralValue> {
        [self.second.as_ref(), self.first.as_ref()]
            .into_iter()
            .flatten()
            .find(|arg| arg.as_object().is_some())
    }

    fn explicit_name(&self) -> Option<&str> {
        [self.first.as_ref(), self.second.as_ref()]
            .into_iter()
            .flatten()
            .find_map(|arg| arg.non_empty_str("name"))
    }
}

/// Persisted column name of `field`, or `None` when it carries no `@Column(...)`.
///
/// A non-empty `name` in the first, then the second, options object wins;
/// otherwise the field identifier is used, rendered with `naming`.
pub fn resolve_column_name(tree: &SyntaxTree, field: NodeId, naming: NamingStrategy) -> ShapeResult<Option<String>> {
    let Some(column) = column_annotation(tree, field) else {
        return Ok(None);
    };
    let args = ColumnArgs::evaluate(tree, &column)?;
    column_name(tree, field, &args, naming).map(Some)
}

/// Normalized value type of `field`, or `None` when it carries no `@Column(...)`.
pub fn resolve_column_type(tree: &SyntaxTree, field: NodeId) -> ShapeResult<Option<TypeDescriptor>> {
    let Some(column) = column_annotation(tree, field) else {
        return Ok(None);
    };
    let args = ColumnArgs::evaluate(tree, &column)?;
    Ok(Some(column_type(tree, field, &args)))
}

/// Name and type of `field` in one pass over its `@Column(...)` arguments.
pub fn resolve_column(
    tree: &SyntaxTree,
    field: NodeId,
    naming: NamingStrategy,
) -> ShapeResult<Option<ColumnDescriptor>> {
    let Some(column) = column_annotation(tree, field) else {
        return Ok(None);
    };
    let args = ColumnArgs::evaluate(tree, &column)?;
    let name = column_name(tree, field, &args, naming)?;
    let column_type = column_type(tree, field, &args);

    Ok(Some(ColumnDescriptor::new(name, column_type)))
}

/// Identifier of a property declaration, rendered with `naming`.
pub fn property_name(tree: &SyntaxTree, field: NodeId, naming: NamingStrategy) -> ShapeResult<String> {
    let missing = || ShapeError::MissingName {
        declaration: DeclarationKind::Property,
    };

    let Node::PropertyDeclaration { name, .. } = tree.node(field) else {
        return Err(missing());
    };

    (*name)
        .and_then(|id| tree.name_text(id))
        .map(|identifier| naming.apply(identifier))
        .ok_or_else(missing)
}

/// Declared type of a property; `prop?: T` reads as `T | undefined`.
fn declared_type(tree: &SyntaxTree, field: NodeId) -> TypeDescriptor {
    match tree.node(field) {
        Node::PropertyDeclaration {
            type_annotation,
            optional,
            ..
        } => {
            let declared = TypeDescriptor::from_annotation(tree, *type_annotation);
            if *optional { TypeDescriptor::nullable(declared) } else { declared }
        }
        _ => TypeDescriptor::ANY,
    }
}

fn column_annotation(tree: &SyntaxTree, field: NodeId) -> Option<Annotation<'_>> {
    if !matches!(tree.node(field), Node::PropertyDeclaration { .. }) {
        return None;
    }
    annotation::find_annotation(tree, field, COLUMN_DECORATOR)
}

fn column_name(tree: &SyntaxTree, field: NodeId, args: &ColumnArgs, naming: NamingStrategy) -> ShapeResult<String> {
    match args.explicit_name() {
        Some(name) => Ok(name.to_string()),
        None => property_name(tree, field, naming),
    }
}

fn column_type(tree: &SyntaxTree, field: NodeId, args: &ColumnArgs) -> TypeDescriptor {
    let declared = || declared_type(tree, field);

    if args.count == 0 {
        return declared();
    }

    let spelling = match &args.first {
        Some(LiteralValue::String(spelling)) => Some(spelling.as_str()),
        Some(options @ LiteralValue::Object(_)) => options.non_empty_str("type"),
        _ => None,
    };

    let mut resolved = match spelling {
        Some(spelling) if !type_map::is_exception(spelling) => type_map::map_type_name(spelling),
        _ => declared(),
    };

    if let Some(options) = args.options() {
        if options.flag("array") {
            resolved = TypeDescriptor::array(resolved);
        }
        if options.flag("nullable") {
            resolved = TypeDescriptor::nullable(resolved);
        }
    }

    resolved
}
