//! Normalized schema descriptors produced by synthesis.

use std::fmt;

use serde::Serialize;

use crate::syntax::{Node, NodeId, SyntaxTree, TypeKeyword};

/// Deepest type annotation nesting that is converted.
pub const MAX_TYPE_DEPTH: usize = 64;

/// The primitive kinds a storage type can normalize to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    Any,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::String => write!(f, "string"),
            PrimitiveKind::Number => write!(f, "number"),
            PrimitiveKind::Boolean => write!(f, "boolean"),
            PrimitiveKind::Any => write!(f, "any"),
        }
    }
}

/// Normalized value type of a persisted field.
///
/// `Nullable` never wraps another `Nullable`, and the modifier helpers never
/// put a `Nullable` inside an `Array`. Equality is structural, see
/// [`crate::compare`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Array(Box<TypeDescriptor>),
    Nullable(Box<TypeDescriptor>),
    Union(Vec<TypeDescriptor>),
    Intersection(Vec<TypeDescriptor>),
    Reference { name: String, arguments: Vec<TypeDescriptor> },
}

impl TypeDescriptor {
    pub const STRING: TypeDescriptor = TypeDescriptor::Primitive(PrimitiveKind::String);
    pub const NUMBER: TypeDescriptor = TypeDescriptor::Primitive(PrimitiveKind::Number);
    pub const BOOLEAN: TypeDescriptor = TypeDescriptor::Primitive(PrimitiveKind::Boolean);
    pub const ANY: TypeDescriptor = TypeDescriptor::Primitive(PrimitiveKind::Any);

    /// Wrap in `Array`, hoisting an outer `Nullable` so the result is
    /// nullable-of-array rather than array-of-nullable.
    pub fn array(inner: TypeDescriptor) -> Self {
        match inner {
            TypeDescriptor::Nullable(of) => TypeDescriptor::Nullable(Box::new(TypeDescriptor::Array(of))),
            other => TypeDescriptor::Array(Box::new(other)),
        }
    }

    /// Wrap in `Nullable` unless already nullable.
    pub fn nullable(inner: TypeDescriptor) -> Self {
        match inner {
            already @ TypeDescriptor::Nullable(_) => already,
            other => TypeDescriptor::Nullable(Box::new(other)),
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        TypeDescriptor::Reference {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeDescriptor::Nullable(_))
    }

    /// Descriptor of a declared type annotation, used verbatim when no
    /// storage type overrides it. A missing annotation is `any`.
    pub fn from_annotation(tree: &SyntaxTree, annotation: Option<NodeId>) -> Self {
        match annotation {
            Some(id) => Self::from_type_node(tree, id),
            None => TypeDescriptor::ANY,
        }
    }

    /// Descriptor of a type annotation node. Types nested deeper than
    /// [`MAX_TYPE_DEPTH`] read as `any`.
    pub fn from_type_node(tree: &SyntaxTree, id: NodeId) -> Self {
        Self::from_type_node_at(tree, id, 0)
    }

    fn from_type_node_at(tree: &SyntaxTree, id: NodeId, depth: usize) -> Self {
        if depth >= MAX_TYPE_DEPTH {
            return TypeDescriptor::ANY;
        }
        let nested = |child: NodeId| Self::from_type_node_at(tree, child, depth + 1);

        match tree.node(id) {
            Node::KeywordType { keyword } => match keyword {
                TypeKeyword::String => TypeDescriptor::STRING,
                TypeKeyword::Number => TypeDescriptor::NUMBER,
                TypeKeyword::Boolean => TypeDescriptor::BOOLEAN,
                TypeKeyword::Any | TypeKeyword::Unknown => TypeDescriptor::ANY,
                TypeKeyword::Null | TypeKeyword::Undefined => TypeDescriptor::nullable(TypeDescriptor::ANY),
            },
            Node::ArrayType { element } => TypeDescriptor::Array(Box::new(nested(*element))),
            Node::ParenthesizedType { inner } => nested(*inner),
            Node::LiteralType { literal } => match tree.node(*literal) {
                Node::StringLiteral { .. } => TypeDescriptor::STRING,
                Node::NumericLiteral { .. } => TypeDescriptor::NUMBER,
                Node::TrueKeyword | Node::FalseKeyword => TypeDescriptor::BOOLEAN,
                Node::NullKeyword | Node::UndefinedKeyword => TypeDescriptor::nullable(TypeDescriptor::ANY),
                _ => TypeDescriptor::ANY,
            },
            Node::UnionType { types } => Self::from_union(tree, types, depth + 1),
            Node::IntersectionType { types } => {
                TypeDescriptor::Intersection(types.iter().map(|&t| nested(t)).collect())
            }
            Node::TypeReference { name, arguments } => {
                let name = tree.name_text(*name).unwrap_or_default();
                let arguments: Vec<TypeDescriptor> = arguments.iter().map(|&a| nested(a)).collect();
                match (name, arguments.as_slice()) {
                    ("Array" | "ReadonlyArray", [element]) => TypeDescriptor::Array(Box::new(element.clone())),
                    _ => TypeDescriptor::Reference {
                        name: name.to_string(),
                        arguments,
                    },
                }
            }
            _ => TypeDescriptor::ANY,
        }
    }

    fn from_union(tree: &SyntaxTree, types: &[NodeId], depth: usize) -> Self {
        let mut saw_null = false;
        let mut members = Vec::with_capacity(types.len());

        for &member in types {
            if is_null_member(tree, member) {
                saw_null = true;
            } else {
                members.push(Self::from_type_node_at(tree, member, depth));
            }
        }

        let base = match members.len() {
            0 => TypeDescriptor::ANY,
            1 => members.remove(0),
            _ => TypeDescriptor::Union(members),
        };

        if saw_null { TypeDescriptor::nullable(base) } else { base }
    }
}

fn is_null_member(tree: &SyntaxTree, id: NodeId) -> bool {
    match tree.node(id) {
        Node::KeywordType {
            keyword: TypeKeyword::Null | TypeKeyword::Undefined,
        } => true,
        Node::LiteralType { literal } => matches!(tree.node(*literal), Node::NullKeyword | Node::UndefinedKeyword),
        _ => false,
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => write!(f, "{kind}"),
            TypeDescriptor::Array(of) => match of.as_ref() {
                TypeDescriptor::Union(_) | TypeDescriptor::Intersection(_) | TypeDescriptor::Nullable(_) => {
                    write!(f, "({of})[]")
                }
                _ => write!(f, "{of}[]"),
            },
            TypeDescriptor::Nullable(of) => write!(f, "{of} | null"),
            TypeDescriptor::Union(members) => write_joined(f, members, " | "),
            TypeDescriptor::Intersection(members) => write_joined(f, members, " & "),
            TypeDescriptor::Reference { name, arguments } => {
                write!(f, "{name}")?;
                if !arguments.is_empty() {
                    write!(f, "<")?;
                    write_joined(f, arguments, ", ")?;
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[TypeDescriptor], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A persisted field of an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    /// Persisted column name
    pub name: String,

    /// Normalized value type
    #[serde(rename = "type")]
    pub column_type: TypeDescriptor,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, column_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Schema of one entity class, columns in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDescriptor {
    /// Persisted entity name
    pub name: String,

    /// Persisted columns
    pub columns: Vec<ColumnDescriptor>,
}

impl EntityDescriptor {
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }
}
