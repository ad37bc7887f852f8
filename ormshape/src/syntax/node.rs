//! Node kinds of the generic syntax tree handed over by a parser front-end.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node inside a [`SyntaxTree`](super::SyntaxTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primitive keywords that may appear in a declared type annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKeyword {
    String,
    Number,
    Boolean,
    Any,
    Unknown,
    Null,
    Undefined,
}

/// A single syntax node. Child links are arena ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    SourceFile {
        #[serde(default)]
        statements: Vec<NodeId>,
    },
    ClassDeclaration {
        #[serde(default)]
        name: Option<NodeId>,
        #[serde(default)]
        decorators: Vec<NodeId>,
        #[serde(default)]
        members: Vec<NodeId>,
    },
    PropertyDeclaration {
        #[serde(default)]
        name: Option<NodeId>,
        #[serde(default)]
        decorators: Vec<NodeId>,
        #[serde(default)]
        type_annotation: Option<NodeId>,
        #[serde(default)]
        initializer: Option<NodeId>,
        /// Declared with `?` (`prop?: T`)
        #[serde(default)]
        optional: bool,
    },
    MethodDeclaration {
        #[serde(default)]
        name: Option<NodeId>,
        #[serde(default)]
        decorators: Vec<NodeId>,
        #[serde(default)]
        body: Vec<NodeId>,
    },
    Decorator {
        expression: NodeId,
    },
    /// Anything the engine does not model (statements, imports, other expressions).
    Other {
        label: String,
        #[serde(default)]
        children: Vec<NodeId>,
    },

    CallExpression {
        callee: NodeId,
        #[serde(default)]
        arguments: Vec<NodeId>,
    },
    PropertyAccess {
        object: NodeId,
        name: NodeId,
    },
    ArrowFunction {
        body: NodeId,
    },
    Identifier {
        text: String,
    },
    PrivateIdentifier {
        text: String,
    },
    StringLiteral {
        text: String,
    },
    NumericLiteral {
        text: String,
    },
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    UndefinedKeyword,
    ObjectLiteral {
        #[serde(default)]
        properties: Vec<NodeId>,
    },
    PropertyAssignment {
        name: NodeId,
        initializer: NodeId,
    },
    ShorthandPropertyAssignment {
        name: NodeId,
    },
    SpreadAssignment {
        expression: NodeId,
    },
    ComputedPropertyName {
        expression: NodeId,
    },
    ArrayLiteral {
        #[serde(default)]
        elements: Vec<NodeId>,
    },

    KeywordType {
        keyword: TypeKeyword,
    },
    ArrayType {
        element: NodeId,
    },
    UnionType {
        types: Vec<NodeId>,
    },
    IntersectionType {
        types: Vec<NodeId>,
    },
    TypeReference {
        name: NodeId,
        #[serde(default)]
        arguments: Vec<NodeId>,
    },
    LiteralType {
        literal: NodeId,
    },
    ParenthesizedType {
        inner: NodeId,
    },
}

impl Node {
    /// Ordered children of this node, in source order.
    ///
    /// Decorators precede names, names precede bodies, matching how a
    /// declaration reads left to right.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::SourceFile { statements } => statements.clone(),
            Node::ClassDeclaration {
                name,
                decorators,
                members,
            } => decorators.iter().copied().chain(*name).chain(members.iter().copied()).collect(),
            Node::PropertyDeclaration {
                name,
                decorators,
                type_annotation,
                initializer,
                ..
            } => decorators
                .iter()
                .copied()
                .chain(*name)
                .chain(*type_annotation)
                .chain(*initializer)
                .collect(),
            Node::MethodDeclaration { name, decorators, body } => {
                decorators.iter().copied().chain(*name).chain(body.iter().copied()).collect()
            }
            Node::Decorator { expression } => vec![*expression],
            Node::Other { children, .. } => children.clone(),
            Node::CallExpression { callee, arguments } => {
                std::iter::once(*callee).chain(arguments.iter().copied()).collect()
            }
            Node::PropertyAccess { object, name } => vec![*object, *name],
            Node::ArrowFunction { body } => vec![*body],
            Node::ObjectLiteral { properties } => properties.clone(),
            Node::PropertyAssignment { name, initializer } => vec![*name, *initializer],
            Node::ShorthandPropertyAssignment { name } => vec![*name],
            Node::SpreadAssignment { expression } => vec![*expression],
            Node::ComputedPropertyName { expression } => vec![*expression],
            Node::ArrayLiteral { elements } => elements.clone(),
            Node::ArrayType { element } => vec![*element],
            Node::UnionType { types } | Node::IntersectionType { types } => types.clone(),
            Node::TypeReference { name, arguments } => {
                std::iter::once(*name).chain(arguments.iter().copied()).collect()
            }
            Node::LiteralType { literal } => vec![*literal],
            Node::ParenthesizedType { inner } => vec![*inner],
            Node::Identifier { .. }
            | Node::PrivateIdentifier { .. }
            | Node::StringLiteral { .. }
            | Node::NumericLiteral { .. }
            | Node::TrueKeyword
            | Node::FalseKeyword
            | Node::NullKeyword
            | Node::UndefinedKeyword
            | Node::KeywordType { .. } => Vec::new(),
        }
    }

    /// Decorators attached to a declaration, empty for every other node.
    pub fn decorators(&self) -> &[NodeId] {
        match self {
            Node::ClassDeclaration { decorators, .. }
            | Node::PropertyDeclaration { decorators, .. }
            | Node::MethodDeclaration { decorators, .. } => decorators,
            _ => &[],
        }
    }

    /// Short kind label used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::SourceFile { .. } => "source_file",
            Node::ClassDeclaration { .. } => "class_declaration",
            Node::PropertyDeclaration { .. } => "property_declaration",
            Node::MethodDeclaration { .. } => "method_declaration",
            Node::Decorator { .. } => "decorator",
            Node::Other { .. } => "other",
            Node::CallExpression { .. } => "call_expression",
            Node::PropertyAccess { .. } => "property_access",
            Node::ArrowFunction { .. } => "arrow_function",
            Node::Identifier { .. } => "identifier",
            Node::PrivateIdentifier { .. } => "private_identifier",
            Node::StringLiteral { .. } => "string_literal",
            Node::NumericLiteral { .. } => "numeric_literal",
            Node::TrueKeyword => "true_keyword",
            Node::FalseKeyword => "false_keyword",
            Node::NullKeyword => "null_keyword",
            Node::UndefinedKeyword => "undefined_keyword",
            Node::ObjectLiteral { .. } => "object_literal",
            Node::PropertyAssignment { .. } => "property_assignment",
            Node::ShorthandPropertyAssignment { .. } => "shorthand_property_assignment",
            Node::SpreadAssignment { .. } => "spread_assignment",
            Node::ComputedPropertyName { .. } => "computed_property_name",
            Node::ArrayLiteral { .. } => "array_literal",
            Node::KeywordType { .. } => "keyword_type",
            Node::ArrayType { .. } => "array_type",
            Node::UnionType { .. } => "union_type",
            Node::IntersectionType { .. } => "intersection_type",
            Node::TypeReference { .. } => "type_reference",
            Node::LiteralType { .. } => "literal_type",
            Node::ParenthesizedType { .. } => "parenthesized_type",
        }
    }
}
