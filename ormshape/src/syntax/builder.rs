use super::{Node, NodeId, SyntaxTree, TypeKeyword};

/// Bottom-up constructor for [`SyntaxTree`] arenas.
///
/// Every method allocates a node and returns its id; parents are built from
/// ids returned earlier, which keeps the arena acyclic.
///
/// ```
/// use ormshape::syntax::{TreeBuilder, TypeKeyword};
///
/// let mut b = TreeBuilder::new();
/// let column = b.decorator_call("Column", vec![]);
/// let ty = b.keyword_type(TypeKeyword::String);
/// let prop = b.property("prop", vec![column], Some(ty));
/// let entity = b.decorator_call("Entity", vec![]);
/// let class = b.class(Some("Test"), vec![entity], vec![prop]);
/// let tree = b.finish(vec![class]);
/// assert_eq!(tree.walk().count(), tree.len());
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an arbitrary node. Child ids must come from this builder.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Wrap the given top-level statements in a source-file root.
    pub fn finish(mut self, statements: Vec<NodeId>) -> SyntaxTree {
        let root = self.push(Node::SourceFile { statements });
        SyntaxTree {
            nodes: self.nodes,
            root,
        }
    }

    // Expressions

    pub fn identifier(&mut self, text: &str) -> NodeId {
        self.push(Node::Identifier { text: text.to_string() })
    }

    pub fn string(&mut self, text: &str) -> NodeId {
        self.push(Node::StringLiteral { text: text.to_string() })
    }

    pub fn number(&mut self, text: &str) -> NodeId {
        self.push(Node::NumericLiteral { text: text.to_string() })
    }

    pub fn boolean(&mut self, value: bool) -> NodeId {
        self.push(if value { Node::TrueKeyword } else { Node::FalseKeyword })
    }

    pub fn null(&mut self) -> NodeId {
        self.push(Node::NullKeyword)
    }

    pub fn undefined(&mut self) -> NodeId {
        self.push(Node::UndefinedKeyword)
    }

    pub fn array(&mut self, elements: Vec<NodeId>) -> NodeId {
        self.push(Node::ArrayLiteral { elements })
    }

    pub fn object(&mut self, properties: Vec<NodeId>) -> NodeId {
        self.push(Node::ObjectLiteral { properties })
    }

    /// `key: value` with a plain identifier key.
    pub fn assign(&mut self, key: &str, value: NodeId) -> NodeId {
        let name = self.identifier(key);
        self.push(Node::PropertyAssignment {
            name,
            initializer: value,
        })
    }

    /// `key: value` with an arbitrary key node (string literal, computed, ...).
    pub fn assign_with_key(&mut self, name: NodeId, value: NodeId) -> NodeId {
        self.push(Node::PropertyAssignment {
            name,
            initializer: value,
        })
    }

    pub fn computed(&mut self, expression: NodeId) -> NodeId {
        self.push(Node::ComputedPropertyName { expression })
    }

    /// `{ key: value, ... }` from already-built value nodes.
    pub fn object_of(&mut self, entries: Vec<(&str, NodeId)>) -> NodeId {
        let properties = entries
            .into_iter()
            .map(|(key, value)| self.assign(key, value))
            .collect();
        self.object(properties)
    }

    /// `callee(args...)` with an identifier callee.
    pub fn call(&mut self, callee: &str, arguments: Vec<NodeId>) -> NodeId {
        let callee = self.identifier(callee);
        self.push(Node::CallExpression { callee, arguments })
    }

    pub fn arrow(&mut self, body: NodeId) -> NodeId {
        self.push(Node::ArrowFunction { body })
    }

    pub fn other(&mut self, label: &str, children: Vec<NodeId>) -> NodeId {
        self.push(Node::Other {
            label: label.to_string(),
            children,
        })
    }

    // Declarations

    pub fn decorator(&mut self, expression: NodeId) -> NodeId {
        self.push(Node::Decorator { expression })
    }

    /// `@Name(args...)`
    pub fn decorator_call(&mut self, name: &str, arguments: Vec<NodeId>) -> NodeId {
        let call = self.call(name, arguments);
        self.decorator(call)
    }

    pub fn class(&mut self, name: Option<&str>, decorators: Vec<NodeId>, members: Vec<NodeId>) -> NodeId {
        let name = name.map(|text| self.identifier(text));
        self.push(Node::ClassDeclaration {
            name,
            decorators,
            members,
        })
    }

    /// Property declaration with an identifier name.
    pub fn property(&mut self, name: &str, decorators: Vec<NodeId>, type_annotation: Option<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.property_with_name(Some(name), decorators, type_annotation)
    }

    /// Property declaration with an arbitrary (or missing) name node.
    pub fn property_with_name(
        &mut self,
        name: Option<NodeId>,
        decorators: Vec<NodeId>,
        type_annotation: Option<NodeId>,
    ) -> NodeId {
        self.push(Node::PropertyDeclaration {
            name,
            decorators,
            type_annotation,
            initializer: None,
            optional: false,
        })
    }

    /// `name?: T`
    pub fn optional_property(
        &mut self,
        name: &str,
        decorators: Vec<NodeId>,
        type_annotation: Option<NodeId>,
    ) -> NodeId {
        let name = self.identifier(name);
        self.push(Node::PropertyDeclaration {
            name: Some(name),
            decorators,
            type_annotation,
            initializer: None,
            optional: true,
        })
    }

    pub fn method(&mut self, name: &str, decorators: Vec<NodeId>, body: Vec<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.push(Node::MethodDeclaration {
            name: Some(name),
            decorators,
            body,
        })
    }

    // Type annotations

    pub fn keyword_type(&mut self, keyword: TypeKeyword) -> NodeId {
        self.push(Node::KeywordType { keyword })
    }

    pub fn array_type(&mut self, element: NodeId) -> NodeId {
        self.push(Node::ArrayType { element })
    }

    pub fn union_type(&mut self, types: Vec<NodeId>) -> NodeId {
        self.push(Node::UnionType { types })
    }

    pub fn intersection_type(&mut self, types: Vec<NodeId>) -> NodeId {
        self.push(Node::IntersectionType { types })
    }

    pub fn type_ref(&mut self, name: &str, arguments: Vec<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.push(Node::TypeReference { name, arguments })
    }

    pub fn literal_type(&mut self, literal: NodeId) -> NodeId {
        self.push(Node::LiteralType { literal })
    }

    pub fn parenthesized_type(&mut self, inner: NodeId) -> NodeId {
        self.push(Node::ParenthesizedType { inner })
    }

    /// `T | null`
    pub fn nullable_type(&mut self, inner: NodeId) -> NodeId {
        let null = self.keyword_type(TypeKeyword::Null);
        self.union_type(vec![inner, null])
    }
}
