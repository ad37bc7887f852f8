use std::fmt;

use thiserror::Error;

use crate::syntax::NodeId;

/// Top-level error type returned by shape resolution and synthesis.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A class or field lacks an identifier where one is structurally required.
    #[error("{declaration} has no name")]
    MissingName { declaration: DeclarationKind },

    /// An object literal argument uses a key that is neither an identifier nor a string literal.
    #[error("property name is not an identifier or string literal (node {node})")]
    MalformedKey { node: NodeId },

    /// An entity class resolved without a single persisted column.
    #[error("no columns found for entity '{entity}'")]
    NoColumnsFound { entity: String },

    /// The supplied tree violates the arena layout (dangling or forward child ids).
    #[error("malformed syntax tree: {message}")]
    MalformedTree { message: String },

    /// A serialized tree could not be decoded.
    #[error("failed to decode syntax tree: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ShapeError {
    /// Whether a skip policy may drop the offending entity and keep going.
    ///
    /// Tree-level failures describe the whole input, so they always abort.
    pub fn is_entity_scoped(&self) -> bool {
        matches!(
            self,
            ShapeError::MissingName { .. } | ShapeError::MalformedKey { .. } | ShapeError::NoColumnsFound { .. }
        )
    }
}

/// Which kind of declaration was missing its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Property,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Class => write!(f, "class"),
            DeclarationKind::Property => write!(f, "property"),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type ShapeResult<T> = Result<T, ShapeError>;
