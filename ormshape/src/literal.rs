//! Evaluation of literal expression subtrees into plain values.

use std::collections::BTreeMap;

use log::trace;
use serde::Serialize;

use crate::errors::{ShapeError, ShapeResult};
use crate::syntax::{Node, NodeId, SyntaxTree};

/// In-memory value of a literal expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
    Array(Vec<LiteralValue>),
    Object(BTreeMap<String, LiteralValue>),
}

impl LiteralValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, LiteralValue>> {
        match self {
            LiteralValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Non-empty string stored under `key` in an object value.
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.as_object()?
            .get(key)
            .and_then(LiteralValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Whether an object value holds exactly `true` under `key`.
    pub fn flag(&self, key: &str) -> bool {
        self.as_object()
            .and_then(|map| map.get(key))
            .and_then(LiteralValue::as_bool)
            .unwrap_or(false)
    }
}

/// Deepest object/array nesting that is evaluated; anything below it is
/// treated like an expression that is not a literal.
pub const MAX_LITERAL_DEPTH: usize = 64;

/// Evaluate an expression node.
///
/// Returns `Ok(None)` for expression shapes that are not literals (references,
/// calls, arrow functions...). Those are skipped rather than rejected so that
/// unfamiliar annotation arguments never abort a scan.
pub fn evaluate(tree: &SyntaxTree, id: NodeId) -> ShapeResult<Option<LiteralValue>> {
    evaluate_at(tree, id, 0)
}

/// Evaluate the members of an object literal.
///
/// Only `key: value` assignments are read; shorthand and spread members are
/// skipped. Keys must be identifiers or string literals.
pub fn evaluate_object(tree: &SyntaxTree, properties: &[NodeId]) -> ShapeResult<BTreeMap<String, LiteralValue>> {
    object_at(tree, properties, 1)
}

pub fn evaluate_array(tree: &SyntaxTree, elements: &[NodeId]) -> ShapeResult<Vec<LiteralValue>> {
    array_at(tree, elements, 1)
}

fn evaluate_at(tree: &SyntaxTree, id: NodeId, depth: usize) -> ShapeResult<Option<LiteralValue>> {
    let value = match tree.node(id) {
        Node::StringLiteral { text } => LiteralValue::String(text.clone()),
        Node::NumericLiteral { text } => LiteralValue::Number(parse_number(text)),
        Node::TrueKeyword => LiteralValue::Boolean(true),
        Node::FalseKeyword => LiteralValue::Boolean(false),
        Node::NullKeyword => LiteralValue::Null,
        Node::UndefinedKeyword => LiteralValue::Undefined,
        Node::ObjectLiteral { .. } | Node::ArrayLiteral { .. } if depth >= MAX_LITERAL_DEPTH => {
            trace!("literal {id} nested deeper than {MAX_LITERAL_DEPTH}, skipped");
            return Ok(None);
        }
        Node::ObjectLiteral { properties } => LiteralValue::Object(object_at(tree, properties, depth + 1)?),
        Node::ArrayLiteral { elements } => LiteralValue::Array(array_at(tree, elements, depth + 1)?),
        // Anything else is not understood here and contributes nothing.
        _ => return Ok(None),
    };

    Ok(Some(value))
}

fn object_at(tree: &SyntaxTree, properties: &[NodeId], depth: usize) -> ShapeResult<BTreeMap<String, LiteralValue>> {
    let mut object = BTreeMap::new();

    for &property in properties {
        let Node::PropertyAssignment { name, initializer } = tree.node(property) else {
            continue;
        };

        let key = match tree.node(*name) {
            Node::Identifier { text } | Node::StringLiteral { text } => text.clone(),
            _ => return Err(ShapeError::MalformedKey { node: *name }),
        };

        if let Some(value) = evaluate_at(tree, *initializer, depth)? {
            object.insert(key, value);
        }
    }

    Ok(object)
}

fn array_at(tree: &SyntaxTree, elements: &[NodeId], depth: usize) -> ShapeResult<Vec<LiteralValue>> {
    let mut array = Vec::with_capacity(elements.len());
    for &element in elements {
        if let Some(value) = evaluate_at(tree, element, depth)? {
            array.push(value);
        }
    }
    Ok(array)
}

/// Numeric literal text to a number, with the same leniency as JavaScript's
/// `Number()` for literal spellings. Unparseable text yields NaN.
fn parse_number(text: &str) -> f64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    let parse_radix = |digits: &str, radix: u32| {
        u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN)
    };

    if let Some(hex) = lower.strip_prefix("0x") {
        parse_radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        parse_radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        parse_radix(bin, 2)
    } else {
        cleaned.parse::<f64>().unwrap_or(f64::NAN)
    }
}
