//! Structural comparison and diffing of synthesized shapes.

use std::collections::HashMap;

use crate::descriptor::{ColumnDescriptor, EntityDescriptor, TypeDescriptor};

/// Structural equality of two type descriptors.
pub fn same_type(a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
    match (a, b) {
        (TypeDescriptor::Primitive(x), TypeDescriptor::Primitive(y)) => x == y,
        (TypeDescriptor::Array(x), TypeDescriptor::Array(y)) => same_type(x, y),
        (TypeDescriptor::Nullable(x), TypeDescriptor::Nullable(y)) => same_type(x, y),
        (TypeDescriptor::Union(xs), TypeDescriptor::Union(ys)) => same_types(xs, ys),
        (TypeDescriptor::Intersection(xs), TypeDescriptor::Intersection(ys)) => same_types(xs, ys),
        (
            TypeDescriptor::Reference { name: xn, arguments: xa },
            TypeDescriptor::Reference { name: yn, arguments: ya },
        ) => xn == yn && same_types(xa, ya),
        _ => false,
    }
}

/// Element-wise comparison; order matters and lengths must match.
pub fn same_types(a: &[TypeDescriptor], b: &[TypeDescriptor]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_type(x, y))
}

/// Same entity name and the same columns (name and type) in the same order.
pub fn same_shape(a: &EntityDescriptor, b: &EntityDescriptor) -> bool {
    a.name == b.name
        && a.columns.len() == b.columns.len()
        && a
            .columns
            .iter()
            .zip(&b.columns)
            .all(|(x, y)| x.name == y.name && same_type(&x.column_type, &y.column_type))
}

pub fn same_shapes(a: &[EntityDescriptor], b: &[EntityDescriptor]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_shape(x, y))
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        same_type(self, other)
    }
}

/// Differences between two versions of one entity shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeDiff {
    /// Previous name, when the entity name changed
    pub renamed_from: Option<String>,
    /// All detected column changes
    pub changes: Vec<ColumnChange>,
    /// Columns kept but declared in a different order
    pub reordered: bool,
}

impl ShapeDiff {
    pub fn is_empty(&self) -> bool {
        self.renamed_from.is_none() && self.changes.is_empty() && !self.reordered
    }

    pub fn added(&self) -> Vec<&ColumnDescriptor> {
        self.changes
            .iter()
            .filter_map(|c| match c {
                ColumnChange::Added(column) => Some(column),
                _ => None,
            })
            .collect()
    }

    pub fn removed(&self) -> Vec<&ColumnDescriptor> {
        self.changes
            .iter()
            .filter_map(|c| match c {
                ColumnChange::Removed(column) => Some(column),
                _ => None,
            })
            .collect()
    }
}

/// A single column-level change.
#[derive(Debug, Clone)]
pub enum ColumnChange {
    Added(ColumnDescriptor),
    Removed(ColumnDescriptor),
    Retyped {
        name: String,
        old: TypeDescriptor,
        new: TypeDescriptor,
    },
}

/// Compare an old and a new shape of the same entity, matching columns by name.
pub fn diff_shapes(old: &EntityDescriptor, new: &EntityDescriptor) -> ShapeDiff {
    let old_columns: HashMap<&str, &ColumnDescriptor> = old.columns.iter().map(|c| (c.name.as_str(), c)).collect();
    let new_columns: HashMap<&str, &ColumnDescriptor> = new.columns.iter().map(|c| (c.name.as_str(), c)).collect();

    let mut changes = Vec::new();

    for column in &new.columns {
        match old_columns.get(column.name.as_str()) {
            None => changes.push(ColumnChange::Added(column.clone())),
            Some(previous) if !same_type(&previous.column_type, &column.column_type) => {
                changes.push(ColumnChange::Retyped {
                    name: column.name.clone(),
                    old: previous.column_type.clone(),
                    new: column.column_type.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for column in &old.columns {
        if !new_columns.contains_key(column.name.as_str()) {
            changes.push(ColumnChange::Removed(column.clone()));
        }
    }

    // Order of the columns both sides share.
    let old_order: Vec<&str> = old
        .columns
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| new_columns.contains_key(name))
        .collect();
    let new_order: Vec<&str> = new
        .columns
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| old_columns.contains_key(name))
        .collect();

    ShapeDiff {
        renamed_from: (old.name != new.name).then(|| old.name.clone()),
        changes,
        reordered: old_order != new_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PrimitiveKind;

    fn entity(name: &str, columns: &[(&str, TypeDescriptor)]) -> EntityDescriptor {
        EntityDescriptor {
            name: name.to_string(),
            columns: columns
                .iter()
                .map(|(n, t)| ColumnDescriptor::new(*n, t.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_same_type_is_structural() {
        let a = TypeDescriptor::nullable(TypeDescriptor::array(TypeDescriptor::STRING));
        let b = TypeDescriptor::Nullable(Box::new(TypeDescriptor::Array(Box::new(TypeDescriptor::Primitive(
            PrimitiveKind::String,
        )))));
        assert!(same_type(&a, &b));
        assert!(!same_type(&a, &TypeDescriptor::array(TypeDescriptor::STRING)));
        assert!(!same_type(&TypeDescriptor::STRING, &TypeDescriptor::NUMBER));
        assert!(!same_type(&TypeDescriptor::reference("Date"), &TypeDescriptor::reference("Buffer")));
    }

    #[test]
    fn test_same_types_is_order_sensitive() {
        let a = [TypeDescriptor::STRING, TypeDescriptor::NUMBER];
        let b = [TypeDescriptor::NUMBER, TypeDescriptor::STRING];
        assert!(same_types(&a, &a));
        assert!(!same_types(&a, &b));
        assert!(!same_types(&a, &a[..1]));
    }

    #[test]
    fn test_same_shape() {
        let a = entity("users", &[("id", TypeDescriptor::NUMBER), ("name", TypeDescriptor::STRING)]);
        let b = entity("users", &[("id", TypeDescriptor::NUMBER), ("name", TypeDescriptor::STRING)]);
        let c = entity("users", &[("name", TypeDescriptor::STRING), ("id", TypeDescriptor::NUMBER)]);
        assert!(same_shape(&a, &b));
        assert!(!same_shape(&a, &c));
        assert!(same_shapes(&[a.clone(), b.clone()], &[b, a]));
    }

    #[test]
    fn test_diff_shapes() {
        let old = entity(
            "user",
            &[
                ("id", TypeDescriptor::NUMBER),
                ("name", TypeDescriptor::STRING),
                ("legacy", TypeDescriptor::BOOLEAN),
            ],
        );
        let new = entity(
            "users",
            &[
                ("id", TypeDescriptor::NUMBER),
                ("name", TypeDescriptor::nullable(TypeDescriptor::STRING)),
                ("email", TypeDescriptor::STRING),
            ],
        );

        let diff = diff_shapes(&old, &new);
        assert_eq!(diff.renamed_from.as_deref(), Some("user"));
        assert_eq!(diff.added().len(), 1);
        assert_eq!(diff.added()[0].name, "email");
        assert_eq!(diff.removed()[0].name, "legacy");
        assert!(diff.changes.iter().any(|c| matches!(c, ColumnChange::Retyped { name, .. } if name == "name")));
        assert!(!diff.reordered);
    }

    #[test]
    fn test_diff_detects_reorder_only() {
        let old = entity("users", &[("id", TypeDescriptor::NUMBER), ("name", TypeDescriptor::STRING)]);
        let new = entity("users", &[("name", TypeDescriptor::STRING), ("id", TypeDescriptor::NUMBER)]);
        let diff = diff_shapes(&old, &new);
        assert!(diff.changes.is_empty());
        assert!(diff.reordered);
        assert!(!diff.is_empty());
        assert!(diff_shapes(&old, &old).is_empty());
    }
}
