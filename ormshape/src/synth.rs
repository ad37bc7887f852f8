//! Assembly of entity shapes from a whole syntax tree.

use log::{debug, trace};

use crate::column;
use crate::config::{FailurePolicy, SynthesisOptions};
use crate::descriptor::EntityDescriptor;
use crate::entity;
use crate::errors::{ShapeError, ShapeResult};
use crate::syntax::{Node, NodeId, SyntaxTree};

/// An entity dropped under [`FailurePolicy::Skip`].
#[derive(Debug)]
pub struct SkippedEntity {
    /// Class declaration that failed to resolve
    pub class: NodeId,
    /// Why it was dropped
    pub error: ShapeError,
}

/// Result of one synthesis run.
#[derive(Debug, Default)]
pub struct SynthesisReport {
    /// Resolved entities, in visitation order
    pub entities: Vec<EntityDescriptor>,
    /// Entities dropped by the skip policy
    pub skipped: Vec<SkippedEntity>,
}

/// Walks a tree and produces one [`EntityDescriptor`] per entity class.
///
/// Holds only options; every run works on its own tree and allocates fresh
/// descriptors, so running twice on the same tree yields equal shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    options: SynthesisOptions,
}

impl Synthesizer {
    pub fn new(options: SynthesisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SynthesisOptions {
        self.options
    }

    /// Entity shapes of `tree`, in pre-order of their class declarations.
    pub fn run(&self, tree: &SyntaxTree) -> ShapeResult<Vec<EntityDescriptor>> {
        self.run_with_report(tree).map(|report| report.entities)
    }

    /// Like [`Synthesizer::run`], also listing entities dropped by the skip policy.
    pub fn run_with_report(&self, tree: &SyntaxTree) -> ShapeResult<SynthesisReport> {
        let mut report = SynthesisReport::default();

        for (id, node) in tree.walk() {
            let Node::ClassDeclaration { .. } = node else {
                continue;
            };
            trace!("found class {id}");

            match self.synthesize_class(tree, id) {
                Ok(Some(entity)) => report.entities.push(entity),
                Ok(None) => {}
                Err(error) if self.options.on_entity_error == FailurePolicy::Skip && error.is_entity_scoped() => {
                    debug!("skipping class {id}: {error}");
                    report.skipped.push(SkippedEntity { class: id, error });
                }
                Err(error) => return Err(error),
            }
        }

        debug!(
            "synthesized {} entities ({} skipped)",
            report.entities.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Shape of a single class, `None` when it is not an entity.
    pub fn synthesize_class(&self, tree: &SyntaxTree, class: NodeId) -> ShapeResult<Option<EntityDescriptor>> {
        let Some(name) = entity::resolve_entity_name(tree, class, self.options.naming)? else {
            return Ok(None);
        };
        debug!("entity '{name}' from class {class}");

        let Node::ClassDeclaration { members, .. } = tree.node(class) else {
            return Ok(None);
        };

        let mut columns = Vec::new();
        for &member in members {
            if let Some(column) = column::resolve_column(tree, member, self.options.naming)? {
                trace!("column '{}' of '{name}': {}", column.name, column.column_type);
                columns.push(column);
            }
        }

        if columns.is_empty() {
            return Err(ShapeError::NoColumnsFound { entity: name });
        }

        Ok(Some(EntityDescriptor { name, columns }))
    }
}

/// Synthesize with default options: verbatim fallback names, abort on failure.
pub fn synthesize(tree: &SyntaxTree) -> ShapeResult<Vec<EntityDescriptor>> {
    Synthesizer::default().run(tree)
}
