//! Schema shapes for decorator-annotated entity classes.
//!
//! `ormshape` inspects a parsed syntax tree of a class-based source file,
//! finds classes marked with `@Entity(...)`, and derives for each one a
//! normalized description: the entity name, its `@Column(...)` fields and a
//! resolved value type per field.
//!
//! ```
//! use ormshape::syntax::{TreeBuilder, TypeKeyword};
//! use ormshape::{TypeDescriptor, synthesize};
//!
//! let mut b = TreeBuilder::new();
//! let varchar = b.string("varchar");
//! let nullable = b.boolean(true);
//! let options = b.object_of(vec![("nullable", nullable)]);
//! let column = b.decorator_call("Column", vec![varchar, options]);
//! let declared = b.keyword_type(TypeKeyword::String);
//! let prop = b.property("title", vec![column], Some(declared));
//! let name = b.string("posts");
//! let entity = b.decorator_call("Entity", vec![name]);
//! let class = b.class(Some("Post"), vec![entity], vec![prop]);
//! let tree = b.finish(vec![class]);
//!
//! let entities = synthesize(&tree).unwrap();
//! assert_eq!(entities[0].name, "posts");
//! assert_eq!(entities[0].columns[0].column_type, TypeDescriptor::nullable(TypeDescriptor::STRING));
//! ```

pub mod annotation;
pub mod column;
pub mod compare;
pub mod config;
pub mod descriptor;
pub mod entity;
pub mod errors;
pub mod literal;
pub mod naming;
pub mod syntax;
pub mod synth;
pub mod type_map;

pub use annotation::{Annotation, find_annotation, first_annotation};
pub use column::{resolve_column, resolve_column_name, resolve_column_type};
pub use compare::{ShapeDiff, diff_shapes, same_shape, same_shapes, same_type, same_types};
pub use config::{FailurePolicy, ShapeConfig, SynthesisOptions};
pub use descriptor::{ColumnDescriptor, EntityDescriptor, PrimitiveKind, TypeDescriptor};
pub use entity::resolve_entity_name;
pub use errors::*;
pub use literal::LiteralValue;
pub use naming::NamingStrategy;
pub use syntax::{SyntaxTree, TreeBuilder};
pub use synth::{SkippedEntity, SynthesisReport, Synthesizer, synthesize};
pub use type_map::map_type_name;
