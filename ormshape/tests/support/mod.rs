//! Shared fixtures: small entity source files expressed as syntax trees.
#![allow(dead_code)]

use ormshape::syntax::{NodeId, TreeBuilder, TypeKeyword};
use ormshape::{NamingStrategy, SyntaxTree, resolve_entity_name};

pub const CORRECT_NAME: &str = "Test";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every entity name resolved anywhere in the tree.
pub fn entity_names(tree: &SyntaxTree, naming: NamingStrategy) -> Vec<String> {
    tree.walk()
        .filter_map(|(id, _)| resolve_entity_name(tree, id, naming).unwrap())
        .collect()
}

/// ```text
/// export class Test {}
/// ```
pub fn no_entity() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let class = b.class(Some("Test"), vec![], vec![]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {}
/// ```
pub fn class_name_entity() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let entity = b.decorator_call("Entity", vec![]);
    let class = b.class(Some("Test"), vec![entity], vec![]);
    b.finish(vec![class])
}

/// ```text
/// @Entity('Test')
/// export class Name {}
/// ```
pub fn decorator_string_entity() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let name = b.string("Test");
    let entity = b.decorator_call("Entity", vec![name]);
    let class = b.class(Some("Name"), vec![entity], vec![]);
    b.finish(vec![class])
}

/// ```text
/// @Entity({ name: "Test" })
/// export class Name {}
/// ```
pub fn decorator_options_entity() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let name = b.string("Test");
    let options = b.object_of(vec![("name", name)]);
    let entity = b.decorator_call("Entity", vec![options]);
    let class = b.class(Some("Name"), vec![entity], vec![]);
    b.finish(vec![class])
}

/// Wrap members in `@Entity() export class Test { ... }`.
pub fn entity_class(b: &mut TreeBuilder, members: Vec<NodeId>) -> NodeId {
    let entity = b.decorator_call("Entity", vec![]);
    b.class(Some("Test"), vec![entity], members)
}

/// `@Column() name: <keyword>;`
pub fn plain_column(b: &mut TreeBuilder, name: &str, keyword: TypeKeyword) -> NodeId {
    let column = b.decorator_call("Column", vec![]);
    let ty = b.keyword_type(keyword);
    b.property(name, vec![column], Some(ty))
}

/// ```text
/// @Entity()
/// export class Test {
///     prop: string;
/// }
/// ```
pub fn without_column() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let ty = b.keyword_type(TypeKeyword::String);
    let prop = b.property("prop", vec![], Some(ty));
    let class = entity_class(&mut b, vec![prop]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {
///     @Column()
///     prop: string;
/// }
/// ```
pub fn with_column() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let prop = plain_column(&mut b, "prop", TypeKeyword::String);
    let class = entity_class(&mut b, vec![prop]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {
///     @Column()
///     prop: string;
///
///     @Column({ name: "renamed" })
///     other: number;
///
///     ignored: boolean;
///
///     @Column("boolean", { name: "flag_column" })
///     flag: boolean;
/// }
/// ```
pub fn with_multiple_columns() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let prop = plain_column(&mut b, "prop", TypeKeyword::String);

    let renamed = b.string("renamed");
    let options = b.object_of(vec![("name", renamed)]);
    let column = b.decorator_call("Column", vec![options]);
    let ty = b.keyword_type(TypeKeyword::Number);
    let other = b.property("other", vec![column], Some(ty));

    let ty = b.keyword_type(TypeKeyword::Boolean);
    let ignored = b.property("ignored", vec![], Some(ty));

    let storage = b.string("boolean");
    let flag_name = b.string("flag_column");
    let options = b.object_of(vec![("name", flag_name)]);
    let column = b.decorator_call("Column", vec![storage, options]);
    let ty = b.keyword_type(TypeKeyword::Boolean);
    let flag = b.property("flag", vec![column], Some(ty));

    let class = entity_class(&mut b, vec![prop, other, ignored, flag]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {
///     @Column()
///     title: string;
///
///     @Column()
///     count: number;
///
///     @Column()
///     active: boolean;
/// }
/// ```
pub fn infer_from_primitive_types() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let title = plain_column(&mut b, "title", TypeKeyword::String);
    let count = plain_column(&mut b, "count", TypeKeyword::Number);
    let active = plain_column(&mut b, "active", TypeKeyword::Boolean);
    let class = entity_class(&mut b, vec![title, count, active]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {
///     @Column()
///     title: string | null;
///
///     @Column()
///     value: string | number;
/// }
/// ```
pub fn infer_from_type_union() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let column = b.decorator_call("Column", vec![]);
    let s = b.keyword_type(TypeKeyword::String);
    let ty = b.nullable_type(s);
    let title = b.property("title", vec![column], Some(ty));

    let column = b.decorator_call("Column", vec![]);
    let s = b.keyword_type(TypeKeyword::String);
    let n = b.keyword_type(TypeKeyword::Number);
    let ty = b.union_type(vec![s, n]);
    let value = b.property("value", vec![column], Some(ty));

    let class = entity_class(&mut b, vec![title, value]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {
///     @Column()
///     nickname?: string;
/// }
/// ```
pub fn infer_from_optional_type() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let column = b.decorator_call("Column", vec![]);
    let ty = b.keyword_type(TypeKeyword::String);
    let nickname = b.optional_property("nickname", vec![column], Some(ty));
    let class = entity_class(&mut b, vec![nickname]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {
///     @Column("varchar", { length: 255, nullable: true })
///     title: string | null;
///
///     @Column({ type: "int", array: true })
///     scores: number[];
///
///     @Column("simple-json")
///     settings: Settings;
///
///     @Column("timestamptz", { array: true, nullable: true })
///     seen: Date[];
/// }
/// ```
pub fn types_from_options() -> SyntaxTree {
    let mut b = TreeBuilder::new();

    let varchar = b.string("varchar");
    let length = b.number("255");
    let nullable = b.boolean(true);
    let options = b.object_of(vec![("length", length), ("nullable", nullable)]);
    let column = b.decorator_call("Column", vec![varchar, options]);
    let s = b.keyword_type(TypeKeyword::String);
    let ty = b.nullable_type(s);
    let title = b.property("title", vec![column], Some(ty));

    let int = b.string("int");
    let array = b.boolean(true);
    let options = b.object_of(vec![("type", int), ("array", array)]);
    let column = b.decorator_call("Column", vec![options]);
    let n = b.keyword_type(TypeKeyword::Number);
    let ty = b.array_type(n);
    let scores = b.property("scores", vec![column], Some(ty));

    let json = b.string("simple-json");
    let column = b.decorator_call("Column", vec![json]);
    let ty = b.type_ref("Settings", vec![]);
    let settings = b.property("settings", vec![column], Some(ty));

    let timestamptz = b.string("timestamptz");
    let array = b.boolean(true);
    let nullable = b.boolean(true);
    let options = b.object_of(vec![("array", array), ("nullable", nullable)]);
    let column = b.decorator_call("Column", vec![timestamptz, options]);
    let date = b.type_ref("Date", vec![]);
    let ty = b.array_type(date);
    let seen = b.property("seen", vec![column], Some(ty));

    let class = entity_class(&mut b, vec![title, scores, settings, seen]);
    b.finish(vec![class])
}

/// ```text
/// @Entity()
/// export class Test {
///     @Column({ type: "jsonb" })
///     settings: Settings;
///
///     @Column("simple-json", { nullable: true })
///     profile: Profile;
///
///     @Column("enum", { array: true })
///     role: Role;
///
///     @Column("simple-array")
///     tags: string[];
///
///     @Column({ type: "json", array: true, nullable: true })
///     history: Entry;
/// }
/// ```
pub fn exception_types() -> SyntaxTree {
    let mut b = TreeBuilder::new();

    let jsonb = b.string("jsonb");
    let options = b.object_of(vec![("type", jsonb)]);
    let column = b.decorator_call("Column", vec![options]);
    let ty = b.type_ref("Settings", vec![]);
    let settings = b.property("settings", vec![column], Some(ty));

    let simple_json = b.string("simple-json");
    let nullable = b.boolean(true);
    let options = b.object_of(vec![("nullable", nullable)]);
    let column = b.decorator_call("Column", vec![simple_json, options]);
    let ty = b.type_ref("Profile", vec![]);
    let profile = b.property("profile", vec![column], Some(ty));

    let spelling = b.string("enum");
    let array = b.boolean(true);
    let options = b.object_of(vec![("array", array)]);
    let column = b.decorator_call("Column", vec![spelling, options]);
    let ty = b.type_ref("Role", vec![]);
    let role = b.property("role", vec![column], Some(ty));

    let simple_array = b.string("simple-array");
    let column = b.decorator_call("Column", vec![simple_array]);
    let s = b.keyword_type(TypeKeyword::String);
    let ty = b.array_type(s);
    let tags = b.property("tags", vec![column], Some(ty));

    let json = b.string("json");
    let array = b.boolean(true);
    let nullable = b.boolean(true);
    let options = b.object_of(vec![("type", json), ("array", array), ("nullable", nullable)]);
    let column = b.decorator_call("Column", vec![options]);
    let ty = b.type_ref("Entry", vec![]);
    let history = b.property("history", vec![column], Some(ty));

    let class = entity_class(&mut b, vec![settings, profile, role, tags, history]);
    b.finish(vec![class])
}
