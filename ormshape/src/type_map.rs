//! Storage-type spellings mapped onto normalized primitive kinds.
//!
//! Column decorators name their storage type with one of many database
//! spellings (`varchar`, `int4`, `timestamptz`, ...). Each spelling lands in
//! exactly one bucket. Temporal, spatial and binary types normalize to
//! `string`; anything unlisted is `any`.

use crate::descriptor::{PrimitiveKind, TypeDescriptor};

/// Types defined by their structure rather than by a name lookup. For these
/// the field's own declared type annotation is used instead of the mapper.
pub const EXCEPTIONS: &[&str] = &[
    "json",
    "jsonb",
    "simple-json",
    "enum",
    "simple-enum",
    "set",
    "array",
    "simple-array",
];

const STRING_TYPES: &[&str] = &[
    // textual
    "character varying",
    "varying character",
    "char varying",
    "nvarchar",
    "national varchar",
    "character",
    "native character",
    "varchar",
    "char",
    "nchar",
    "national char",
    "varchar2",
    "nvarchar2",
    "alphanum",
    "shorttext",
    "string",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
    "ntext",
    "citext",
    "clob",
    "nclob",
    "long",
    "uuid",
    "uniqueidentifier",
    "xml",
    "tsvector",
    "tsquery",
    "ltree",
    "inet",
    "inet4",
    "inet6",
    "cidr",
    "macaddr",
    "macaddr8",
    "bit varying",
    "varbit",
    "rowid",
    "urowid",
    "hierarchyid",
    // temporal
    "date",
    "time",
    "time with time zone",
    "time without time zone",
    "timetz",
    "timestamp",
    "timestamp with time zone",
    "timestamp without time zone",
    "timestamp with local time zone",
    "timestamptz",
    "datetime",
    "datetime2",
    "datetimeoffset",
    "smalldatetime",
    "seconddate",
    "interval",
    "interval year to month",
    "interval day to second",
    // ranges
    "int4range",
    "int8range",
    "numrange",
    "tsrange",
    "tstzrange",
    "daterange",
    // spatial
    "geometry",
    "geography",
    "point",
    "line",
    "lseg",
    "box",
    "circle",
    "path",
    "polygon",
    "linestring",
    "multipoint",
    "multilinestring",
    "multipolygon",
    "geometrycollection",
    "st_geometry",
    "st_point",
    "cube",
    // binary
    "binary",
    "varbinary",
    "raw",
    "long raw",
    "blob",
    "tinyblob",
    "mediumblob",
    "longblob",
    "bytea",
    "image",
    "bfile",
    "rowversion",
];

const NUMBER_TYPES: &[&str] = &[
    "int",
    "int2",
    "int4",
    "int8",
    "int64",
    "integer",
    "unsigned big int",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "dec",
    "decimal",
    "smalldecimal",
    "fixed",
    "numeric",
    "number",
    "float",
    "float4",
    "float8",
    "float64",
    "double",
    "double precision",
    "real",
    "money",
    "smallmoney",
    "year",
];

const BOOLEAN_TYPES: &[&str] = &["boolean", "bool", "bit"];

/// Canonical form used for every lookup: trimmed and ASCII lower-cased.
fn normalize(spelling: &str) -> String {
    spelling.trim().to_ascii_lowercase()
}

/// Whether `spelling` is on the structural exceptions list.
pub fn is_exception(spelling: &str) -> bool {
    EXCEPTIONS.contains(&normalize(spelling).as_str())
}

/// Primitive kind for a storage-type spelling.
///
/// Buckets are tested in order: string, number, boolean. Unlisted spellings
/// are [`PrimitiveKind::Any`].
pub fn primitive_kind(spelling: &str) -> PrimitiveKind {
    let spelling = normalize(spelling);
    let spelling = spelling.as_str();

    if STRING_TYPES.contains(&spelling) {
        PrimitiveKind::String
    } else if NUMBER_TYPES.contains(&spelling) {
        PrimitiveKind::Number
    } else if BOOLEAN_TYPES.contains(&spelling) {
        PrimitiveKind::Boolean
    } else {
        PrimitiveKind::Any
    }
}

/// Map a storage-type spelling to a primitive type descriptor.
///
/// Exceptions are not filtered here; callers check [`is_exception`] first.
pub fn map_type_name(spelling: &str) -> TypeDescriptor {
    TypeDescriptor::Primitive(primitive_kind(spelling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_temporal_spatial_binary_are_strings() {
        for spelling in ["varchar", "text", "uuid", "timestamptz", "date", "point", "bytea", "blob"] {
            assert_eq!(primitive_kind(spelling), PrimitiveKind::String, "{spelling}");
        }
    }

    #[test]
    fn test_numeric_types() {
        for spelling in ["int", "integer", "bigint", "decimal", "double precision", "float8", "year"] {
            assert_eq!(primitive_kind(spelling), PrimitiveKind::Number, "{spelling}");
        }
    }

    #[test]
    fn test_boolean_types() {
        assert_eq!(primitive_kind("boolean"), PrimitiveKind::Boolean);
        assert_eq!(primitive_kind("bool"), PrimitiveKind::Boolean);
        assert_eq!(primitive_kind("bit"), PrimitiveKind::Boolean);
    }

    #[test]
    fn test_unknown_spelling_is_any() {
        assert_eq!(map_type_name("hstore"), TypeDescriptor::ANY);
        assert_eq!(map_type_name(""), TypeDescriptor::ANY);
    }

    #[test]
    fn test_lookup_ignores_case_and_padding() {
        assert_eq!(map_type_name(" VARCHAR "), TypeDescriptor::STRING);
        assert!(is_exception("JSONB"));
    }

    #[test]
    fn test_exceptions() {
        for spelling in EXCEPTIONS {
            assert!(is_exception(spelling));
        }
        assert!(!is_exception("varchar"));
    }

    #[test]
    fn test_buckets_are_disjoint() {
        for spelling in STRING_TYPES {
            assert!(!NUMBER_TYPES.contains(spelling), "{spelling}");
            assert!(!BOOLEAN_TYPES.contains(spelling), "{spelling}");
            assert!(!EXCEPTIONS.contains(spelling), "{spelling}");
        }
        for spelling in NUMBER_TYPES {
            assert!(!BOOLEAN_TYPES.contains(spelling), "{spelling}");
            assert!(!EXCEPTIONS.contains(spelling), "{spelling}");
        }
    }
}
