//! Catalog metadata for tutordb.
//!
//! This crate holds the types describing the hosted database (tables,
//! views, functions, enums and composite types grouped by schema) and the
//! facet reflection that turns the mirror's Rust types into them.

use indexmap::IndexMap;
use std::fmt;

mod error;
mod jsonb;
mod reflect;
mod shape;

pub use error::SchemaError;
pub use jsonb::{Json, Jsonb};
pub use reflect::{
    CompositeTypeDef, EnumDef, FunctionDef, TableDef, ViewDef, parse_fk_reference,
    rust_type_to_pg, shape_to_pg_type,
};
pub use shape::*;

// Attribute grammar, used as `#[facet(tutordb::pk)]` and friends.
facet::define_attr_grammar! {
    ns "tutordb";
    crate_path ::tutordb;

    /// Column attributes understood by the catalog.
    pub enum Attr {
        /// Marks a field as (part of) the primary key.
        ///
        /// Usage: `#[facet(tutordb::pk)]`
        Pk,

        /// Marks a field as having a unique constraint.
        ///
        /// Usage: `#[facet(tutordb::unique)]`
        Unique,

        /// Marks a field as generated by the database (serial, identity).
        ///
        /// Usage: `#[facet(tutordb::auto)]`
        Auto,

        /// The column has a default. The expression is optional because the
        /// generated mirror only knows that a default exists.
        ///
        /// Usage: `#[facet(tutordb::default)]` or `#[facet(tutordb::default = "now()")]`
        Default(Option<&'static str>),

        /// Foreign key reference.
        ///
        /// Usage: `#[facet(tutordb::fk = "users.user_id")]`
        Fk(&'static str),

        /// Overrides the stored column name (default: the field name).
        ///
        /// Usage: `#[facet(tutordb::column = "type")]`
        Column(&'static str),
    }
}

/// Postgres column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PgType {
    /// SMALLINT (2 bytes)
    SmallInt,
    /// INTEGER (4 bytes)
    Integer,
    /// BIGINT (8 bytes)
    BigInt,
    /// REAL (4 bytes floating point)
    Real,
    /// DOUBLE PRECISION (8 bytes floating point)
    DoublePrecision,
    /// NUMERIC (arbitrary precision)
    Numeric,
    /// BOOLEAN
    Boolean,
    /// TEXT
    Text,
    /// UUID
    Uuid,
    /// TIMESTAMPTZ
    Timestamptz,
    /// DATE
    Date,
    /// JSONB
    Jsonb,
}

impl PgType {
    /// The Rust spelling used by the mirror.
    pub fn to_rust_type(&self) -> &'static str {
        match self {
            PgType::SmallInt => "i16",
            PgType::Integer => "i32",
            PgType::BigInt => "i64",
            PgType::Real => "f32",
            PgType::DoublePrecision => "f64",
            PgType::Numeric => "Decimal",
            PgType::Boolean => "bool",
            PgType::Text => "String",
            PgType::Uuid => "Uuid",
            PgType::Timestamptz => "Timestamp",
            PgType::Date => "Date",
            PgType::Jsonb => "Json",
        }
    }

    /// The `data_type` string `information_schema.columns` reports.
    pub fn information_schema_name(&self) -> &'static str {
        match self {
            PgType::SmallInt => "smallint",
            PgType::Integer => "integer",
            PgType::BigInt => "bigint",
            PgType::Real => "real",
            PgType::DoublePrecision => "double precision",
            PgType::Numeric => "numeric",
            PgType::Boolean => "boolean",
            PgType::Text => "text",
            PgType::Uuid => "uuid",
            PgType::Timestamptz => "timestamp with time zone",
            PgType::Date => "date",
            PgType::Jsonb => "jsonb",
        }
    }

    /// The TypeScript-like spelling used in rendered catalogs.
    pub fn to_ts_type(&self) -> &'static str {
        match self {
            PgType::SmallInt
            | PgType::Integer
            | PgType::BigInt
            | PgType::Real
            | PgType::DoublePrecision
            | PgType::Numeric => "number",
            PgType::Boolean => "boolean",
            PgType::Text | PgType::Uuid | PgType::Timestamptz | PgType::Date => "string",
            PgType::Jsonb => "Json",
        }
    }
}

impl fmt::Display for PgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgType::SmallInt => write!(f, "SMALLINT"),
            PgType::Integer => write!(f, "INTEGER"),
            PgType::BigInt => write!(f, "BIGINT"),
            PgType::Real => write!(f, "REAL"),
            PgType::DoublePrecision => write!(f, "DOUBLE PRECISION"),
            PgType::Numeric => write!(f, "NUMERIC"),
            PgType::Boolean => write!(f, "BOOLEAN"),
            PgType::Text => write!(f, "TEXT"),
            PgType::Uuid => write!(f, "UUID"),
            PgType::Timestamptz => write!(f, "TIMESTAMPTZ"),
            PgType::Date => write!(f, "DATE"),
            PgType::Jsonb => write!(f, "JSONB"),
        }
    }
}

/// A column of a table, view or composite type, as read from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Postgres type
    pub pg_type: PgType,
    /// Whether the column allows NULL
    pub nullable: bool,
    /// Default value expression, when the mirror records one
    pub default: Option<String>,
    /// Whether the column has a default at all (the expression may be unknown)
    pub has_default: bool,
    /// Whether this is (part of) the primary key
    pub primary_key: bool,
    /// Whether this has a unique constraint
    pub unique: bool,
    /// Whether the database generates this value (serial, identity, uuid default)
    pub auto_generated: bool,
    /// Doc comment (if any)
    pub doc: Option<String>,
}

impl Column {
    /// A plain non-null column with no constraints.
    pub fn new(name: impl Into<String>, pg_type: PgType) -> Self {
        Self {
            name: name.into(),
            pg_type,
            nullable: false,
            default: None,
            has_default: false,
            primary_key: false,
            unique: false,
            auto_generated: false,
            doc: None,
        }
    }

    /// Whether an insert may omit this column.
    pub fn optional_on_insert(&self) -> bool {
        self.nullable || self.has_default || self.auto_generated
    }
}

/// A field of an insert or update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadField {
    pub name: String,
    /// Base type once every `Option` layer is removed
    pub pg_type: PgType,
    /// Number of `Option` layers around the base type
    pub options: u8,
}

impl PayloadField {
    /// The field may be omitted: one more `Option` layer than the column has.
    pub fn is_optional_for(&self, column: &Column) -> bool {
        self.options == column.nullable as u8 + 1
    }

    /// The field must be present: exactly the column's own `Option` layers.
    pub fn is_required_for(&self, column: &Column) -> bool {
        self.options == column.nullable as u8
    }
}

/// A declared foreign-key relationship. Metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// Constraint name, e.g. `answers_question_id_fkey`
    pub name: String,
    /// Referencing column(s) in this table
    pub columns: Vec<String>,
    /// Referenced table
    pub referenced_relation: String,
    /// Referenced column(s)
    pub referenced_columns: Vec<String>,
    pub is_one_to_one: bool,
}

/// A table: row columns, insert and update payloads, relationships.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub schema: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub insert: Vec<PayloadField>,
    pub update: Vec<PayloadField>,
    pub relationships: Vec<Relationship>,
    /// Doc comment (if any)
    pub doc: Option<String>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn insert_field(&self, name: &str) -> Option<&PayloadField> {
        self.insert.iter().find(|f| f.name == name)
    }

    pub fn update_field(&self, name: &str) -> Option<&PayloadField> {
        self.update.iter().find(|f| f.name == name)
    }

    /// Primary key columns, in declaration order.
    pub fn primary_key(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }

    /// Columns an insert must provide.
    pub fn required_on_insert(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.optional_on_insert())
    }
}

/// A read-only view.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub schema: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub doc: Option<String>,
}

impl View {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub pg_type: PgType,
    /// Whether the caller may omit the argument
    pub optional: bool,
}

/// What a function returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Returns {
    /// `void`
    Void,
    /// A single value
    Scalar(PgType),
    /// `SETOF` rows with these columns
    SetOf(Vec<Column>),
}

/// An RPC function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub schema: String,
    pub name: String,
    pub args: Vec<Argument>,
    pub returns: Returns,
    pub doc: Option<String>,
}

/// A Postgres enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub schema: String,
    pub name: String,
    pub variants: Vec<String>,
}

/// A composite type.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeType {
    pub schema: String,
    pub name: String,
    pub attributes: Vec<Column>,
}

/// Everything declared in one schema grouping, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaGroup {
    pub name: String,
    pub tables: IndexMap<String, Table>,
    pub views: IndexMap<String, View>,
    pub functions: IndexMap<String, Function>,
    pub enums: IndexMap<String, EnumType>,
    pub composite_types: IndexMap<String, CompositeType>,
}

impl SchemaGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the grouping declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
            && self.views.is_empty()
            && self.functions.is_empty()
            && self.enums.is_empty()
            && self.composite_types.is_empty()
    }

    /// Row columns of a table or view.
    pub fn relation_columns(&self, name: &str) -> Option<&[Column]> {
        self.tables
            .get(name)
            .map(|t| t.columns.as_slice())
            .or_else(|| self.views.get(name).map(|v| v.columns.as_slice()))
    }
}
