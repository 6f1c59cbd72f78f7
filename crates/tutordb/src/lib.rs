//! Typed mirror of a hosted Postgres schema, powered by facet reflection.
//!
//! A mirror crate declares, per table, a row type, an insert payload and an
//! update payload, and per RPC function an argument type and a return type.
//! This crate provides:
//! - the shape traits those types implement, and typed lookup aliases
//!   ([`Tables`], [`TablesInsert`], [`TablesUpdate`], [`FunctionArgs`],
//!   [`FunctionReturns`], [`Enums`], [`CompositeTypes`]);
//! - the `#[facet(derive(tutordb::Table))]` registration plugin;
//! - [`Catalog`], assembled from every registration, verified, and queryable
//!   by name;
//! - deterministic rendering of the catalog ([`render`]);
//! - [`check_record`], which checks a client record against a table's payloads.
//!
//! # Example
//!
//! ```ignore
//! use facet::Facet;
//!
//! #[derive(Debug, Clone, PartialEq, Facet)]
//! #[facet(derive(tutordb::Table))]
//! pub struct Row {
//!     #[facet(tutordb::pk, tutordb::auto)]
//!     pub id: i64,
//!     pub message: String,
//!     pub timestamp: Option<String>,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Facet)]
//! pub struct Insert {
//!     pub id: Option<i64>,
//!     pub message: String,
//!     pub timestamp: Option<Option<String>>,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Default, Facet)]
//! pub struct Update {
//!     pub id: Option<i64>,
//!     pub message: Option<String>,
//!     pub timestamp: Option<Option<String>>,
//! }
//!
//! impl tutordb::RelationShape for Row {
//!     const SCHEMA: &'static str = "public";
//!     const NAME: &'static str = "notifications";
//! }
//!
//! impl tutordb::TableShape for Row {
//!     type Insert = Insert;
//!     type Update = Update;
//! }
//!
//! let catalog = tutordb::Catalog::collect()?;
//! let table = catalog.table("notifications")?;
//! ```

mod catalog;
mod error;
mod info;
mod plugin;
mod record;
pub mod render;
pub mod verify;

pub use catalog::Catalog;
pub use error::Error;
pub use info::{ColumnInfo, table_info};
pub use record::{RecordIssue, check_record};
pub use verify::{Payload, Violation, verify};

pub use tutordb_schema::{
    Argument, Column, CompositeType, CompositeTypeDef, CompositeTypeShape, CompositeTypes,
    DEFAULT_SCHEMA, EnumDef, EnumShape, EnumType, Enums, Function, FunctionArgs, FunctionDef,
    FunctionReturns, FunctionShape, Json, Jsonb, PayloadField, PgType, Relationship,
    RelationShape, Returns, SchemaError, SchemaGroup, Table, TableDef, TableShape, Tables,
    TablesInsert, TablesUpdate, View, ViewDef, ViewShape,
};

// Re-export attr grammar
pub use tutordb_schema::{__attr, __parse_attr, Attr};

// Re-export inventory for the derive plugin and manual registrations
pub use inventory;

/// Result type for tutordb operations.
pub type Result<T> = std::result::Result<T, Error>;
