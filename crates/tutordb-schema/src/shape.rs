//! Traits tying mirror types to their place in the catalog.
//!
//! A table's row type implements [`TableShape`] and names its insert and
//! update payload types; a function's argument type implements
//! [`FunctionShape`] and names its return type. Everything else about the
//! shape (columns, nullability, attributes) is read through facet
//! reflection.

use facet::Facet;

/// The schema used when a lookup does not name one.
pub const DEFAULT_SCHEMA: &str = "public";

/// A relation (table or view) with a row shape.
pub trait RelationShape: Facet<'static> {
    /// Schema grouping, e.g. `public`.
    const SCHEMA: &'static str;
    /// Relation name as stored.
    const NAME: &'static str;
}

/// A table: row shape plus insert and update payloads.
pub trait TableShape: RelationShape {
    /// Insert payload. Optional fields wrap the row type in one more `Option`.
    type Insert: Facet<'static>;
    /// Update payload. Every field is optional.
    type Update: Facet<'static> + Default;
}

/// A read-only view. Only the row shape exists.
pub trait ViewShape: RelationShape {}

/// An RPC function, implemented on its argument type.
pub trait FunctionShape: Facet<'static> {
    const SCHEMA: &'static str;
    const NAME: &'static str;
    /// `()` for `void`, `Vec<Row>` for set-returning functions, a scalar otherwise.
    type Returns: Facet<'static>;
}

/// A composite type.
pub trait CompositeTypeShape: Facet<'static> {
    const SCHEMA: &'static str;
    const NAME: &'static str;
}

/// A Postgres enum, mirrored as a fieldless Rust enum.
pub trait EnumShape: Facet<'static> {
    const SCHEMA: &'static str;
    const NAME: &'static str;
}

#[doc(hidden)]
pub trait RowOf {
    type Row;
}

impl<R: RelationShape> RowOf for R {
    type Row = R;
}

#[doc(hidden)]
pub trait ArgsOf {
    type Args;
}

impl<F: FunctionShape> ArgsOf for F {
    type Args = F;
}

#[doc(hidden)]
pub trait CompositeOf {
    type Composite;
}

impl<C: CompositeTypeShape> CompositeOf for C {
    type Composite = C;
}

#[doc(hidden)]
pub trait EnumOf {
    type Enum;
}

impl<E: EnumShape> EnumOf for E {
    type Enum = E;
}

/// Row shape of a table or view.
pub type Tables<R> = <R as RowOf>::Row;

/// Insert payload of a table.
pub type TablesInsert<R> = <R as TableShape>::Insert;

/// Update payload of a table.
pub type TablesUpdate<R> = <R as TableShape>::Update;

/// Argument shape of a function.
pub type FunctionArgs<F> = <F as ArgsOf>::Args;

/// Return shape of a function.
pub type FunctionReturns<F> = <F as FunctionShape>::Returns;

/// A composite type.
pub type CompositeTypes<C> = <C as CompositeOf>::Composite;

/// An enum type.
pub type Enums<E> = <E as EnumOf>::Enum;
