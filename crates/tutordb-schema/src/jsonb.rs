//! JSONB support.
//!
//! [`Jsonb<T>`] marks a field as a `jsonb` column. [`Json`] is the
//! schemaless variant: a string, number, boolean, null, a map of string keys
//! to `Json`, or a list of `Json`.

use facet::Facet;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// An unstructured JSON value stored in a `jsonb` column.
pub type Json = Jsonb<facet_value::Value>;

/// A wrapper type that maps to PostgreSQL's JSONB column type.
///
/// Use `Jsonb<facet_value::Value>` (aliased as [`Json`]) for arbitrary JSON.
#[derive(Clone, PartialEq, Eq, Facet)]
#[repr(transparent)]
pub struct Jsonb<T>(pub T);

impl<T> Jsonb<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Jsonb(value)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Jsonb<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Jsonb<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<T> for Jsonb<T> {
    #[inline]
    fn from(value: T) -> Self {
        Jsonb(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Jsonb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Default> Default for Jsonb<T> {
    fn default() -> Self {
        Jsonb(T::default())
    }
}
