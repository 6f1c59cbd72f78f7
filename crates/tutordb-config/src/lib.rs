//! Facet types for `.config/tutordb.styx`.
//!
//! ```styx
//! default_schema public
//! snapshot schema.snapshot
//! legacy_tables (pt_backup qb_back_up)
//! ```
//!
//! Every key is optional; a missing file behaves like an empty one.

use facet::Facet;

/// Schema used when `default_schema` is not set.
pub const DEFAULT_SCHEMA: &str = "public";

/// Snapshot path used when `snapshot` is not set.
pub const DEFAULT_SNAPSHOT: &str = "schema.snapshot";

#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Config {
    /// Schema used when a command does not name one.
    #[facet(default)]
    pub default_schema: Option<String>,

    /// Where `tutordb snapshot` writes the rendered catalog, relative to the
    /// project root (the directory holding `.config/`).
    #[facet(default)]
    pub snapshot: Option<String>,

    /// Tables kept for reference only, as `name` or `schema.name`.
    #[facet(default)]
    pub legacy_tables: Vec<String>,
}

impl Config {
    pub fn default_schema(&self) -> &str {
        self.default_schema.as_deref().unwrap_or(DEFAULT_SCHEMA)
    }

    pub fn snapshot(&self) -> &str {
        self.snapshot.as_deref().unwrap_or(DEFAULT_SNAPSHOT)
    }

    /// Legacy entries that name a table in `schema`, unqualified.
    pub fn legacy_tables_in<'a>(&'a self, schema: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let default_schema = self.default_schema();
        self.legacy_tables
            .iter()
            .filter_map(move |entry| match entry.split_once('.') {
                Some((s, name)) if s == schema => Some(name),
                None if default_schema == schema => Some(entry.as_str()),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests;
