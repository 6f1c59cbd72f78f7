//! SQL helpers for tutordb.
//!
//! Quoting, Postgres naming conventions, and the `ALTER TABLE` builder used
//! to produce commands for the `execute_ddl` RPC.

use strid::braid;

mod alter;
pub use alter::*;

/// Postgres truncates identifiers longer than this many bytes.
pub const PG_IDENT_MAX: usize = 63;

/// The name of a table.
#[braid]
pub struct TableName;

/// The name of a column.
#[braid]
pub struct ColumnName;

/// A PostgreSQL string literal wrapper.
///
/// Display writes the value escaped and quoted with single quotes.
///
/// # Example
/// ```
/// use tutordb_sql::Lit;
/// assert_eq!(format!("{}", Lit("foo")), "'foo'");
/// assert_eq!(format!("{}", Lit("it's")), "'it''s'");
/// ```
pub struct Lit<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> std::fmt::Display for Lit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.0.as_ref().replace('\'', "''"))
    }
}

/// A PostgreSQL identifier wrapper.
///
/// Display writes the value escaped and quoted with double quotes.
///
/// # Example
/// ```
/// use tutordb_sql::Ident;
/// assert_eq!(format!("{}", Ident("answers")), "\"answers\"");
/// assert_eq!(format!("{}", Ident("bla\"h")), "\"bla\"\"h\"");
/// ```
pub struct Ident<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> std::fmt::Display for Ident<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.as_ref().replace('"', "\"\""))
    }
}

/// Escape a string literal for SQL.
pub fn escape_string(s: &str) -> String {
    Lit(s).to_string()
}

/// Quote a PostgreSQL identifier.
///
/// Always quotes, so reserved words such as `user` or `type` are safe as
/// table and column names.
pub fn quote_ident(name: &str) -> String {
    Ident(name).to_string()
}

/// The name Postgres picks for a foreign key constraint when none is given.
///
/// Postgres builds `{table}_{columns}_fkey` and, when that exceeds
/// [`PG_IDENT_MAX`], shortens the longer of the table and column parts until
/// it fits.
///
/// # Examples
///
/// ```
/// assert_eq!(tutordb_sql::fkey_name("answers", &["question_id"]), "answers_question_id_fkey");
/// assert_eq!(tutordb_sql::fkey_name("t", &["a", "b"]), "t_a_b_fkey");
/// ```
pub fn fkey_name(table: &str, columns: &[impl AsRef<str>]) -> String {
    let cols: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
    let cols = cols.join("_");

    // "_" between the parts plus the "_fkey" suffix
    let overhead = 1 + "_fkey".len();
    let budget = PG_IDENT_MAX.saturating_sub(overhead);

    let mut table_len = table.len();
    let mut cols_len = cols.len();
    while table_len + cols_len > budget {
        if table_len > cols_len {
            table_len -= 1;
        } else {
            cols_len -= 1;
        }
    }

    format!(
        "{}_{}_fkey",
        truncate_at_boundary(table, table_len),
        truncate_at_boundary(&cols, cols_len)
    )
}

fn truncate_at_boundary(s: &str, max: usize) -> &str {
    let mut len = max.min(s.len());
    while len > 0 && !s.is_char_boundary(len) {
        len -= 1;
    }
    &s[..len]
}
