//! The `get_table_info` row set, computed from the mirror.

use facet::Facet;
use tutordb_schema::Table;

/// One row of `get_table_info(p_table_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
    /// The recorded default expression, or an empty string.
    pub column_default: String,
}

/// Describe a table's columns the way `get_table_info` does, in column order.
pub fn table_info(table: &Table) -> Vec<ColumnInfo> {
    table
        .columns
        .iter()
        .map(|column| ColumnInfo {
            column_name: column.name.clone(),
            data_type: column.pg_type.information_schema_name().to_string(),
            is_nullable: column.nullable,
            column_default: column.default.clone().unwrap_or_default(),
        })
        .collect()
}
