//! `ALTER TABLE` statements for the `execute_ddl` RPC.
//!
//! The database exposes a privileged `execute_ddl(ddl_command)` function; the
//! statements built here are what gets passed as `ddl_command`. Identifiers
//! are always quoted. Column types and default expressions are SQL fragments
//! and are written verbatim.

use std::fmt;
use std::str::FromStr;

use crate::{ColumnName, TableName, quote_ident};

/// Errors building an `ALTER TABLE` statement from loose inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlterError {
    #[error("invalid operation: {0} (expected add, drop or modify)")]
    UnknownOperation(String),

    #[error("column type is required for {0} operation")]
    MissingType(AlterOperation),
}

/// The kind of change, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterOperation {
    Add,
    Drop,
    Modify,
}

impl fmt::Display for AlterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlterOperation::Add => write!(f, "add"),
            AlterOperation::Drop => write!(f, "drop"),
            AlterOperation::Modify => write!(f, "modify"),
        }
    }
}

impl FromStr for AlterOperation {
    type Err = AlterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(AlterOperation::Add),
            "drop" => Ok(AlterOperation::Drop),
            "modify" => Ok(AlterOperation::Modify),
            other => Err(AlterError::UnknownOperation(other.to_string())),
        }
    }
}

/// A single column change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterAction {
    /// `ADD COLUMN`
    AddColumn {
        column: ColumnName,
        column_type: String,
        nullable: bool,
        default: Option<String>,
    },
    /// `DROP COLUMN`
    DropColumn { column: ColumnName },
    /// `ALTER COLUMN ... TYPE`, plus nullability and optional default.
    ModifyColumn {
        column: ColumnName,
        column_type: String,
        nullable: bool,
        default: Option<String>,
    },
}

impl AlterAction {
    /// Build an action from command-line style inputs.
    ///
    /// `add` and `modify` need a column type; `drop` ignores everything but
    /// the column name.
    pub fn from_parts(
        operation: AlterOperation,
        column: impl Into<ColumnName>,
        column_type: Option<String>,
        nullable: bool,
        default: Option<String>,
    ) -> Result<Self, AlterError> {
        let column = column.into();
        match operation {
            AlterOperation::Add => Ok(AlterAction::AddColumn {
                column,
                column_type: column_type.ok_or(AlterError::MissingType(operation))?,
                nullable,
                default,
            }),
            AlterOperation::Drop => Ok(AlterAction::DropColumn { column }),
            AlterOperation::Modify => Ok(AlterAction::ModifyColumn {
                column,
                column_type: column_type.ok_or(AlterError::MissingType(operation))?,
                nullable,
                default,
            }),
        }
    }

    /// The column this action touches.
    pub fn column(&self) -> &ColumnName {
        match self {
            AlterAction::AddColumn { column, .. }
            | AlterAction::DropColumn { column }
            | AlterAction::ModifyColumn { column, .. } => column,
        }
    }

    /// The operation kind.
    pub fn operation(&self) -> AlterOperation {
        match self {
            AlterAction::AddColumn { .. } => AlterOperation::Add,
            AlterAction::DropColumn { .. } => AlterOperation::Drop,
            AlterAction::ModifyColumn { .. } => AlterOperation::Modify,
        }
    }
}

/// An `ALTER TABLE` statement touching one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTable {
    pub table: TableName,
    pub action: AlterAction,
}

impl AlterTable {
    pub fn new(table: impl Into<TableName>, action: AlterAction) -> Self {
        Self {
            table: table.into(),
            action,
        }
    }

    /// Render the statement (no trailing semicolon, as `execute_ddl` takes a
    /// single command).
    pub fn to_sql(&self) -> String {
        let table = quote_ident(self.table.as_str());
        match &self.action {
            AlterAction::AddColumn {
                column,
                column_type,
                nullable,
                default,
            } => {
                let mut sql = format!(
                    "ALTER TABLE {} ADD COLUMN {} {}",
                    table,
                    quote_ident(column.as_str()),
                    column_type
                );
                if !nullable {
                    sql.push_str(" NOT NULL");
                }
                if let Some(default) = default {
                    sql.push_str(&format!(" DEFAULT {}", default));
                }
                sql
            }
            AlterAction::DropColumn { column } => {
                format!(
                    "ALTER TABLE {} DROP COLUMN {}",
                    table,
                    quote_ident(column.as_str())
                )
            }
            AlterAction::ModifyColumn {
                column,
                column_type,
                nullable,
                default,
            } => {
                let column = quote_ident(column.as_str());
                let mut sql = format!(
                    "ALTER TABLE {} ALTER COLUMN {} TYPE {}",
                    table, column, column_type
                );
                if *nullable {
                    sql.push_str(&format!(", ALTER COLUMN {} DROP NOT NULL", column));
                } else {
                    sql.push_str(&format!(", ALTER COLUMN {} SET NOT NULL", column));
                }
                if let Some(default) = default {
                    sql.push_str(&format!(", ALTER COLUMN {} SET DEFAULT {}", column, default));
                }
                sql
            }
        }
    }
}

impl fmt::Display for AlterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests;
