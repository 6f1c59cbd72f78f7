//! Structural checks over an assembled catalog.
//!
//! Every table is checked against its own insert and update payloads, and
//! every relationship against the relation it points at. The checks only
//! see the mirror; drift between the mirror and the live database is out of
//! reach here.

use std::fmt;

use thiserror::Error;
use tutordb_schema::{Column, PayloadField, PgType, SchemaGroup, Table};

use crate::Catalog;

/// Which payload of a table a finding concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Insert,
    Update,
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Insert => write!(f, "insert"),
            Payload::Update => write!(f, "update"),
        }
    }
}

/// A single verification finding. `table` is always `schema.name`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{table}: {payload} field `{field}` has no matching row column")]
    UnknownPayloadField {
        table: String,
        payload: Payload,
        field: String,
    },

    #[error("{table}: row column `{column}` is missing from the {payload} payload")]
    MissingPayloadField {
        table: String,
        payload: Payload,
        column: String,
    },

    #[error("{table}: update field `{field}` must be optional")]
    UpdateFieldRequired { table: String, field: String },

    #[error(
        "{table}: insert field `{field}` should be {} (nullable, defaulted or generated columns are optional)",
        optionality(.expected_optional)
    )]
    InsertOptionality {
        table: String,
        field: String,
        expected_optional: bool,
    },

    #[error("{table}: {payload} field `{field}` is {found} but the column is {expected}")]
    PayloadType {
        table: String,
        payload: Payload,
        field: String,
        expected: PgType,
        found: PgType,
    },

    #[error(
        "{table}: {payload} field `{field}` has {options} Option layer(s), column nullable = {nullable}"
    )]
    OptionDepth {
        table: String,
        payload: Payload,
        field: String,
        options: u8,
        nullable: bool,
    },

    #[error("{table}: relationship `{relationship}` uses unknown column `{column}`")]
    MissingColumn {
        table: String,
        relationship: String,
        column: String,
    },

    #[error("{table}: relationship `{relationship}` references unknown relation `{referenced}`")]
    MissingReferencedRelation {
        table: String,
        relationship: String,
        referenced: String,
    },

    #[error(
        "{table}: relationship `{relationship}` references unknown column `{referenced}.{column}`"
    )]
    MissingReferencedColumn {
        table: String,
        relationship: String,
        referenced: String,
        column: String,
    },

    #[error(
        "{table}: relationship `{relationship}` links `{column}` ({found}) to a {expected} column"
    )]
    ReferenceTypeMismatch {
        table: String,
        relationship: String,
        column: String,
        expected: PgType,
        found: PgType,
    },

    #[error(
        "{table}: relationship `{relationship}` references {referenced}({}), which is neither a primary key nor unique",
        .columns.join(", ")
    )]
    ReferencedNotKey {
        table: String,
        relationship: String,
        referenced: String,
        columns: Vec<String>,
    },

    #[error("{table}: relationship `{relationship}` has {columns} referencing but {referenced} referenced column(s)")]
    ArityMismatch {
        table: String,
        relationship: String,
        columns: usize,
        referenced: usize,
    },
}

fn optionality(optional: &bool) -> &'static str {
    if *optional { "optional" } else { "required" }
}

/// Run every check over every schema in the catalog.
pub fn verify(catalog: &Catalog) -> Vec<Violation> {
    let mut violations = Vec::new();
    for group in catalog.schemas.values() {
        for table in group.tables.values() {
            verify_table(table, &mut violations);
            verify_relationships(group, table, &mut violations);
        }
    }
    violations
}

fn qualified(table: &Table) -> String {
    format!("{}.{}", table.schema, table.name)
}

fn verify_table(table: &Table, out: &mut Vec<Violation>) {
    verify_payload(table, Payload::Insert, &table.insert, out);
    verify_payload(table, Payload::Update, &table.update, out);
}

fn verify_payload(table: &Table, payload: Payload, fields: &[PayloadField], out: &mut Vec<Violation>) {
    let name = qualified(table);

    for column in &table.columns {
        if !fields.iter().any(|f| f.name == column.name) {
            out.push(Violation::MissingPayloadField {
                table: name.clone(),
                payload,
                column: column.name.clone(),
            });
        }
    }

    for field in fields {
        let Some(column) = table.column(&field.name) else {
            out.push(Violation::UnknownPayloadField {
                table: name.clone(),
                payload,
                field: field.name.clone(),
            });
            continue;
        };

        if field.pg_type != column.pg_type {
            out.push(Violation::PayloadType {
                table: name.clone(),
                payload,
                field: field.name.clone(),
                expected: column.pg_type,
                found: field.pg_type,
            });
        }

        verify_optionality(&name, payload, field, column, out);
    }
}

fn verify_optionality(
    table: &str,
    payload: Payload,
    field: &PayloadField,
    column: &Column,
    out: &mut Vec<Violation>,
) {
    let optional = field.is_optional_for(column);
    if !optional && !field.is_required_for(column) {
        out.push(Violation::OptionDepth {
            table: table.to_string(),
            payload,
            field: field.name.clone(),
            options: field.options,
            nullable: column.nullable,
        });
        return;
    }

    match payload {
        Payload::Update if !optional => out.push(Violation::UpdateFieldRequired {
            table: table.to_string(),
            field: field.name.clone(),
        }),
        Payload::Insert if optional != column.optional_on_insert() => {
            out.push(Violation::InsertOptionality {
                table: table.to_string(),
                field: field.name.clone(),
                expected_optional: column.optional_on_insert(),
            })
        }
        _ => {}
    }
}

fn verify_relationships(group: &SchemaGroup, table: &Table, out: &mut Vec<Violation>) {
    let name = qualified(table);

    for rel in &table.relationships {
        if rel.columns.len() != rel.referenced_columns.len() {
            out.push(Violation::ArityMismatch {
                table: name.clone(),
                relationship: rel.name.clone(),
                columns: rel.columns.len(),
                referenced: rel.referenced_columns.len(),
            });
            continue;
        }

        for column in &rel.columns {
            if table.column(column).is_none() {
                out.push(Violation::MissingColumn {
                    table: name.clone(),
                    relationship: rel.name.clone(),
                    column: column.clone(),
                });
            }
        }

        let Some(referenced) = group.relation_columns(&rel.referenced_relation) else {
            out.push(Violation::MissingReferencedRelation {
                table: name.clone(),
                relationship: rel.name.clone(),
                referenced: rel.referenced_relation.clone(),
            });
            continue;
        };

        for (column, ref_column) in rel.columns.iter().zip(&rel.referenced_columns) {
            let Some(target) = referenced.iter().find(|c| &c.name == ref_column) else {
                out.push(Violation::MissingReferencedColumn {
                    table: name.clone(),
                    relationship: rel.name.clone(),
                    referenced: rel.referenced_relation.clone(),
                    column: ref_column.clone(),
                });
                continue;
            };

            if let Some(source) = table.column(column)
                && source.pg_type != target.pg_type
            {
                out.push(Violation::ReferenceTypeMismatch {
                    table: name.clone(),
                    relationship: rel.name.clone(),
                    column: column.clone(),
                    expected: target.pg_type,
                    found: source.pg_type,
                });
            }
        }

        let all_present = rel
            .referenced_columns
            .iter()
            .all(|c| referenced.iter().any(|r| &r.name == c));
        if all_present && !is_key(referenced, &rel.referenced_columns) {
            out.push(Violation::ReferencedNotKey {
                table: name.clone(),
                relationship: rel.name.clone(),
                referenced: rel.referenced_relation.clone(),
                columns: rel.referenced_columns.clone(),
            });
        }
    }
}

/// Whether `columns` is exactly the primary key, or a single unique column.
fn is_key(relation: &[Column], columns: &[String]) -> bool {
    let mut pk: Vec<&str> = relation
        .iter()
        .filter(|c| c.primary_key)
        .map(|c| c.name.as_str())
        .collect();
    let mut wanted: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
    pk.sort_unstable();
    wanted.sort_unstable();
    if !pk.is_empty() && pk == wanted {
        return true;
    }

    match columns {
        [single] => relation.iter().any(|c| &c.name == single && c.unique),
        _ => false,
    }
}
