//! Checks a client record's keys against a table's insert or update payload.

use thiserror::Error;
use tutordb_schema::Table;

use crate::Payload;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordIssue {
    #[error("{table}: `{field}` is not a column")]
    UnknownField { table: String, field: String },

    #[error("{table}: `{field}` is required on insert")]
    MissingField { table: String, field: String },

    #[error("{table}: update sets no fields")]
    EmptyUpdate { table: String },
}

/// Compare the keys of a record against `payload` of `table`.
///
/// Unknown keys are reported in the order given, followed by missing
/// required columns in column order.
pub fn check_record<'a>(
    table: &Table,
    payload: Payload,
    keys: impl IntoIterator<Item = &'a str>,
) -> Vec<RecordIssue> {
    let name = format!("{}.{}", table.schema, table.name);
    let keys: Vec<&str> = keys.into_iter().collect();
    let fields = match payload {
        Payload::Insert => &table.insert,
        Payload::Update => &table.update,
    };

    let mut issues: Vec<RecordIssue> = keys
        .iter()
        .filter(|key| !fields.iter().any(|f| f.name == **key))
        .map(|key| RecordIssue::UnknownField {
            table: name.clone(),
            field: key.to_string(),
        })
        .collect();

    match payload {
        Payload::Insert => {
            for column in table.required_on_insert() {
                if !keys.contains(&column.name.as_str()) {
                    issues.push(RecordIssue::MissingField {
                        table: name.clone(),
                        field: column.name.clone(),
                    });
                }
            }
        }
        Payload::Update if keys.is_empty() => {
            issues.push(RecordIssue::EmptyUpdate { table: name });
        }
        Payload::Update => {}
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;
    use tutordb_schema::{Column, PayloadField, PgType};

    fn reminders() -> Table {
        let mut id = Column::new("id", PgType::BigInt);
        id.primary_key = true;
        id.auto_generated = true;
        let columns = vec![
            id,
            Column::new("message", PgType::Text),
            Column::new("user_id", PgType::BigInt),
        ];
        let payload = |options: u8| {
            columns
                .iter()
                .map(|c| PayloadField {
                    name: c.name.clone(),
                    pg_type: c.pg_type,
                    options: if c.auto_generated { 1 } else { options },
                })
                .collect::<Vec<_>>()
        };

        Table {
            schema: "public".to_string(),
            name: "reminders".to_string(),
            insert: payload(0),
            update: payload(1),
            columns,
            relationships: vec![],
            doc: None,
        }
    }

    #[test]
    fn test_complete_insert() {
        let issues = check_record(&reminders(), Payload::Insert, ["message", "user_id"]);
        assert_eq!(issues, vec![]);
    }

    #[test]
    fn test_insert_missing_and_unknown() {
        let issues = check_record(&reminders(), Payload::Insert, ["message", "remind_at"]);
        assert_eq!(
            issues,
            vec![
                RecordIssue::UnknownField {
                    table: "public.reminders".to_string(),
                    field: "remind_at".to_string(),
                },
                RecordIssue::MissingField {
                    table: "public.reminders".to_string(),
                    field: "user_id".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_update() {
        assert_eq!(check_record(&reminders(), Payload::Update, ["message"]), vec![]);
        assert_eq!(
            check_record(&reminders(), Payload::Update, [] as [&str; 0]).pop().map(|i| i.to_string()),
            Some("public.reminders: update sets no fields".to_string())
        );
    }
}
