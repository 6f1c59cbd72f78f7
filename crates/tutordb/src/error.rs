use thiserror::Error;
use tutordb_schema::SchemaError;

use crate::verify::Violation;

#[derive(Debug, Error)]
pub enum Error {
    #[error("reflection failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("duplicate {kind} `{schema}.{name}`")]
    Duplicate {
        kind: &'static str,
        schema: String,
        name: String,
    },

    #[error("unknown schema `{0}`")]
    UnknownSchema(String),

    #[error("unknown table `{schema}.{name}`")]
    UnknownTable { schema: String, name: String },

    #[error("unknown view `{schema}.{name}`")]
    UnknownView { schema: String, name: String },

    #[error("unknown function `{schema}.{name}`")]
    UnknownFunction { schema: String, name: String },

    #[error("unknown enum `{schema}.{name}`")]
    UnknownEnum { schema: String, name: String },

    #[error("unknown composite type `{schema}.{name}`")]
    UnknownCompositeType { schema: String, name: String },

    #[error("catalog failed verification with {} violation(s)", .0.len())]
    Invalid(Vec<Violation>),
}
