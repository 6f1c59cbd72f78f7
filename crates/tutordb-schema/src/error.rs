use thiserror::Error;

/// Errors turning a registered shape into catalog metadata.
///
/// `relation` is always the qualified `schema.name` of the table, view,
/// function, enum or composite type being reflected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{relation}: shape `{shape}` is not a struct")]
    NotAStruct { relation: String, shape: String },

    #[error("{relation}: shape `{shape}` is not an enum")]
    NotAnEnum { relation: String, shape: String },

    #[error("{relation}.{field}: unsupported type `{ty}`")]
    UnsupportedType {
        relation: String,
        field: String,
        ty: String,
    },

    #[error(
        "{relation}.{field}: invalid foreign key reference '{reference}' (expected 'table.column' or 'table(column)')"
    )]
    InvalidReference {
        relation: String,
        field: String,
        reference: String,
    },

    #[error("{relation}.{field}: a column type carries at most one Option layer, found {depth}")]
    NestedOption {
        relation: String,
        field: String,
        depth: u8,
    },
}
