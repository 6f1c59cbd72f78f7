use facet::Facet;

/// One row per column of `p_table_name`, in column order.
pub use tutordb::ColumnInfo as Row;

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Args {
    pub p_table_name: String,
}

impl tutordb::FunctionShape for Args {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "get_table_info";
    type Returns = Vec<Row>;
}

tutordb::inventory::submit!(tutordb::FunctionDef::new::<Args>());
