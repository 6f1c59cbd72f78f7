use facet::Facet;

/// Run a DDL statement with elevated privileges.
///
/// `tutordb alter` builds the statement and prints this payload.
#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Args {
    pub ddl_command: String,
}

impl tutordb::FunctionShape for Args {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "execute_ddl";
    type Returns = ();
}

tutordb::inventory::submit!(tutordb::FunctionDef::new::<Args>());
