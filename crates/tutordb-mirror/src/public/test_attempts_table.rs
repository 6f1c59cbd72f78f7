use facet::Facet;
use tutordb::Json;

/// Attempts at a practice test. `responses` holds the answers as JSON.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    #[facet(tutordb::pk, tutordb::auto)]
    pub attempt_id: i64,
    pub created_at: Option<String>,
    pub responses: Json,
    pub status: String,
    #[facet(tutordb::fk = "practice_tests_table.id")]
    pub test_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub attempt_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    pub responses: Json,
    pub status: String,
    pub test_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub attempt_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub responses: Option<Json>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub status: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub test_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "test_attempts_table";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
