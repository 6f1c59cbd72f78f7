use facet::Facet;

/// Tutoring conversations, keyed by a client-generated text id.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub conversation_number: i64,
    #[facet(tutordb::pk)]
    pub id: String,
    pub timestamp: Option<String>,
    pub title: Option<String>,
    #[facet(tutordb::fk = "users.user_id")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub conversation_number: i64,
    pub id: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub title: Option<Option<String>>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub conversation_number: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub title: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<String>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "conversations";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
