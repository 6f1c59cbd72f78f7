use facet::Facet;

/// Messages within a conversation.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub content: Option<String>,
    #[facet(tutordb::fk = "conversations.id")]
    pub conversation_id: Option<String>,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub role: Option<String>,
    pub timestamp: Option<String>,
    #[facet(tutordb::fk = "users.user_id")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub content: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub conversation_id: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub role: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub content: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub conversation_id: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub role: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<String>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "messages";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
