use facet::Facet;

#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub content: String,
    pub created_at: Option<String>,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub content: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub content: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "user_messages";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
