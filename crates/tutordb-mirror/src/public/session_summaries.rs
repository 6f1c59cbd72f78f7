use facet::Facet;
use tutordb::Json;

#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub chat_id: i64,
    pub highlights: Json,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub chat_id: i64,
    pub highlights: Json,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub chat_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub highlights: Option<Json>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "session_summaries";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
