use facet::Facet;

#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub quiz_id: i64,
    pub score: f64,
    pub session_id: Option<String>,
    pub timestamp: Option<String>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    pub quiz_id: i64,
    pub score: f64,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub session_id: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub quiz_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub score: Option<f64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub session_id: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "user_progress";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
