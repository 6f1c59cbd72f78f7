use facet::Facet;

/// Per-user progress on each question type.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub progress: f64,
    #[facet(tutordb::fk = "question_types.question_type_id")]
    pub question_type_id: i64,
    #[facet(tutordb::fk = "users.user_id")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub progress: f64,
    pub question_type_id: i64,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub progress: Option<f64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_type_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<String>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "user_question_progress";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
