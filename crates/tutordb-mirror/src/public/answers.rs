use facet::Facet;

/// One submitted answer to a question-bank question.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub answer: String,
    pub correct: bool,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    #[facet(tutordb::fk = "question_bank_table.id")]
    pub question_id: i64,
    pub quiz_id: i64,
    #[facet(tutordb::default)]
    pub timestamp: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub answer: String,
    pub correct: bool,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    pub question_id: i64,
    pub quiz_id: i64,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<String>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub answer: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub correct: Option<bool>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub quiz_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "answers";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
