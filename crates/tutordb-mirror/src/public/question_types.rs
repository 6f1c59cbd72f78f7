use facet::Facet;

#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    #[facet(tutordb::pk, tutordb::auto)]
    pub question_type_id: i64,
    pub question_type_name: String,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_type_id: Option<i64>,
    pub question_type_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_type_id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_type_name: Option<String>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "question_types";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
