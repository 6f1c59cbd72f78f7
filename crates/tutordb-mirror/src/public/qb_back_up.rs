use facet::Facet;
use tutordb::Json;

/// Backup copy of `question_bank_table`. Has no primary key.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub answer_explanation: Option<String>,
    pub choices: Option<Json>,
    pub correct_answer: Option<String>,
    pub equation: Option<String>,
    pub figure_description: Option<String>,
    pub id: Option<i64>,
    pub image: Option<String>,
    pub question_content: Option<String>,
    pub question_number_in_subtopic: Option<i64>,
    pub sub_topic: Option<String>,
    pub svg: Option<String>,
    pub tabular_data: Option<Json>,
    pub topic: Option<String>,
    #[facet(rename = "type", tutordb::column = "type")]
    pub ty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub answer_explanation: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub choices: Option<Option<Json>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub correct_answer: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub equation: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub figure_description: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<Option<i64>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub image: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_content: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_number_in_subtopic: Option<Option<i64>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub sub_topic: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub svg: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub tabular_data: Option<Option<Json>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub topic: Option<Option<String>>,
    #[facet(rename = "type", tutordb::column = "type", default, skip_serializing_if = Option::is_none)]
    pub ty: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub answer_explanation: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub choices: Option<Option<Json>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub correct_answer: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub equation: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub figure_description: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<Option<i64>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub image: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_content: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub question_number_in_subtopic: Option<Option<i64>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub sub_topic: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub svg: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub tabular_data: Option<Option<Json>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub topic: Option<Option<String>>,
    #[facet(rename = "type", tutordb::column = "type", default, skip_serializing_if = Option::is_none)]
    pub ty: Option<Option<String>>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "qb_back_up";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
