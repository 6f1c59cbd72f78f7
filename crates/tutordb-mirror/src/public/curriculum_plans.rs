use facet::Facet;
use tutordb::Json;

/// Study plans. `subjects` holds the plan body as JSON.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub created_at: Option<String>,
    pub description: Option<String>,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub plan_name: String,
    pub status: Option<String>,
    pub subjects: Json,
    #[facet(rename = "type", tutordb::column = "type", tutordb::default)]
    pub ty: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub description: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    pub plan_name: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub status: Option<Option<String>>,
    pub subjects: Json,
    #[facet(rename = "type", tutordb::column = "type", default, skip_serializing_if = Option::is_none)]
    pub ty: Option<String>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub description: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub plan_name: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub status: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub subjects: Option<Json>,
    #[facet(rename = "type", tutordb::column = "type", default, skip_serializing_if = Option::is_none)]
    pub ty: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "curriculum_plans";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
