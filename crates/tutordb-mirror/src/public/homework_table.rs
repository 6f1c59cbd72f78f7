use facet::Facet;

#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub assignment: String,
    pub details: Option<String>,
    pub due_date: Option<String>,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub assignment: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub details: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub due_date: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub assignment: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub details: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub due_date: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "homework_table";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
