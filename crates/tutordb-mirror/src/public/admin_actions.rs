use facet::Facet;

/// Actions taken from the admin console.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub action_type: String,
    pub details: Option<String>,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub timestamp: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub action_type: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub details: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<Option<i64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub action_type: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub details: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub timestamp: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<Option<i64>>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "admin_actions";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
