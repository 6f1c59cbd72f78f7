use facet::Facet;

#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub feature_name: String,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub last_used: Option<String>,
    pub usage_count: i64,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub feature_name: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub last_used: Option<Option<String>>,
    pub usage_count: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub feature_name: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub last_used: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub usage_count: Option<i64>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "usage_analytics";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
