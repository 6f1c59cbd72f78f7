use facet::Facet;

/// Aggregated scores per subject.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub average_score: f64,
    pub completion_rate: f64,
    pub difficulty_level: Option<String>,
    #[facet(tutordb::pk, tutordb::auto)]
    pub id: i64,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    pub average_score: f64,
    pub completion_rate: f64,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub difficulty_level: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub average_score: Option<f64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub completion_rate: Option<f64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub difficulty_level: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub id: Option<i64>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub subject: Option<String>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "performance_analytics";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
