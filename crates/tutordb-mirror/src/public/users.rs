use facet::Facet;
use tutordb::Json;

/// Application users, keyed by the auth provider's text id.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
pub struct Row {
    pub access_token: Option<String>,
    pub additional_info: Option<Json>,
    pub created_at: Option<String>,
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub role: Option<String>,
    pub status: Option<bool>,
    pub token_type: Option<String>,
    pub updated_at: Option<String>,
    #[facet(tutordb::pk)]
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Facet)]
pub struct Insert {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub access_token: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub additional_info: Option<Option<Json>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    pub email: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub full_name: Option<Option<String>>,
    pub password_hash: String,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub profile_picture: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub role: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub status: Option<Option<bool>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub token_type: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub updated_at: Option<Option<String>>,
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
pub struct Update {
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub access_token: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub additional_info: Option<Option<Json>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub created_at: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub email: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub full_name: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub password_hash: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub profile_picture: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub role: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub status: Option<Option<bool>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub token_type: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub updated_at: Option<Option<String>>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub user_id: Option<String>,
    #[facet(default, skip_serializing_if = Option::is_none)]
    pub username: Option<String>,
}

impl tutordb::RelationShape for Row {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "users";
}

impl tutordb::TableShape for Row {
    type Insert = Insert;
    type Update = Update;
}
