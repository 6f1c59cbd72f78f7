//! The `graphql_public` schema: the GraphQL gateway function and nothing else.

/// `graphql_public.graphql(operationName, query, variables, extensions) -> jsonb`
pub mod graphql {
    use facet::Facet;
    use tutordb::Json;

    #[derive(Debug, Clone, PartialEq, Default, Facet)]
    pub struct Args {
        #[facet(
            rename = "operationName",
            tutordb::column = "operationName",
            default,
            skip_serializing_if = Option::is_none
        )]
        pub operation_name: Option<String>,
        #[facet(default, skip_serializing_if = Option::is_none)]
        pub query: Option<String>,
        #[facet(default, skip_serializing_if = Option::is_none)]
        pub variables: Option<Json>,
        #[facet(default, skip_serializing_if = Option::is_none)]
        pub extensions: Option<Json>,
    }

    impl tutordb::FunctionShape for Args {
        const SCHEMA: &'static str = "graphql_public";
        const NAME: &'static str = "graphql";
        type Returns = Json;
    }

    tutordb::inventory::submit!(tutordb::FunctionDef::new::<Args>());
}
