use facet::Facet;
use tutordb::{Catalog, Error, PgType, Returns};

mod library {
    use facet::Facet;

    pub mod authors {
        use facet::Facet;

        #[derive(Debug, Clone, PartialEq, Facet)]
        #[facet(derive(tutordb::Table))]
        pub struct Row {
            #[facet(tutordb::pk, tutordb::auto)]
            pub id: i64,
            pub name: String,
            pub bio: Option<String>,
        }

        #[derive(Debug, Clone, PartialEq, Facet)]
        pub struct Insert {
            pub id: Option<i64>,
            pub name: String,
            pub bio: Option<Option<String>>,
        }

        #[derive(Debug, Clone, PartialEq, Default, Facet)]
        pub struct Update {
            pub id: Option<i64>,
            pub name: Option<String>,
            pub bio: Option<Option<String>>,
        }

        impl tutordb::RelationShape for Row {
            const SCHEMA: &'static str = "library";
            const NAME: &'static str = "authors";
        }

        impl tutordb::TableShape for Row {
            type Insert = Insert;
            type Update = Update;
        }
    }

    pub mod books {
        use facet::Facet;
        use tutordb::Json;

        #[derive(Debug, Clone, PartialEq, Facet)]
        #[facet(derive(tutordb::Table))]
        pub struct Row {
            #[facet(tutordb::fk = "authors.id")]
            pub author_id: i64,
            #[facet(tutordb::pk, tutordb::auto)]
            pub id: i64,
            pub metadata: Option<Json>,
            #[facet(tutordb::default = "now()")]
            pub published: String,
            #[facet(rename = "type", tutordb::column = "type")]
            pub ty: String,
        }

        #[derive(Debug, Clone, PartialEq, Facet)]
        pub struct Insert {
            pub author_id: i64,
            pub id: Option<i64>,
            pub metadata: Option<Option<Json>>,
            pub published: Option<String>,
            #[facet(rename = "type", tutordb::column = "type")]
            pub ty: String,
        }

        #[derive(Debug, Clone, PartialEq, Default, Facet)]
        pub struct Update {
            pub author_id: Option<i64>,
            pub id: Option<i64>,
            pub metadata: Option<Option<Json>>,
            pub published: Option<String>,
            #[facet(rename = "type", tutordb::column = "type")]
            pub ty: Option<String>,
        }

        impl tutordb::RelationShape for Row {
            const SCHEMA: &'static str = "library";
            const NAME: &'static str = "books";
        }

        impl tutordb::TableShape for Row {
            type Insert = Insert;
            type Update = Update;
        }
    }

    pub mod popular_books {
        use facet::Facet;

        #[derive(Debug, Clone, PartialEq, Facet)]
        pub struct Row {
            pub book_id: i64,
            pub loans: i64,
        }

        impl tutordb::RelationShape for Row {
            const SCHEMA: &'static str = "library";
            const NAME: &'static str = "popular_books";
        }

        impl tutordb::ViewShape for Row {}

        tutordb::inventory::submit!(tutordb::ViewDef::new::<Row>());
    }

    pub mod search_books {
        use facet::Facet;

        #[derive(Debug, Clone, PartialEq, Facet)]
        pub struct Args {
            pub query: String,
            pub limit: Option<i32>,
        }

        #[derive(Debug, Clone, PartialEq, Facet)]
        pub struct Row {
            pub id: i64,
            pub rank: f64,
        }

        impl tutordb::FunctionShape for Args {
            const SCHEMA: &'static str = "library";
            const NAME: &'static str = "search_books";
            type Returns = Vec<Row>;
        }

        tutordb::inventory::submit!(tutordb::FunctionDef::new::<Args>());
    }

    #[derive(Debug, Clone, Copy, PartialEq, Facet)]
    #[repr(u8)]
    pub enum Genre {
        Fiction,
        Poetry,
    }

    impl tutordb::EnumShape for Genre {
        const SCHEMA: &'static str = "library";
        const NAME: &'static str = "genre";
    }

    tutordb::inventory::submit!(tutordb::EnumDef::new::<Genre>());

    #[derive(Debug, Clone, PartialEq, Facet)]
    pub struct Price {
        pub amount: f64,
        pub currency: Option<String>,
    }

    impl tutordb::CompositeTypeShape for Price {
        const SCHEMA: &'static str = "library";
        const NAME: &'static str = "price";
    }

    tutordb::inventory::submit!(tutordb::CompositeTypeDef::new::<Price>());
}

/// A table in the default schema.
#[derive(Debug, Clone, PartialEq, Facet)]
#[facet(derive(tutordb::Table))]
struct Reminder {
    #[facet(tutordb::pk, tutordb::auto)]
    id: i64,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Facet)]
struct ReminderInsert {
    id: Option<i64>,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Facet)]
struct ReminderUpdate {
    id: Option<i64>,
    message: Option<String>,
}

impl tutordb::RelationShape for Reminder {
    const SCHEMA: &'static str = "public";
    const NAME: &'static str = "reminders";
}

impl tutordb::TableShape for Reminder {
    type Insert = ReminderInsert;
    type Update = ReminderUpdate;
}

#[test]
fn test_collect_groups_and_sorts() {
    let catalog = Catalog::collect().unwrap();
    let schemas: Vec<_> = catalog.schemas.keys().map(|s| s.as_str()).collect();
    assert_eq!(schemas, ["library", "public"]);

    let library = catalog.schema("library").unwrap();
    let tables: Vec<_> = library.tables.keys().map(|s| s.as_str()).collect();
    assert_eq!(tables, ["authors", "books"]);
    assert!(library.views.contains_key("popular_books"));
    assert!(library.functions.contains_key("search_books"));
}

#[test]
fn test_table_shapes() {
    let catalog = Catalog::collect().unwrap();
    let books = catalog.table_in("library", "books").unwrap();

    let ty = books.column("type").unwrap();
    assert_eq!(ty.pg_type, PgType::Text);
    assert!(!ty.nullable);

    let published = books.column("published").unwrap();
    assert!(published.has_default);
    assert_eq!(published.default.as_deref(), Some("now()"));
    assert!(published.optional_on_insert());

    let metadata = books.column("metadata").unwrap();
    assert!(metadata.nullable);
    assert_eq!(metadata.pg_type, PgType::Jsonb);

    let required: Vec<_> = books.required_on_insert().map(|c| c.name.as_str()).collect();
    assert_eq!(required, ["author_id", "type"]);

    assert!(books.update.iter().all(|f| f.options >= 1));
}

#[test]
fn test_relationships() {
    let catalog = Catalog::collect().unwrap();
    let books = catalog.table_of::<library::books::Row>().unwrap();
    assert_eq!(books.relationships.len(), 1);

    let rel = &books.relationships[0];
    assert_eq!(rel.name, "books_author_id_fkey");
    assert_eq!(rel.columns, ["author_id"]);
    assert_eq!(rel.referenced_relation, "authors");
    assert_eq!(rel.referenced_columns, ["id"]);
    assert!(!rel.is_one_to_one);
}

#[test]
fn test_functions_views_enums_composites() {
    let catalog = Catalog::collect().unwrap();

    let search = catalog
        .function_of::<library::search_books::Args>()
        .unwrap();
    assert_eq!(search.args.len(), 2);
    assert!(search.args[1].optional);
    assert!(matches!(&search.returns, Returns::SetOf(columns) if columns.len() == 2));

    let view = catalog.view_in("library", "popular_books").unwrap();
    assert_eq!(view.columns.len(), 2);

    let genre = catalog.enum_type_in("library", "genre").unwrap();
    assert_eq!(genre.variants, ["Fiction", "Poetry"]);

    let price = catalog.composite_type_in("library", "price").unwrap();
    assert!(price.attributes[1].nullable);
}

#[test]
fn test_default_schema_lookup() {
    let catalog = Catalog::collect().unwrap();
    let reminders = catalog.table("reminders").unwrap();
    assert_eq!(reminders.schema, "public");
    assert!(!reminders.columns.is_empty());
}

#[test]
fn test_unknown_names_fail() {
    let catalog = Catalog::collect().unwrap();

    let err = catalog.table("books").unwrap_err();
    assert!(matches!(err, Error::UnknownTable { .. }));
    assert_eq!(err.to_string(), "unknown table `public.books`");

    assert!(matches!(
        catalog.schema("graphql_public"),
        Err(Error::UnknownSchema(_))
    ));
    assert!(matches!(
        catalog.function("search_books"),
        Err(Error::UnknownFunction { .. })
    ));
    assert!(matches!(
        catalog.view("popular_books"),
        Err(Error::UnknownView { .. })
    ));
    assert!(matches!(
        catalog.enum_type("genre"),
        Err(Error::UnknownEnum { .. })
    ));
    assert!(matches!(
        catalog.composite_type("price"),
        Err(Error::UnknownCompositeType { .. })
    ));

    assert!(catalog.require_tables("library", ["authors", "books"]).is_ok());
    assert!(catalog.require_tables("library", ["authors", "loans"]).is_err());
}

#[test]
fn test_duplicate_registration_rejected() {
    let catalog = Catalog::collect().unwrap();
    let mut copy = catalog.clone();
    let authors = catalog.table_in("library", "authors").unwrap().clone();
    let err = copy.insert_table(authors).unwrap_err();
    assert_eq!(err.to_string(), "duplicate table `library.authors`");
}

#[test]
fn test_render_is_stable() {
    let first = tutordb::render::render_catalog(&Catalog::collect().unwrap());
    let second = tutordb::render::render_catalog(&Catalog::collect().unwrap());
    assert_eq!(first, second);

    assert!(first.contains("      Insert: {\n        author_id: number\n        id?: number\n        metadata?: Json | null\n        published?: string\n        type: string\n      }\n"));
    assert!(first.contains("        books_author_id_fkey: (author_id) -> authors(id)\n"));
    assert!(first.contains("    genre: \"Fiction\" | \"Poetry\"\n"));
}

#[test]
fn test_render_marks_legacy_tables() {
    let catalog = Catalog::collect().unwrap();
    let options = tutordb::render::RenderOptions {
        legacy_tables: vec!["reminders".to_string(), "library.authors".to_string()],
        default_schema: None,
    };
    let rendered = tutordb::render::render_catalog_with(&catalog, &options);
    assert!(rendered.contains("    reminders: { // legacy\n"));
    assert!(rendered.contains("    authors: { // legacy\n"));
    assert!(rendered.contains("    books: {\n"));
}

#[test]
fn test_render_schema_snapshot() {
    let catalog = Catalog::collect().unwrap();
    let public = catalog.schema("public").unwrap();
    let rendered = tutordb::render::render_schema(public, &Default::default());
    insta::assert_snapshot!(rendered, @r"
    public: {
      Tables: {
        reminders: {
          Row: {
            id: number
            message: string
          }
          Insert: {
            id?: number
            message: string
          }
          Update: {
            id?: number
            message?: string
          }
          Relationships: []
        }
      }
      Views: {}
      Functions: {}
      Enums: {}
      CompositeTypes: {}
    }
    ");
}

#[test]
fn test_table_info() {
    let catalog = Catalog::collect().unwrap();
    let books = catalog.table_in("library", "books").unwrap();
    let info = tutordb::table_info(books);

    assert_eq!(info.len(), 5);
    assert_eq!(info[2].column_name, "metadata");
    assert_eq!(info[2].data_type, "jsonb");
    assert!(info[2].is_nullable);
    assert_eq!(info[3].column_default, "now()");
    assert_eq!(info[4].column_default, "");
}

#[test]
fn test_typed_aliases() {
    let insert: tutordb::TablesInsert<Reminder> = ReminderInsert {
        id: None,
        message: "study".to_string(),
    };
    let update: tutordb::TablesUpdate<Reminder> = Default::default();
    let row: tutordb::Tables<Reminder> = Reminder {
        id: 1,
        message: insert.message.clone(),
    };
    assert_eq!(update.message, None);
    assert_eq!(row.message, "study");

    let args: tutordb::FunctionArgs<library::search_books::Args> = library::search_books::Args {
        query: "poems".to_string(),
        limit: None,
    };
    let hits: tutordb::FunctionReturns<library::search_books::Args> = vec![];
    assert!(hits.is_empty());
    assert_eq!(args.limit, None);

    let genre: tutordb::Enums<library::Genre> = library::Genre::Poetry;
    assert_eq!(genre, library::Genre::Poetry);
}
