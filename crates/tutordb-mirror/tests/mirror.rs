use facet_testhelpers::test;
use tutordb::render::{RenderOptions, render_catalog_with, render_schema};
use tutordb::{Catalog, Error, PgType, Returns, Tables, TablesInsert, TablesUpdate};
use tutordb_mirror::{answers, execute_ddl, graphql_public, users};

fn catalog() -> Catalog {
    tutordb_mirror::ensure_linked();
    Catalog::collect().unwrap()
}

#[test]
fn test_collect_succeeds() {
    let catalog = catalog();
    assert_eq!(
        catalog.schemas.keys().collect::<Vec<_>>(),
        vec!["graphql_public", "public"]
    );

    let public = catalog.schema("public").unwrap();
    assert_eq!(public.tables.len(), 27);
    assert_eq!(
        public.functions.keys().collect::<Vec<_>>(),
        vec!["execute_ddl", "get_table_info"]
    );
    assert!(public.views.is_empty());
    assert!(public.enums.is_empty());
    assert!(public.composite_types.is_empty());

    let graphql = catalog.schema("graphql_public").unwrap();
    assert!(graphql.tables.is_empty());
    assert_eq!(graphql.functions.keys().collect::<Vec<_>>(), vec!["graphql"]);
}

#[test]
fn test_update_shapes_cover_every_column() {
    for table in catalog().tables() {
        let columns: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
        let update: Vec<_> = table.update.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(columns, update, "{}", table.name);

        for (column, field) in table.columns.iter().zip(&table.update) {
            assert!(field.is_optional_for(column), "{}.{}", table.name, column.name);
        }
    }
}

#[test]
fn test_mandatory_columns_stay_mandatory_on_insert() {
    for table in catalog().tables() {
        for column in &table.columns {
            let field = table.insert_field(&column.name).unwrap();
            if column.optional_on_insert() {
                assert!(field.is_optional_for(column), "{}.{}", table.name, column.name);
            } else {
                assert!(field.is_required_for(column), "{}.{}", table.name, column.name);
            }
        }
    }
}

#[test]
fn test_answers() {
    let catalog = catalog();
    let table = catalog.table("answers").unwrap();

    let required: Vec<_> = table.required_on_insert().map(|c| c.name.as_str()).collect();
    assert_eq!(
        required,
        vec!["answer", "correct", "question_id", "quiz_id", "user_id"]
    );

    let optional: Vec<_> = table
        .columns
        .iter()
        .filter(|c| c.optional_on_insert())
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(optional, vec!["id", "timestamp"]);

    assert_eq!(table.update.len(), 7);
    assert!(table.columns.iter().all(|c| !c.nullable));
    assert_eq!(table.column("correct").unwrap().pg_type, PgType::Boolean);
    let pk: Vec<_> = table.primary_key().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(pk, vec!["id"]);

    let insert: TablesInsert<answers::Row> = answers::Insert {
        answer: "x = 4".to_string(),
        correct: true,
        id: None,
        question_id: 12,
        quiz_id: 3,
        timestamp: None,
        user_id: 7,
    };
    let update: TablesUpdate<answers::Row> = answers::Update {
        correct: Some(false),
        ..Default::default()
    };
    assert_eq!(insert.question_id, 12);
    assert!(update.answer.is_none());

    let row: Tables<answers::Row> = answers::Row {
        answer: insert.answer,
        correct: insert.correct,
        id: 1,
        question_id: insert.question_id,
        quiz_id: insert.quiz_id,
        timestamp: "2024-05-01T10:00:00Z".to_string(),
        user_id: insert.user_id,
    };
    assert_eq!(row.id, 1);
}

#[test]
fn test_type_column_is_stored_as_type() {
    let catalog = catalog();
    let plans = catalog.table("curriculum_plans").unwrap();
    let column = plans.column("type").unwrap();
    assert!(!column.nullable);
    assert!(column.has_default);
    assert!(plans.insert_field("type").unwrap().is_optional_for(column));

    let practice = catalog.table("practice_tests_table").unwrap();
    assert!(practice.column("type").unwrap().nullable);
}

#[test]
fn test_json_columns() {
    let catalog = catalog();
    let json_columns: Vec<_> = catalog
        .tables()
        .flat_map(|t| {
            t.columns
                .iter()
                .filter(|c| c.pg_type == PgType::Jsonb)
                .map(move |c| format!("{}.{}", t.name, c.name))
        })
        .collect();
    assert_eq!(
        json_columns,
        vec![
            "chat_history.messages",
            "curriculum_plans.subjects",
            "practice_tests_table.choices",
            "practice_tests_table.tabular_data",
            "pt_backup.choices",
            "pt_backup.tabular_data",
            "qb_back_up.choices",
            "qb_back_up.tabular_data",
            "question_bank_table.choices",
            "question_bank_table.tabular_data",
            "session_summaries.highlights",
            "test_attempts_table.responses",
            "users.additional_info",
        ]
    );
}

#[test]
fn test_relationships() {
    let catalog = catalog();
    let relationships: Vec<_> = catalog
        .tables()
        .flat_map(|t| &t.relationships)
        .map(|r| {
            assert!(!r.is_one_to_one, "{}", r.name);
            format!(
                "{}: ({}) -> {}({})",
                r.name,
                r.columns.join(", "),
                r.referenced_relation,
                r.referenced_columns.join(", ")
            )
        })
        .collect();

    assert_eq!(
        relationships,
        vec![
            "answers_question_id_fkey: (question_id) -> question_bank_table(id)",
            "conversations_user_id_fkey: (user_id) -> users(user_id)",
            "messages_conversation_id_fkey: (conversation_id) -> conversations(id)",
            "messages_user_id_fkey: (user_id) -> users(user_id)",
            "test_attempts_table_test_id_fkey: (test_id) -> practice_tests_table(id)",
            "user_practice_tests_practice_test_id_fkey: (practice_test_id) -> practice_tests_table(id)",
            "user_question_progress_question_type_id_fkey: (question_type_id) -> question_types(question_type_id)",
            "user_question_progress_user_id_fkey: (user_id) -> users(user_id)",
        ]
    );
}

#[test]
fn test_backup_tables_have_no_key() {
    let catalog = catalog();
    for name in ["pt_backup", "qb_back_up"] {
        let table = catalog.table(name).unwrap();
        assert!(table.primary_key().is_empty(), "{name}");
        assert!(table.column("id").unwrap().nullable, "{name}");
        assert!(table.required_on_insert().next().is_none(), "{name}");
    }
}

#[test]
fn test_functions() {
    let catalog = catalog();

    let ddl = catalog.function("execute_ddl").unwrap();
    assert_eq!(ddl.returns, Returns::Void);
    assert_eq!(ddl.args.len(), 1);
    assert_eq!(ddl.args[0].name, "ddl_command");
    assert!(!ddl.args[0].optional);

    let info = catalog.function("get_table_info").unwrap();
    assert_eq!(info.args[0].name, "p_table_name");
    let Returns::SetOf(columns) = &info.returns else {
        panic!("expected a set-returning function, got {:?}", info.returns);
    };
    let columns: Vec<_> = columns
        .iter()
        .map(|c| (c.name.as_str(), c.pg_type))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("column_name", PgType::Text),
            ("data_type", PgType::Text),
            ("is_nullable", PgType::Boolean),
            ("column_default", PgType::Text),
        ]
    );

    let graphql = catalog.function_in("graphql_public", "graphql").unwrap();
    assert_eq!(graphql.returns, Returns::Scalar(PgType::Jsonb));
    assert!(graphql.args.iter().all(|a| a.optional));
    let _: tutordb::FunctionArgs<graphql_public::graphql::Args> = Default::default();
}

#[test]
fn test_unknown_lookups_fail() {
    let catalog = catalog();
    assert!(matches!(
        catalog.table("grades"),
        Err(Error::UnknownTable { .. })
    ));
    assert!(matches!(
        catalog.function("graphql"),
        Err(Error::UnknownFunction { .. })
    ));
    assert!(matches!(
        catalog.table_in("auth", "users"),
        Err(Error::UnknownSchema(_))
    ));
    assert!(matches!(
        catalog.enum_type("mood"),
        Err(Error::UnknownEnum { .. })
    ));
    assert!(catalog.require_tables("public", ["users", "pt_backup"]).is_ok());
    assert!(catalog.require_tables("public", ["users", "pt_backups"]).is_err());
}

#[test]
fn test_render_is_idempotent() {
    let options = RenderOptions {
        legacy_tables: vec!["pt_backup".to_string(), "qb_back_up".to_string()],
        default_schema: None,
    };
    let first = render_catalog_with(&catalog(), &options);
    let second = render_catalog_with(&catalog(), &options);
    assert_eq!(first, second);

    assert!(first.contains("    pt_backup: { // legacy\n"));
    assert!(first.contains("    qb_back_up: { // legacy\n"));
    assert!(first.contains("    question_bank_table: {\n"));
    assert!(first.contains(
        "      Insert: {\n        answer: string\n        correct: boolean\n        id?: number\n        question_id: number\n        quiz_id: number\n        timestamp?: string\n        user_id: number\n      }\n"
    ));
}

#[test]
fn test_render_graphql_public() {
    let catalog = catalog();
    let rendered = render_schema(
        catalog.schema("graphql_public").unwrap(),
        &RenderOptions::default(),
    );
    insta::assert_snapshot!(rendered, @r"
    graphql_public: {
      Tables: {}
      Views: {}
      Functions: {
        graphql: {
          Args: {
            operationName?: string
            query?: string
            variables?: Json
            extensions?: Json
          }
          Returns: Json
        }
      }
      Enums: {}
      CompositeTypes: {}
    }
    ");
}

#[test]
fn test_table_info_for_users() {
    let catalog = catalog();
    let rows = tutordb::table_info(catalog.table("users").unwrap());
    assert_eq!(rows.len(), 13);

    let user_id = rows.iter().find(|r| r.column_name == "user_id").unwrap();
    assert_eq!(user_id.data_type, "text");
    assert!(!user_id.is_nullable);
    assert_eq!(user_id.column_default, "");

    let info = rows.iter().find(|r| r.column_name == "additional_info").unwrap();
    assert_eq!(info.data_type, "jsonb");
    assert!(info.is_nullable);
}

#[test]
fn test_alter_statement_payload() {
    let catalog = catalog();
    let table = catalog.table("homework_table").unwrap();
    assert!(table.column("subject").is_none());

    let action = tutordb_sql::AlterAction::from_parts(
        "add".parse().unwrap(),
        "subject",
        Some("text".to_string()),
        false,
        Some("'math'".to_string()),
    )
    .unwrap();
    let statement = tutordb_sql::AlterTable::new(table.name.clone(), action);
    insta::assert_snapshot!(
        statement.to_sql(),
        @r#"ALTER TABLE "homework_table" ADD COLUMN "subject" text NOT NULL DEFAULT 'math'"#
    );

    let payload: execute_ddl::Args =
        facet_json::from_str(r#"{"ddl_command":"ALTER TABLE \"homework_table\" DROP COLUMN \"details\""}"#)
            .unwrap();
    assert_eq!(payload.ddl_command, r#"ALTER TABLE "homework_table" DROP COLUMN "details""#);
}

#[test]
fn test_update_payload_carries_only_changed_fields() {
    let update = answers::Update {
        correct: Some(false),
        ..Default::default()
    };
    let json = facet_json::to_string(&update).unwrap();
    assert_eq!(json, r#"{"correct":false}"#);

    let decoded: answers::Update = facet_json::from_str(&json).unwrap();
    assert_eq!(decoded, update);
}

#[test]
fn test_insert_payload_null_versus_omitted() {
    let insert = users::Insert {
        access_token: None,
        additional_info: None,
        created_at: None,
        email: "ada@example.com".to_string(),
        full_name: Some(None),
        password_hash: "hash".to_string(),
        profile_picture: None,
        role: Some(Some("student".to_string())),
        status: None,
        token_type: None,
        updated_at: None,
        user_id: "u-1".to_string(),
        username: "ada".to_string(),
    };
    assert_eq!(
        facet_json::to_string(&insert).unwrap(),
        r#"{"email":"ada@example.com","full_name":null,"password_hash":"hash","role":"student","user_id":"u-1","username":"ada"}"#
    );

    let decoded: users::Insert = facet_json::from_str(
        r#"{"email":"ada@example.com","password_hash":"hash","user_id":"u-1","username":"ada"}"#,
    )
    .unwrap();
    assert_eq!(decoded.full_name, None);
    assert_eq!(decoded.role, None);
    assert_eq!(decoded.email, "ada@example.com");
}
