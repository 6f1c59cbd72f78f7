use super::*;
use facet_testhelpers::test;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.default_schema(), "public");
    assert_eq!(config.snapshot(), "schema.snapshot");
    assert!(config.legacy_tables.is_empty());
}

#[test]
fn test_parse_full() {
    let source = "default_schema public\nsnapshot db/schema.snapshot\nlegacy_tables (pt_backup public.qb_back_up)";
    let config: Config = facet_styx::from_str(source).unwrap();
    assert_eq!(config.snapshot(), "db/schema.snapshot");
    assert_eq!(
        config.legacy_tables,
        vec!["pt_backup", "public.qb_back_up"]
    );
}

#[test]
fn test_parse_empty() {
    let config: Config = facet_styx::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_legacy_tables_in() {
    let config = Config {
        default_schema: None,
        snapshot: None,
        legacy_tables: vec![
            "pt_backup".to_string(),
            "archive.old_answers".to_string(),
            "public.qb_back_up".to_string(),
        ],
    };
    assert_eq!(
        config.legacy_tables_in("public").collect::<Vec<_>>(),
        vec!["pt_backup", "qb_back_up"]
    );
    assert_eq!(
        config.legacy_tables_in("archive").collect::<Vec<_>>(),
        vec!["old_answers"]
    );
}
