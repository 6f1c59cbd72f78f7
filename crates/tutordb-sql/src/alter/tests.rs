use super::*;

#[test]
fn test_add_column_not_null_with_default() {
    let action = AlterAction::from_parts(
        AlterOperation::Add,
        "difficulty",
        Some("TEXT".to_string()),
        false,
        Some("'medium'".to_string()),
    )
    .unwrap();
    let stmt = AlterTable::new("question_bank_table", action);
    insta::assert_snapshot!(
        stmt.to_sql(),
        @r#"ALTER TABLE "question_bank_table" ADD COLUMN "difficulty" TEXT NOT NULL DEFAULT 'medium'"#
    );
}

#[test]
fn test_add_column_nullable() {
    let action = AlterAction::from_parts(
        AlterOperation::Add,
        "hint",
        Some("TEXT".to_string()),
        true,
        None,
    )
    .unwrap();
    let stmt = AlterTable::new("answers", action);
    assert_eq!(
        stmt.to_sql(),
        r#"ALTER TABLE "answers" ADD COLUMN "hint" TEXT"#
    );
}

#[test]
fn test_drop_column_ignores_type() {
    let action = AlterAction::from_parts(
        AlterOperation::Drop,
        "svg",
        Some("TEXT".to_string()),
        false,
        None,
    )
    .unwrap();
    let stmt = AlterTable::new("pt_backup", action);
    insta::assert_snapshot!(stmt.to_sql(), @r#"ALTER TABLE "pt_backup" DROP COLUMN "svg""#);
}

#[test]
fn test_modify_column() {
    let action = AlterAction::from_parts(
        AlterOperation::Modify,
        "score",
        Some("NUMERIC".to_string()),
        true,
        Some("0".to_string()),
    )
    .unwrap();
    let stmt = AlterTable::new("user_progress", action);
    assert_eq!(
        stmt.to_sql(),
        r#"ALTER TABLE "user_progress" ALTER COLUMN "score" TYPE NUMERIC, ALTER COLUMN "score" DROP NOT NULL, ALTER COLUMN "score" SET DEFAULT 0"#
    );
}

#[test]
fn test_modify_column_not_null() {
    let action = AlterAction::from_parts(
        AlterOperation::Modify,
        "status",
        Some("TEXT".to_string()),
        false,
        None,
    )
    .unwrap();
    let stmt = AlterTable::new("test_attempts_table", action);
    assert_eq!(
        stmt.to_sql(),
        r#"ALTER TABLE "test_attempts_table" ALTER COLUMN "status" TYPE TEXT, ALTER COLUMN "status" SET NOT NULL"#
    );
}

#[test]
fn test_missing_type_is_rejected() {
    let err = AlterAction::from_parts(AlterOperation::Modify, "score", None, true, None)
        .unwrap_err();
    assert_eq!(err, AlterError::MissingType(AlterOperation::Modify));
    assert_eq!(
        err.to_string(),
        "column type is required for modify operation"
    );
}

#[test]
fn test_parse_operation() {
    assert_eq!("add".parse::<AlterOperation>(), Ok(AlterOperation::Add));
    assert_eq!("drop".parse::<AlterOperation>(), Ok(AlterOperation::Drop));
    assert_eq!("modify".parse::<AlterOperation>(), Ok(AlterOperation::Modify));
    assert_eq!(
        "rename".parse::<AlterOperation>(),
        Err(AlterError::UnknownOperation("rename".to_string()))
    );
}

#[test]
fn test_identifiers_are_quoted() {
    let action = AlterAction::from_parts(AlterOperation::Drop, "type", None, false, None).unwrap();
    let stmt = AlterTable::new("user", action);
    assert_eq!(stmt.to_string(), r#"ALTER TABLE "user" DROP COLUMN "type""#);
    assert_eq!(stmt.action.operation(), AlterOperation::Drop);
    assert_eq!(stmt.action.column().as_str(), "type");
}
