use schemashift::model::{DescriptorError, SourceTable, TableKind, UNBOUNDED_LENGTH};

#[test]
fn test_from_json_defaults() {
    let table = SourceTable::from_json(
        r#"{ "name": "V_ORDERS", "schema": "SALES", "kind": "VIEW",
             "columns": [ { "name": "ID", "data_type": "NUMBER" } ] }"#,
    )
    .unwrap();

    assert_eq!(table.kind, TableKind::View);
    assert!(table.columns[0].nullable);
    assert!(!table.columns[0].is_primary_key);
    assert!(table.primary_keys.is_empty());
    assert_eq!(table.row_count, None);
}

#[test]
fn test_from_json_rejects_malformed() {
    let result = SourceTable::from_json(r#"{ "name": "T" }"#);
    assert!(matches!(result, Err(DescriptorError::ParseError(_))));
}

#[test]
fn test_validate_reports_every_problem() {
    let table = SourceTable::from_json(
        r#"{ "name": "T", "schema": "S",
             "columns": [ { "name": "A", "data_type": "DATE" }, { "name": "A", "data_type": "DATE" } ],
             "primary_keys": ["B"],
             "unique_constraints": [["C"]] }"#,
    )
    .unwrap();

    let errors = table.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], DescriptorError::DuplicateColumn { .. }));
    assert!(matches!(errors[1], DescriptorError::UnknownPrimaryKey { .. }));
    assert!(matches!(errors[2], DescriptorError::UnknownUniqueColumn { .. }));
    assert_eq!(errors[1].to_string(), "Primary key column 'B' is not a column of S.T");
}

#[test]
fn test_from_json_accepts_unbounded_length() {
    let table = SourceTable::from_json(
        r#"{ "name": "Docs", "schema": "dbo",
             "columns": [ { "name": "Body", "data_type": "varchar", "max_length": -1 } ] }"#,
    )
    .unwrap();

    assert_eq!(table.columns[0].max_length, Some(UNBOUNDED_LENGTH));
}
