use schemashift::model::SourceTable;
use schemashift::storage::{estimate_storage, ROW_OVERHEAD_BYTES};
use schemashift::translate::translate_table;
use schemashift::typemap::{mapper_for, SourceSystem};

fn estimate(json: &str) -> schemashift::storage::StorageEstimate {
    let table = SourceTable::from_json(json).unwrap();
    let translated = translate_table(&table, mapper_for(SourceSystem::Oracle).as_ref());
    estimate_storage(&translated)
}

#[test]
fn test_translated_oracle_table() {
    let estimate = estimate(
        r#"{
            "name": "ACCOUNTS",
            "schema": "FIN",
            "columns": [
                { "name": "ID", "data_type": "NUMBER", "precision": 9, "scale": 0, "is_primary_key": true },
                { "name": "CODE", "data_type": "CHAR", "max_length": 12 },
                { "name": "LABEL", "data_type": "VARCHAR2", "max_length": 400 },
                { "name": "BALANCE", "data_type": "NUMBER", "precision": 12, "scale": 2 },
                { "name": "OPENED", "data_type": "DATE" }
            ],
            "primary_keys": ["ID"],
            "row_count": 2048
        }"#,
    );

    // INT 8, NCHAR(3) 6, NVARCHAR(100) 200, DECIMAL 9, DATETIME2 8
    let row = 8 + 6 + 200 + 9 + 8 + ROW_OVERHEAD_BYTES;
    assert_eq!(estimate.row_size_bytes, row);
    assert_eq!(
        estimate.table_size_mb,
        Some((row * 2048) as f64 / (1024.0 * 1024.0))
    );
    assert_eq!(estimate.variable_length_columns, 1);
    assert!(!estimate.has_large_objects);
    assert!(estimate.notes.is_empty());
}

#[test]
fn test_large_objects_and_missing_key() {
    let estimate = estimate(
        r#"{
            "name": "DOCS",
            "schema": "APP",
            "columns": [
                { "name": "BODY", "data_type": "CLOB" },
                { "name": "IMAGE", "data_type": "BLOB" }
            ]
        }"#,
    );

    assert_eq!(estimate.row_size_bytes, 510 + 510 + ROW_OVERHEAD_BYTES);
    assert!(estimate.has_large_objects);
    assert_eq!(estimate.table_size_mb, None);
    assert_eq!(estimate.notes.len(), 2);
    assert!(estimate.notes[0].contains("large object"));
    assert!(estimate.notes[1].contains("no primary key"));
}

#[test]
fn test_zero_length_raw_is_sized_as_unknown() {
    let estimate = estimate(
        r#"{
            "name": "TOKENS",
            "schema": "SEC",
            "columns": [
                { "name": "HASH", "data_type": "RAW", "max_length": 0 }
            ]
        }"#,
    );

    assert_eq!(estimate.row_size_bytes, 510 + ROW_OVERHEAD_BYTES);
}
