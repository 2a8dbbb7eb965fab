use schemashift::model::SourceTable;
use schemashift::typemap::SourceSystem;
use schemashift::{TargetConfig, Translator};

const PRODUCTS_JSON: &str = r#"{
    "name": "PRODUCTS",
    "schema": "INVENTORY",
    "kind": "TABLE",
    "columns": [
        { "name": "ID", "data_type": "NUMBER", "precision": 9, "scale": 0, "nullable": false, "is_primary_key": true },
        { "name": "NAME", "data_type": "VARCHAR2", "max_length": 400, "nullable": false }
    ],
    "primary_keys": ["ID"]
}"#;

fn bronze_target() -> TargetConfig {
    TargetConfig {
        schema: "bronze_schema".to_string(),
        prefix: "src".to_string(),
        create_view: true,
        ..TargetConfig::default()
    }
}

#[test]
fn test_end_to_end_products() {
    let table = SourceTable::from_json(PRODUCTS_JSON).unwrap();
    table.validate().unwrap();

    let bundle = Translator::new(bronze_target()).translate(&table);
    let ddl = &bundle.ddl;

    assert_eq!(ddl.target_table_name, "src_products");
    assert!(ddl.table_ddl.contains("[ID] INT NOT NULL"));
    assert!(ddl.table_ddl.contains("[NAME] NVARCHAR(100) NOT NULL"));
    assert!(ddl.table_ddl.contains(
        "[record_insert_datetime] DATETIME2 NOT NULL CONSTRAINT [DF_record_insert_datetime] DEFAULT (GETDATE())"
    ));
    assert!(ddl
        .table_ddl
        .contains("CONSTRAINT [PK_src_products] PRIMARY KEY ([ID])"));

    assert_eq!(
        bundle.manifest.entries,
        [
            r#"    <Build Include="bronze_schema\Tables\src_products.sql" />"#,
            r#"    <Build Include="bronze_schema\Views\INVENTORY_PRODUCTS.sql" />"#,
        ]
    );
}

#[test]
fn test_end_to_end_table_text() {
    let table = SourceTable::from_json(PRODUCTS_JSON).unwrap();
    let bundle = Translator::new(bronze_target()).translate(&table);

    insta::assert_snapshot!(bundle.ddl.table_ddl, @r"
    CREATE TABLE [bronze_schema].[src_products] (
        [ID] INT NOT NULL,
        [NAME] NVARCHAR(100) NOT NULL,
        [record_insert_datetime] DATETIME2 NOT NULL CONSTRAINT [DF_record_insert_datetime] DEFAULT (GETDATE()),
        CONSTRAINT [PK_src_products] PRIMARY KEY ([ID])
    );
    ");

    insta::assert_snapshot!(bundle.ddl.view_ddl.unwrap_or_default(), @r"
    CREATE VIEW [bronze_schema].[INVENTORY_PRODUCTS] AS
    SELECT
        [ID],
        [NAME]
    FROM [bronze_schema].[src_products];
    ");
}

#[test]
fn test_view_projection_keeps_order_without_audit_column() {
    let table = SourceTable::from_json(
        r#"{
            "name": "EVENTS",
            "schema": "APP",
            "columns": [
                { "name": "Z_LAST", "data_type": "DATE" },
                { "name": "A_FIRST", "data_type": "CLOB" },
                { "name": "M_MIDDLE", "data_type": "RAW", "max_length": 16 }
            ]
        }"#,
    )
    .unwrap();

    let bundle = Translator::new(bronze_target()).translate(&table);
    let view = bundle.ddl.view_ddl.unwrap();

    let z = view.find("[Z_LAST]").unwrap();
    let a = view.find("[A_FIRST]").unwrap();
    let m = view.find("[M_MIDDLE]").unwrap();
    assert!(z < a && a < m);
    assert!(!view.contains("record_insert_datetime"));

    assert!(bundle.ddl.table_ddl.contains("[A_FIRST] NVARCHAR(MAX)"));
    assert!(bundle.ddl.table_ddl.contains("[M_MIDDLE] VARBINARY(16)"));
    assert!(!bundle.ddl.table_ddl.contains("PRIMARY KEY"));
}

#[test]
fn test_translation_is_idempotent() {
    let table = SourceTable::from_json(PRODUCTS_JSON).unwrap();
    let translator = Translator::new(bronze_target());

    let first = translator.translate(&table);
    let second = translator.translate(&table);
    assert_eq!(first.ddl.table_ddl, second.ddl.table_ddl);
    assert_eq!(first.ddl.view_ddl, second.ddl.view_ddl);
    assert_eq!(first.manifest, second.manifest);
}

#[test]
fn test_sqlserver_source_passthrough() {
    let table = SourceTable::from_json(
        r#"{
            "name": "Orders",
            "schema": "dbo",
            "columns": [
                { "name": "Id", "data_type": "bigint", "nullable": false, "is_primary_key": true },
                { "name": "Total", "data_type": "decimal", "precision": 18, "scale": 4 },
                { "name": "Code", "data_type": "varchar", "max_length": 50 },
                { "name": "Hash", "data_type": "binary", "max_length": 16 },
                { "name": "PlacedAt", "data_type": "datetime2", "precision": 23, "scale": 3 },
                { "name": "Notes", "data_type": "nvarchar", "max_length": -1 }
            ],
            "primary_keys": ["Id"]
        }"#,
    )
    .unwrap();

    let bundle = Translator::new(bronze_target())
        .source(SourceSystem::SqlServer)
        .translate(&table);

    assert!(bundle.ddl.table_ddl.contains("[Id] BIGINT NOT NULL"));
    assert!(bundle.ddl.table_ddl.contains("[Total] DECIMAL(18,4)"));
    assert!(bundle.ddl.table_ddl.contains("[Code] varchar(50),"));
    assert!(bundle.ddl.table_ddl.contains("[Hash] binary(16),"));
    assert!(bundle.ddl.table_ddl.contains("[PlacedAt] datetime2(3),"));
    assert!(bundle.ddl.table_ddl.contains("[Notes] NVARCHAR(MAX),"));
}

#[test]
fn test_zero_length_raw_gets_default_length() {
    let table = SourceTable::from_json(
        r#"{
            "name": "TOKENS",
            "schema": "SEC",
            "columns": [ { "name": "HASH", "data_type": "RAW", "max_length": 0 } ]
        }"#,
    )
    .unwrap();

    let bundle = Translator::new(bronze_target()).translate(&table);

    assert!(bundle.ddl.table_ddl.contains("[HASH] VARBINARY(255),"));
    assert_eq!(bundle.storage.row_size_bytes, 510 + 24);
}

#[test]
fn test_bundle_serializes_to_json() {
    let table = SourceTable::from_json(PRODUCTS_JSON).unwrap();
    let bundle = Translator::new(bronze_target()).translate(&table);

    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["ddl"]["target_table_name"], "src_products");
    assert_eq!(json["translated"]["columns"][0]["data_type"], "INT");
    assert_eq!(json["manifest"]["project_file"], "DataWarehouse/DataWarehouse.sqlproj");
}
