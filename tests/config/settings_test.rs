use schemashift::config::{Settings, SettingsError};
use schemashift::naming::NamingStyle;
use schemashift::sql::MssqlType;
use schemashift::typemap::SourceSystem;
use schemashift::Translator;
use std::fs;

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("schemashift_settings_{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
[target]
schema = "silver"
prefix = "crm"
naming_style = "schema_prefixed"

[audit]
name = "etl_loaded_at"
data_type = "DATETIMEOFFSET"
default_expression = "SYSDATETIMEOFFSET()"
"#,
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(settings.target.source, SourceSystem::Oracle);
    assert_eq!(settings.target.naming_style, NamingStyle::SchemaPrefixed);
    assert_eq!(settings.audit.data_type, MssqlType::DateTimeOffset);
    settings.validate().unwrap();
}

#[test]
fn test_settings_drive_translation() {
    let settings = Settings::from_toml(
        r#"
[target]
schema = "silver"
prefix = "crm"
create_view = false

[audit]
name = "etl_loaded_at"
default_expression = "SYSUTCDATETIME()"
"#,
    )
    .unwrap();

    let table = schemashift::model::SourceTable::from_json(
        r#"{ "name": "LEADS", "schema": "SALES", "columns": [ { "name": "ID", "data_type": "NUMBER" } ] }"#,
    )
    .unwrap();

    let bundle = Translator::new(settings.target_config().unwrap())
        .audit(settings.audit.clone())
        .translate(&table);

    assert_eq!(bundle.ddl.target_table_name, "crm_leads");
    assert!(bundle.ddl.view_ddl.is_none());
    assert!(bundle.ddl.table_ddl.contains(
        "[etl_loaded_at] DATETIME2 NOT NULL CONSTRAINT [DF_etl_loaded_at] DEFAULT (SYSUTCDATETIME())"
    ));
    assert!(bundle.ddl.table_ddl.contains("[ID] BIGINT,"));
}

#[test]
fn test_env_expansion_in_target() {
    std::env::set_var("SCHEMASHIFT_IT_PREFIX", "erp");
    let settings = Settings::from_toml(
        r#"
[target]
prefix = "${SCHEMASHIFT_IT_PREFIX}"
"#,
    )
    .unwrap();
    assert_eq!(settings.target_config().unwrap().prefix, "erp");
    std::env::remove_var("SCHEMASHIFT_IT_PREFIX");

    let settings = Settings::from_toml("[target]\nschema = \"$SCHEMASHIFT_IT_UNSET_SCHEMA\"").unwrap();
    assert!(matches!(
        settings.target_config(),
        Err(SettingsError::MissingEnvVar(_))
    ));
}

#[test]
fn test_invalid_toml() {
    let result = Settings::from_toml("[target\nschema = 1");
    assert!(matches!(result, Err(SettingsError::ParseError(_))));
}
