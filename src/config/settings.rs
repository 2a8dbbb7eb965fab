//! TOML-based configuration for schemashift.
//!
//! Supports a config file (schemashift.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [target]
//! source = "oracle"
//! schema = "bronze_schema"
//! prefix = "${SOURCE_SYSTEM}"
//! database = "DataWarehouse"
//! create_view = true
//! naming_style = "standard"
//!
//! [audit]
//! name = "record_insert_datetime"
//! data_type = "DATETIME2"
//! nullable = false
//! default_expression = "GETDATE()"
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::audit::AuditColumnPolicy;
use crate::naming::{self, NamingStyle};
use crate::translate::TargetConfig;
use crate::typemap::SourceSystem;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SCHEMASHIFT_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Target database settings.
    pub target: TargetSettings,

    /// Audit column appended to every table.
    pub audit: AuditColumnPolicy,

    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Target database settings.
///
/// String values support `${VAR}` and `$VAR` expansion.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetSettings {
    /// System the table descriptions come from.
    pub source: SourceSystem,

    /// Target schema.
    pub schema: String,

    /// Source-system prefix for table names.
    pub prefix: String,

    /// Database project name.
    pub database: String,

    /// Generate a view for each table.
    pub create_view: bool,

    /// Table naming style.
    pub naming_style: NamingStyle,
}

impl Default for TargetSettings {
    fn default() -> Self {
        let target = TargetConfig::default();
        Self {
            source: SourceSystem::default(),
            schema: target.schema,
            prefix: target.prefix,
            database: target.database,
            create_view: target.create_view,
            naming_style: target.naming_style,
        }
    }
}

impl TargetSettings {
    /// Resolve into a target configuration, expanding environment variables.
    pub fn resolve(&self) -> Result<TargetConfig, SettingsError> {
        Ok(TargetConfig {
            schema: expand_env_vars(&self.schema)?,
            prefix: expand_env_vars(&self.prefix)?,
            database: expand_env_vars(&self.database)?,
            create_view: self.create_view,
            naming_style: self.naming_style,
        })
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default log level filter (e.g., "info", "debug", "schemashift=trace").
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SCHEMASHIFT_CONFIG`
    /// 2. `./schemashift.toml`
    /// 3. `~/.config/schemashift/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("schemashift.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("schemashift").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Target configuration with environment variables expanded.
    pub fn target_config(&self) -> Result<TargetConfig, SettingsError> {
        self.target.resolve()
    }

    /// Check that the configured names can produce valid objects.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let target = self.target_config()?;

        let schema = naming::validate_name(&target.schema);
        if !schema.valid {
            return Err(SettingsError::InvalidConfig(format!(
                "target schema '{}': {}",
                target.schema, schema.message
            )));
        }

        let prefix = naming::sanitize_identifier(&target.prefix);
        if prefix.is_empty() || prefix.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(SettingsError::InvalidConfig(format!(
                "prefix '{}' must start with a letter or underscore",
                target.prefix
            )));
        }

        if target.database.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "database name cannot be empty".to_string(),
            ));
        }

        if self.audit.name.is_empty() {
            return Err(SettingsError::InvalidConfig(
                "audit column name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            // $VAR ends at the first non-alphanumeric/underscore
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
