//! Configuration module for schemashift.
//!
//! Handles the settings file and environment variable expansion.

mod settings;

pub use settings::{
    expand_env_vars, LoggingSettings, Settings, SettingsError, TargetSettings, CONFIG_ENV_VAR,
};
