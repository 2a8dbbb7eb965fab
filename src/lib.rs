//! # schemashift
//!
//! Translates source table descriptions into SQL Server DDL and database
//! project entries.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        TableDescriptor<String> (source catalog)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [typemap + translate]
//! ┌─────────────────────────────────────────────────────────┐
//! │        TableDescriptor<MssqlType> (+ audit column)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [naming + sql::ddl]
//! ┌─────────────────────────────────────────────────────────┐
//! │           CREATE TABLE / CREATE VIEW scripts             │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [manifest]
//! ┌─────────────────────────────────────────────────────────┐
//! │              .sqlproj Build entries                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`storage`] estimator runs on the translated table alongside.

pub mod audit;
pub mod config;
pub mod manifest;
pub mod model;
pub mod naming;
pub mod sql;
pub mod storage;
pub mod translate;
pub mod typemap;

// Re-export SQL submodules at crate level for convenience
pub use sql::ddl;
pub use sql::dialect;
pub use sql::token;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::audit::{augment, AuditColumnPolicy};
    pub use crate::config::{Settings, SettingsError};
    pub use crate::manifest::{GeneratedFile, Manifest};
    pub use crate::model::{
        ColumnDescriptor, DescriptorError, SourceTable, TableDescriptor, TableKind, TargetTable,
    };
    pub use crate::naming::{validate_name, NameValidation, NamingStyle};
    pub use crate::sql::{generate_ddl, DdlOptions, DdlOutput, MssqlType, SqlDialect, TSql};
    pub use crate::storage::{estimate_storage, StorageEstimate};
    pub use crate::translate::{translate_table, MigrationBundle, TargetConfig, Translator};
    pub use crate::typemap::{mapper_for, SourceSystem, TypeMapper, TypeMapping};
}

pub use translate::{MigrationBundle, TargetConfig, Translator};
