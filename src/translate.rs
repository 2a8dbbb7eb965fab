//! Table translation pipeline.
//!
//! ```text
//! SourceTable ─▶ translate_table ─▶ augment ─▶ target names ─▶ generate_ddl ─▶ manifest
//!                      │
//!                      └─▶ estimate_storage
//! ```
//!
//! [`Translator`] runs the whole pipeline for one table and returns a
//! [`MigrationBundle`]. Nothing here reads files or talks to a database; the
//! bundle is handed to whatever writes and commits the scripts.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::audit::{self, AuditColumnPolicy};
use crate::manifest::{self, Manifest};
use crate::model::{SourceTable, TargetTable};
use crate::naming::{self, NamingStyle};
use crate::sql::ddl::{generate_ddl, DdlOptions, DdlOutput};
use crate::storage::{estimate_storage, StorageEstimate};
use crate::typemap::{mapper_for, SourceSystem, TypeMapper};

/// Where and how translated tables are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Target schema for tables and views.
    pub schema: String,
    /// Source-system prefix of target table names.
    pub prefix: String,
    /// Database project the scripts belong to.
    pub database: String,
    /// Also generate a view over the new table.
    pub create_view: bool,
    pub naming_style: NamingStyle,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            schema: "temp_schema".to_string(),
            prefix: "src".to_string(),
            database: "DataWarehouse".to_string(),
            create_view: true,
            naming_style: NamingStyle::Standard,
        }
    }
}

/// Everything generated for one source table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationBundle {
    /// Translated table including the audit column.
    pub translated: TargetTable,
    pub ddl: DdlOutput,
    pub manifest: Manifest,
    /// Estimated from the translated columns, before the audit column is added.
    pub storage: StorageEstimate,
}

/// Map every column of `table` with `mapper`, keeping column order, keys and row count.
pub fn translate_table(table: &SourceTable, mapper: &dyn TypeMapper) -> TargetTable {
    let columns = table.columns.iter().map(|c| mapper.map_column(c)).collect();
    table.with_columns(columns)
}

/// Runs the translation pipeline for a configured target.
#[derive(Debug)]
pub struct Translator {
    mapper: Box<dyn TypeMapper>,
    target: TargetConfig,
    audit: AuditColumnPolicy,
}

impl Translator {
    /// Translator for Oracle sources with the default audit column.
    pub fn new(target: TargetConfig) -> Self {
        Self {
            mapper: mapper_for(SourceSystem::Oracle),
            target,
            audit: AuditColumnPolicy::default(),
        }
    }

    /// Read tables from `source`.
    pub fn source(mut self, source: SourceSystem) -> Self {
        self.mapper = mapper_for(source);
        self
    }

    /// Use a different audit column.
    pub fn audit(mut self, audit: AuditColumnPolicy) -> Self {
        self.audit = audit;
        self
    }

    /// Target table name for a source table.
    pub fn target_table_name(&self, table: &SourceTable) -> String {
        naming::target_table_name(
            self.target.naming_style,
            &self.target.prefix,
            &table.schema,
            &table.name,
        )
    }

    /// Target view name for a source table, when views are generated.
    pub fn target_view_name(&self, table: &SourceTable) -> Option<String> {
        self.target
            .create_view
            .then(|| naming::target_view_name(&table.schema, &table.name))
    }

    /// Translate one table and generate its scripts.
    pub fn translate(&self, table: &SourceTable) -> MigrationBundle {
        let translated = translate_table(table, self.mapper.as_ref());
        let storage = estimate_storage(&translated);
        let augmented = audit::augment(&translated, &self.audit);

        let table_name = self.target_table_name(table);
        let view_name = self.target_view_name(table);

        let ddl = generate_ddl(
            &augmented,
            &DdlOptions {
                target_schema: &self.target.schema,
                table_name: &table_name,
                view_name: view_name.as_deref(),
                audit: &self.audit,
            },
        );
        let manifest = manifest::build_manifest(&self.target.database, &ddl.files);

        info!(
            source = %table.qualified_name(),
            target_table = %format!("{}.{}", self.target.schema, table_name),
            files = ddl.files.len(),
            "Table translated"
        );

        MigrationBundle {
            translated: augmented,
            ddl,
            manifest,
            storage,
        }
    }
}
