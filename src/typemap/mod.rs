//! Source-to-target type mapping.
//!
//! A [`TypeMapper`] resolves one source type (plus its length, precision and
//! scale) to a SQL Server type with normalized arguments. There is one mapper
//! per source system:
//!
//! - [`OracleToMssqlMapper`] - the translation table and NUMBER special cases
//! - [`MssqlPassthrough`] - identity mapping for sources that already are SQL Server
//!
//! Mapping never fails. Unknown source types are carried through unchanged.

mod oracle;
mod passthrough;

pub use oracle::{explain_mapping, OracleToMssqlMapper, OracleType};
pub use passthrough::MssqlPassthrough;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::ColumnDescriptor;
use crate::sql::types::MssqlType;

/// The system a table description was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSystem {
    #[default]
    Oracle,
    #[serde(alias = "mssql")]
    SqlServer,
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSystem::Oracle => write!(f, "oracle"),
            SourceSystem::SqlServer => write!(f, "sqlserver"),
        }
    }
}

/// A resolved target type with its normalized arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    pub target: MssqlType,
    pub max_length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<i32>,
}

impl TypeMapping {
    /// A mapping that keeps the source arguments as they are.
    pub fn keep(
        target: MssqlType,
        max_length: Option<u32>,
        precision: Option<u32>,
        scale: Option<i32>,
    ) -> Self {
        Self {
            target,
            max_length,
            precision,
            scale,
        }
    }
}

/// Maps source column types to SQL Server types.
pub trait TypeMapper: fmt::Debug + Send + Sync {
    /// The source system this mapper reads.
    fn source_system(&self) -> SourceSystem;

    /// Map a source type name and its arguments.
    ///
    /// The type name is matched case-insensitively.
    fn map_type(
        &self,
        data_type: &str,
        max_length: Option<u32>,
        precision: Option<u32>,
        scale: Option<i32>,
    ) -> TypeMapping;

    /// Map a whole column. Only the type, length, precision and scale change.
    fn map_column(&self, column: &ColumnDescriptor<String>) -> ColumnDescriptor<MssqlType> {
        let mapping = self.map_type(
            &column.data_type,
            column.max_length,
            column.precision,
            column.scale,
        );

        debug!(
            column = %column.name,
            source_type = %column.data_type,
            target_type = %mapping.target,
            source = %self.source_system(),
            "Data type mapping"
        );

        let mut mapped = column.with_type(mapping.target);
        mapped.max_length = mapping.max_length;
        mapped.precision = mapping.precision;
        mapped.scale = mapping.scale;
        mapped
    }
}

/// The mapper for a source system.
pub fn mapper_for(source: SourceSystem) -> Box<dyn TypeMapper> {
    match source {
        SourceSystem::Oracle => Box::new(OracleToMssqlMapper::new()),
        SourceSystem::SqlServer => Box::new(MssqlPassthrough::new()),
    }
}
