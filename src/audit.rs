//! Audit column augmentation.
//!
//! Every generated table gets one extra column recording when a row was
//! inserted. What that column looks like is a policy value, configurable
//! through the `[audit]` section of the settings file.

use serde::{Deserialize, Serialize};

use crate::model::{ColumnDescriptor, TargetTable};
use crate::sql::types::MssqlType;

/// Shape of the audit column appended to every table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditColumnPolicy {
    /// Column name.
    pub name: String,
    /// Column type.
    pub data_type: MssqlType,
    /// Whether the column allows NULL.
    pub nullable: bool,
    /// Server-side default expression.
    pub default_expression: String,
}

impl Default for AuditColumnPolicy {
    fn default() -> Self {
        Self {
            name: "record_insert_datetime".to_string(),
            data_type: MssqlType::DateTime2,
            nullable: false,
            default_expression: "GETDATE()".to_string(),
        }
    }
}

impl AuditColumnPolicy {
    /// The column this policy describes.
    pub fn column(&self) -> ColumnDescriptor<MssqlType> {
        let mut column = ColumnDescriptor::new(self.name.clone(), self.data_type.clone())
            .default_value(self.default_expression.clone());
        column.nullable = self.nullable;
        column
    }

    /// Whether `name` is the audit column.
    pub fn is_audit_column(&self, name: &str) -> bool {
        name == self.name
    }
}

/// Return a copy of `table` with the audit column appended last.
pub fn augment(table: &TargetTable, policy: &AuditColumnPolicy) -> TargetTable {
    let mut columns = table.columns.clone();
    columns.push(policy.column());
    table.with_columns(columns)
}
