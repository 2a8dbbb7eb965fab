//! Storage impact estimation.
//!
//! A rough per-row byte footprint for a translated table, used for advisory
//! display next to the generated DDL. The numbers are heuristics, not what
//! SQL Server will actually allocate.

use serde::Serialize;
use tracing::warn;

use crate::model::{ColumnDescriptor, TargetTable};
use crate::sql::types::MssqlType;

/// Fixed per-row overhead in bytes.
pub const ROW_OVERHEAD_BYTES: u64 = 24;

/// Bytes assumed for a variable-length column with no usable length.
pub const UNBOUNDED_COLUMN_BYTES: u64 = 510;

/// Bytes assumed for a type without a specific rule.
pub const DEFAULT_COLUMN_BYTES: u64 = 8;

/// More NVARCHAR columns than this triggers an advisory.
pub const MANY_VARIABLE_COLUMNS: usize = 10;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Estimated storage footprint of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageEstimate {
    pub row_size_bytes: u64,
    /// Only known when the table carries a row count.
    pub table_size_mb: Option<f64>,
    pub variable_length_columns: usize,
    pub has_large_objects: bool,
    pub notes: Vec<String>,
}

/// Estimated bytes one value of `column` takes.
pub fn column_bytes(column: &ColumnDescriptor<MssqlType>) -> u64 {
    // A zero length is an unknown length.
    let length = column.max_length.filter(|&n| n > 0).map(u64::from);

    match &column.data_type {
        t if t.is_variable_length() => {
            if t.resolves_to_max(column.max_length) {
                UNBOUNDED_COLUMN_BYTES
            } else {
                length.map_or(UNBOUNDED_COLUMN_BYTES, |n| n * 2)
            }
        }
        MssqlType::NChar => length.unwrap_or(1) * 2,
        t if t.is_integer() => 8,
        MssqlType::Decimal => 9,
        MssqlType::DateTime2 => 8,
        _ => DEFAULT_COLUMN_BYTES,
    }
}

/// Estimate the storage of a translated table.
pub fn estimate_storage(table: &TargetTable) -> StorageEstimate {
    let row_size_bytes =
        table.columns.iter().map(column_bytes).sum::<u64>() + ROW_OVERHEAD_BYTES;

    let table_size_mb = table
        .row_count
        .map(|rows| (row_size_bytes as f64 * rows as f64) / BYTES_PER_MB);

    let variable_length_columns = table
        .columns
        .iter()
        .filter(|c| c.data_type.is_variable_length())
        .count();

    let has_large_objects = table
        .columns
        .iter()
        .any(|c| c.data_type.resolves_to_max(c.max_length));

    let unicode_columns = table
        .columns
        .iter()
        .filter(|c| matches!(c.data_type, MssqlType::NVarchar | MssqlType::NVarcharMax))
        .count();

    let mut notes = Vec::new();
    if has_large_objects {
        notes.push(
            "Table contains large object columns (MAX) which may impact performance".to_string(),
        );
    }
    if !table.has_primary_key() {
        notes.push(
            "Table has no primary key - consider adding one for better performance".to_string(),
        );
    }
    if unicode_columns > MANY_VARIABLE_COLUMNS {
        notes.push(
            "Table has many variable-length columns which may impact row storage".to_string(),
        );
    }

    for note in &notes {
        warn!(table = %table.qualified_name(), "{}", note);
    }

    StorageEstimate {
        row_size_bytes,
        table_size_mb,
        variable_length_columns,
        has_large_objects,
        notes,
    }
}
