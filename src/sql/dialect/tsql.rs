//! T-SQL (SQL Server / Azure SQL) dialect.
//!
//! - Square bracket identifier quoting (`[name]`)
//! - `(MAX)` for unbounded NVARCHAR / VARBINARY
//! - DECIMAL arguments written without spaces: `DECIMAL(10,2)`

use super::helpers;
use super::SqlDialect;
use crate::model::ColumnDescriptor;
use crate::sql::types::MssqlType;

/// T-SQL (SQL Server) dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct TSql;

impl SqlDialect for TSql {
    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_bracket(ident)
    }

    fn emit_column_type(&self, column: &ColumnDescriptor<MssqlType>) -> String {
        helpers::emit_column_type_tsql(
            &column.data_type,
            column.max_length,
            column.precision,
            column.scale,
        )
    }
}
