//! Shared helper functions for SQL dialect implementations.

use crate::sql::types::MssqlType;

/// Length written for a variable-length column whose length is unknown.
pub const DEFAULT_RENDERED_LENGTH: u32 = 255;

// =============================================================================
// Identifier Quoting
// =============================================================================

/// Quote identifier with square brackets.
/// Used by: T-SQL (SQL Server, Azure Synapse)
pub fn quote_bracket(ident: &str) -> String {
    format!("[{}]", ident.replace(']', "]]"))
}

// =============================================================================
// Data Types
// =============================================================================

/// Emit a T-SQL column type with its arguments.
///
/// - NVARCHAR / NCHAR / VARBINARY: `(n)` within the type's limit, `(MAX)`
///   above it, `(255)` when no length is known
/// - DECIMAL: `(p,s)`, `(p)` or bare depending on what is known
/// - everything else: the bare type name
pub fn emit_column_type_tsql(
    data_type: &MssqlType,
    max_length: Option<u32>,
    precision: Option<u32>,
    scale: Option<i32>,
) -> String {
    let name = data_type.name();
    // Zero is not a valid length; render it like a missing one.
    let max_length = max_length.filter(|&n| n > 0);

    if data_type.max_explicit_length().is_some() {
        return if data_type.resolves_to_max(max_length) {
            format!("{}(MAX)", name)
        } else {
            let length = max_length.unwrap_or(DEFAULT_RENDERED_LENGTH);
            format!("{}({})", name, length)
        };
    }

    if *data_type == MssqlType::Decimal {
        return match (precision, scale) {
            (Some(p), Some(s)) => format!("{}({},{})", name, p, s),
            (Some(p), None) => format!("{}({})", name, p),
            _ => name.to_string(),
        };
    }

    name.to_string()
}
