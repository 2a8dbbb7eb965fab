//! Naming conventions for generated objects.
//!
//! Target table names are derived from a source-system prefix and the source
//! table name, sanitized to lower-case `[a-z0-9_]`. View names keep the source
//! schema and table name as they are.
//!
//! ```text
//! prefix "SRC", table "Order-Lines"  →  src_order_lines
//! schema "SALES", table "ORDERS"     →  SALES_ORDERS (view)
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Longest identifier SQL Server accepts.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "SELECT", "FROM", "WHERE", "INSERT", "UPDATE", "DELETE", "CREATE", "DROP", "ALTER",
        "TABLE", "VIEW", "INDEX", "DATABASE", "SCHEMA", "USER", "ORDER", "GROUP", "HAVING",
        "UNION", "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "ON", "AS", "AND", "OR",
        "NOT", "IN", "EXISTS", "LIKE", "BETWEEN",
    ]
    .into_iter()
    .collect()
});

/// How target table names are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    /// `{prefix}_{table}`
    #[default]
    Standard,
    /// `{source_schema}_{prefix}_{table}`
    SchemaPrefixed,
}

/// Outcome of a naming check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameValidation {
    pub valid: bool,
    pub message: String,
}

impl NameValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: "Valid table name".to_string(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Lower-case an identifier and replace anything outside `[a-z0-9_]` with `_`.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Target table name for a source table.
pub fn target_table_name(style: NamingStyle, prefix: &str, schema: &str, table: &str) -> String {
    match style {
        NamingStyle::Standard => format!(
            "{}_{}",
            sanitize_identifier(prefix),
            sanitize_identifier(table)
        ),
        NamingStyle::SchemaPrefixed => format!(
            "{}_{}_{}",
            sanitize_identifier(schema),
            sanitize_identifier(prefix),
            sanitize_identifier(table)
        ),
    }
}

/// View name for a source table: `{schema}_{table}`, unsanitized.
pub fn target_view_name(schema: &str, table: &str) -> String {
    format!("{}_{}", schema, table)
}

/// Check a name against SQL Server identifier rules and reserved words.
pub fn validate_name(name: &str) -> NameValidation {
    if name.is_empty() {
        return NameValidation::invalid("Table name cannot be empty");
    }

    if name.chars().count() > MAX_IDENTIFIER_LENGTH {
        return NameValidation::invalid(format!(
            "Table name cannot exceed {} characters",
            MAX_IDENTIFIER_LENGTH
        ));
    }

    if !IDENTIFIER_PATTERN.is_match(name) {
        return NameValidation::invalid(
            "Table name must start with letter or underscore and contain only letters, numbers, and underscores",
        );
    }

    if is_reserved_word(name) {
        return NameValidation::invalid(format!(
            "'{}' is a reserved word and cannot be used as a table name",
            name
        ));
    }

    NameValidation::ok()
}

/// Case-insensitive reserved word check.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(name.to_uppercase().as_str())
}
