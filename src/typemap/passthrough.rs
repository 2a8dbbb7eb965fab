//! Identity mapping for SQL Server sources.

use super::{SourceSystem, TypeMapper, TypeMapping};
use crate::model::UNBOUNDED_LENGTH;
use crate::sql::dialect::helpers::DEFAULT_RENDERED_LENGTH;
use crate::sql::types::{MssqlType, MAX_BINARY_LENGTH};

/// Largest fractional-seconds precision of the SQL Server time types.
const MAX_TIME_PRECISION: i32 = 7;

/// Keeps SQL Server source types as they are.
///
/// Type names are resolved to [`MssqlType`] so the DDL generator can format
/// their arguments; lengths, precision and scale are untouched. Native types
/// outside that set keep their arguments by carrying them in the type name.
#[derive(Debug, Clone, Default)]
pub struct MssqlPassthrough;

impl MssqlPassthrough {
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for MssqlPassthrough {
    fn source_system(&self) -> SourceSystem {
        SourceSystem::SqlServer
    }

    fn map_type(
        &self,
        data_type: &str,
        max_length: Option<u32>,
        precision: Option<u32>,
        scale: Option<i32>,
    ) -> TypeMapping {
        let target = native_with_arguments(data_type, max_length, scale)
            .map(MssqlType::Other)
            .unwrap_or_else(|| MssqlType::parse(data_type));
        TypeMapping::keep(target, max_length, precision, scale)
    }
}

/// Full type text for native types whose arguments the DDL generator cannot
/// render from the column: `varchar(50)`, `binary(16)`, `datetime2(3)`.
///
/// Fractional-seconds precision is read from the scale, as `sys.columns`
/// reports it.
fn native_with_arguments(
    data_type: &str,
    max_length: Option<u32>,
    scale: Option<i32>,
) -> Option<String> {
    let name = data_type.trim();
    match name.to_lowercase().as_str() {
        "varchar" | "char" | "binary" => {
            let length = match max_length.filter(|&n| n > 0) {
                Some(n) if n == UNBOUNDED_LENGTH || n > MAX_BINARY_LENGTH => "MAX".to_string(),
                Some(n) => n.to_string(),
                None => DEFAULT_RENDERED_LENGTH.to_string(),
            };
            Some(format!("{}({})", name, length))
        }
        "datetime2" | "datetimeoffset" | "time" => match scale {
            Some(s) if (1..=MAX_TIME_PRECISION).contains(&s) => Some(format!("{}({})", name, s)),
            _ => None,
        },
        _ => None,
    }
}
