//! DDL (Data Definition Language) generation.
//!
//! This module renders CREATE TABLE and CREATE VIEW statements for a
//! translated table. Statements are built as token streams and serialized by
//! a [`SqlDialect`]; output is deterministic, so the same table and options
//! always give byte-identical text.
//!
//! # Examples
//!
//! ```ignore
//! use schemashift::sql::ddl::{ColumnDef, CreateTable, TableConstraint};
//! use schemashift::sql::dialect::TSql;
//!
//! let table = CreateTable::new("src_orders")
//!     .schema("bronze")
//!     .columns([ColumnDef::new(id_column)])
//!     .constraint(TableConstraint::primary_key("PK_src_orders", ["ID"]));
//!
//! println!("{}", table.to_sql(&TSql));
//! ```

use serde::Serialize;
use tracing::info;

use super::dialect::{SqlDialect, TSql};
use super::token::{Token, TokenStream};
use super::types::MssqlType;
use crate::audit::AuditColumnPolicy;
use crate::manifest::{self, GeneratedFile};
use crate::model::{ColumnDescriptor, TargetTable};

// ============================================================================
// CREATE TABLE
// ============================================================================

/// CREATE TABLE statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateTable {
    pub schema: Option<String>,
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
}

impl CreateTable {
    /// Create a new CREATE TABLE statement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Set the schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Add multiple column definitions.
    pub fn columns(mut self, cols: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.columns.extend(cols);
        self
    }

    /// Add a table constraint.
    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: &dyn SqlDialect) -> String {
        self.to_tokens(dialect).serialize(dialect)
    }

    /// Convert to token stream.
    ///
    /// One column or constraint per line, indented one level:
    ///
    /// ```text
    /// CREATE TABLE [schema].[name] (
    ///     [col] TYPE,
    ///     CONSTRAINT [PK_name] PRIMARY KEY ([col])
    /// );
    /// ```
    pub fn to_tokens(&self, dialect: &dyn SqlDialect) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Create)
            .space()
            .push(Token::Table)
            .space()
            .push(Token::QualifiedIdent {
                schema: self.schema.clone(),
                name: self.name.clone(),
            })
            .space()
            .lparen()
            .newline();

        let items = self
            .columns
            .iter()
            .map(|c| c.to_tokens(dialect))
            .chain(self.constraints.iter().map(TableConstraint::to_tokens));

        let mut first = true;
        for item in items {
            if !first {
                ts.comma().newline();
            }
            first = false;
            ts.indent(1).append(&item);
        }

        ts.newline().rparen().push(Token::Semicolon);
        ts
    }
}

// ============================================================================
// Column Definition
// ============================================================================

/// How a column default is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultClause {
    /// `DEFAULT <expr>`
    Inline(String),
    /// `CONSTRAINT [<name>] DEFAULT (<expr>)`
    Named { constraint: String, expr: String },
}

/// Column definition for CREATE TABLE.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub column: ColumnDescriptor<MssqlType>,
    pub default: Option<DefaultClause>,
}

impl ColumnDef {
    /// Column definition with an inline default, if the column has one.
    pub fn new(column: ColumnDescriptor<MssqlType>) -> Self {
        let default = column.default_value.clone().map(DefaultClause::Inline);
        Self { column, default }
    }

    /// Column definition whose default is a named `DF_<column>` constraint.
    pub fn with_named_default(column: ColumnDescriptor<MssqlType>) -> Self {
        let default = column
            .default_value
            .clone()
            .map(|expr| DefaultClause::Named {
                constraint: format!("DF_{}", column.name),
                expr,
            });
        Self { column, default }
    }

    /// Column definition for a table column, naming the default of the audit column only.
    pub fn for_column(column: &ColumnDescriptor<MssqlType>, audit: &AuditColumnPolicy) -> Self {
        if audit.is_audit_column(&column.name) {
            Self::with_named_default(column.clone())
        } else {
            Self::new(column.clone())
        }
    }

    /// Convert to token stream.
    pub fn to_tokens(&self, dialect: &dyn SqlDialect) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Ident(self.column.name.clone()))
            .space()
            .push(Token::Raw(dialect.emit_column_type(&self.column)));

        if !self.column.nullable {
            ts.space().push(Token::Not).space().push(Token::Null);
        }

        match &self.default {
            Some(DefaultClause::Inline(expr)) => {
                ts.space()
                    .push(Token::Default)
                    .space()
                    .push(Token::Raw(expr.clone()));
            }
            Some(DefaultClause::Named { constraint, expr }) => {
                ts.space()
                    .push(Token::Constraint)
                    .space()
                    .push(Token::Ident(constraint.clone()))
                    .space()
                    .push(Token::Default)
                    .space()
                    .lparen()
                    .push(Token::Raw(expr.clone()))
                    .rparen();
            }
            None => {}
        }

        ts
    }
}

// ============================================================================
// Table Constraints
// ============================================================================

/// Table-level constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    PrimaryKey { name: String, columns: Vec<String> },
}

impl TableConstraint {
    /// Create a named PRIMARY KEY constraint.
    pub fn primary_key(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        TableConstraint::PrimaryKey {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Convert to token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        match self {
            TableConstraint::PrimaryKey { name, columns } => {
                ts.push(Token::Constraint)
                    .space()
                    .push(Token::Ident(name.clone()))
                    .space()
                    .push(Token::Primary)
                    .space()
                    .push(Token::Key)
                    .space()
                    .lparen();
                for (i, col) in columns.iter().enumerate() {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.push(Token::Ident(col.clone()));
                }
                ts.rparen();
            }
        }
        ts
    }
}

// ============================================================================
// CREATE VIEW
// ============================================================================

/// CREATE VIEW statement projecting columns of a single table.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateView {
    pub schema: Option<String>,
    pub name: String,
    pub columns: Vec<String>,
    pub from_schema: Option<String>,
    pub from_table: String,
}

impl CreateView {
    /// Create a new CREATE VIEW statement over `from_table`.
    pub fn new(name: impl Into<String>, from_table: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            columns: Vec::new(),
            from_schema: None,
            from_table: from_table.into(),
        }
    }

    /// Set the schema of both the view and the table it selects from.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        let schema = schema.into();
        self.from_schema = Some(schema.clone());
        self.schema = Some(schema);
        self
    }

    /// Add projected columns.
    pub fn columns(mut self, cols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns.extend(cols.into_iter().map(Into::into));
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: &dyn SqlDialect) -> String {
        self.to_tokens().serialize(dialect)
    }

    /// Convert to token stream.
    ///
    /// ```text
    /// CREATE VIEW [schema].[view] AS
    /// SELECT
    ///     [col1],
    ///     [col2]
    /// FROM [schema].[table];
    /// ```
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Create)
            .space()
            .push(Token::View)
            .space()
            .push(Token::QualifiedIdent {
                schema: self.schema.clone(),
                name: self.name.clone(),
            })
            .space()
            .push(Token::As)
            .newline()
            .push(Token::Select);

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                ts.comma();
            }
            ts.newline().indent(1).push(Token::Ident(col.clone()));
        }

        ts.newline()
            .push(Token::From)
            .space()
            .push(Token::QualifiedIdent {
                schema: self.from_schema.clone(),
                name: self.from_table.clone(),
            })
            .push(Token::Semicolon);

        ts
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Where and under which names the DDL for one table is generated.
#[derive(Debug, Clone, Copy)]
pub struct DdlOptions<'a> {
    pub target_schema: &'a str,
    pub table_name: &'a str,
    /// View name; no view is generated when `None`.
    pub view_name: Option<&'a str>,
    pub audit: &'a AuditColumnPolicy,
}

/// Generated DDL for one source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DdlOutput {
    pub table_ddl: String,
    pub view_ddl: Option<String>,
    pub target_table_name: String,
    pub target_view_name: Option<String>,
    /// One file per generated object, table first.
    pub files: Vec<GeneratedFile>,
}

/// Build the CREATE TABLE statement for a translated table.
pub fn create_table(table: &TargetTable, options: &DdlOptions<'_>) -> CreateTable {
    let mut create = CreateTable::new(options.table_name)
        .schema(options.target_schema)
        .columns(
            table
                .columns
                .iter()
                .map(|c| ColumnDef::for_column(c, options.audit)),
        );

    if table.has_primary_key() {
        create = create.constraint(TableConstraint::primary_key(
            format!("PK_{}", options.table_name),
            table.primary_keys.iter().cloned(),
        ));
    }

    create
}

/// Build the CREATE VIEW statement, projecting every column but the audit column.
pub fn create_view(table: &TargetTable, view_name: &str, options: &DdlOptions<'_>) -> CreateView {
    CreateView::new(view_name, options.table_name)
        .schema(options.target_schema)
        .columns(
            table
                .columns
                .iter()
                .filter(|c| !options.audit.is_audit_column(&c.name))
                .map(|c| c.name.clone()),
        )
}

/// Generate table (and optionally view) DDL plus the files to write.
pub fn generate_ddl(table: &TargetTable, options: &DdlOptions<'_>) -> DdlOutput {
    let dialect = TSql;

    let table_ddl = create_table(table, options).to_sql(&dialect);
    let mut files = vec![GeneratedFile {
        path: manifest::table_file_path(options.target_schema, options.table_name),
        content: table_ddl.clone(),
    }];
    info!(
        schema = options.target_schema,
        table = options.table_name,
        ddl_type = "table",
        "DDL generated"
    );

    let view_ddl = options.view_name.map(|view_name| {
        let sql = create_view(table, view_name, options).to_sql(&dialect);
        files.push(GeneratedFile {
            path: manifest::view_file_path(options.target_schema, view_name),
            content: sql.clone(),
        });
        info!(
            schema = options.target_schema,
            view = view_name,
            ddl_type = "view",
            "DDL generated"
        );
        sql
    });

    DdlOutput {
        table_ddl,
        view_ddl,
        target_table_name: options.table_name.to_string(),
        target_view_name: options.view_name.map(str::to_string),
        files,
    }
}
