//! SQL Tokens - the atomic units of DDL output.
//!
//! Tokens are dialect-agnostic representations that serialize
//! to dialect-specific strings.

use super::dialect::SqlDialect;

/// Text of one indentation level.
const INDENT_UNIT: &str = "    ";

/// SQL Token - every element the DDL generator emits.
///
/// Adding a new variant here will cause compile errors everywhere
/// it needs to be handled (exhaustive matching).
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // === Keywords ===
    Create,
    Table,
    View,
    As,
    Select,
    From,
    Constraint,
    Primary,
    Key,
    Default,
    Not,
    Null,

    // === Punctuation ===
    Comma,
    LParen,
    RParen,
    Semicolon,

    // === Whitespace / Formatting ===
    Space,
    Newline,
    Indent(usize),

    // === Dynamic Content ===
    /// Simple identifier (table, column, constraint)
    Ident(String),
    /// Qualified identifier: schema.name or just name
    QualifiedIdent {
        schema: Option<String>,
        name: String,
    },

    // === Escape Hatch ===
    /// Text passed directly to output without escaping.
    ///
    /// Used for rendered data types and for default expressions read from the
    /// source catalog. Never build this from free-form user input.
    Raw(String),
}

impl Token {
    /// Serialize this token to a string for the given dialect.
    pub fn serialize(&self, dialect: &dyn SqlDialect) -> String {
        match self {
            // Keywords
            Token::Create => "CREATE".into(),
            Token::Table => "TABLE".into(),
            Token::View => "VIEW".into(),
            Token::As => "AS".into(),
            Token::Select => "SELECT".into(),
            Token::From => "FROM".into(),
            Token::Constraint => "CONSTRAINT".into(),
            Token::Primary => "PRIMARY".into(),
            Token::Key => "KEY".into(),
            Token::Default => "DEFAULT".into(),
            Token::Not => "NOT".into(),
            Token::Null => "NULL".into(),

            // Punctuation
            Token::Comma => ",".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Semicolon => dialect.statement_terminator().into(),

            // Whitespace
            Token::Space => " ".into(),
            Token::Newline => "\n".into(),
            Token::Indent(n) => INDENT_UNIT.repeat(*n),

            // Dynamic - dialect-specific formatting
            Token::Ident(name) => dialect.quote_identifier(name),
            Token::QualifiedIdent { schema, name } => match schema {
                Some(s) => format!(
                    "{}.{}",
                    dialect.quote_identifier(s),
                    dialect.quote_identifier(name)
                ),
                None => dialect.quote_identifier(name),
            },

            // Escape hatch
            Token::Raw(s) => s.clone(),
        }
    }
}

/// A stream of tokens that can be serialized to SQL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty token stream.
    pub fn new() -> Self {
        Self { tokens: vec![] }
    }

    /// Push a single token.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Append another token stream.
    pub fn append(&mut self, other: &TokenStream) -> &mut Self {
        self.tokens.extend(other.tokens.iter().cloned());
        self
    }

    /// Serialize all tokens to a SQL string.
    pub fn serialize(&self, dialect: &dyn SqlDialect) -> String {
        self.tokens.iter().map(|t| t.serialize(dialect)).collect()
    }

    // Convenience methods for common tokens
    pub fn space(&mut self) -> &mut Self {
        self.push(Token::Space)
    }
    pub fn newline(&mut self) -> &mut Self {
        self.push(Token::Newline)
    }
    pub fn indent(&mut self, n: usize) -> &mut Self {
        self.push(Token::Indent(n))
    }
    pub fn comma(&mut self) -> &mut Self {
        self.push(Token::Comma)
    }
    pub fn lparen(&mut self) -> &mut Self {
        self.push(Token::LParen)
    }
    pub fn rparen(&mut self) -> &mut Self {
        self.push(Token::RParen)
    }
}
