//! Токены для SQL лексера pgcodegen
//!
//! Токен не владеет текстом: он хранит срез исходного буфера и позицию
//! первого символа. Владеющая строка создается только по запросу.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Номер строки (с единицы)
    pub line: usize,
    /// Номер колонки в символах (с единицы)
    pub column: usize,
    /// Смещение в байтах от начала текста
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Типы токенов PostgreSQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // === Trivia ===
    Whitespace,
    /// `-- ...` до конца строки
    LineComment,
    /// `/* ... */` с поддержкой вложенности
    BlockComment,

    // === Имена ===
    Identifier,
    /// `"..."`
    QuotedIdentifier,
    Keyword,

    // === Литералы ===
    /// `'...'`, `''` внутри экранирует кавычку
    StringLiteral,
    /// `$tag$ ... $tag$`
    DollarQuotedString,
    NumericLiteral,

    // === Операторы и разделители ===
    Operator,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,

    // === Специальные токены ===
    /// Нераспознанный символ
    Unknown,
    /// Конец файла (нулевой длины)
    EndOfFile,
}

impl TokenKind {
    /// Пробелы и комментарии
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    pub fn is_significant(&self) -> bool {
        !self.is_trivia()
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword)
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::QuotedIdentifier)
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::DollarQuotedString | TokenKind::NumericLiteral
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Operator)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::QuotedIdentifier => "QUOTED_IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::StringLiteral => "STRING",
            TokenKind::DollarQuotedString => "DOLLAR_STRING",
            TokenKind::NumericLiteral => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfFile => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// Токен: тип, срез исходного текста и позиция первого символа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: Position,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, position: Position) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    /// Токен конца файла нулевой длины
    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::EndOfFile, "", position)
    }

    /// Длина в байтах
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Смещение первого байта
    pub fn start(&self) -> usize {
        self.position.offset
    }

    /// Смещение за последним байтом
    pub fn end(&self) -> usize {
        self.position.offset + self.text.len()
    }

    /// Полуоткрытый диапазон `[start, end)` в исходном тексте
    pub fn span(&self) -> Range<usize> {
        self.start()..self.end()
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Строка, на которой находится последний символ токена
    pub fn end_line(&self) -> usize {
        let body = self.text.strip_suffix('\n').unwrap_or(self.text);
        self.position.line + body.matches('\n').count()
    }

    /// Материализует текст токена
    pub fn to_text(&self) -> String {
        self.text.to_string()
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn is_significant(&self) -> bool {
        self.kind.is_significant()
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    pub fn is_identifier(&self) -> bool {
        self.kind.is_identifier()
    }

    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// Проверяет, является ли токен оператором с указанным текстом
    pub fn is_operator_text(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }

    /// Пробельный токен, содержащий пустую строку (два и более перевода строки)
    pub fn contains_blank_line(&self) -> bool {
        self.kind == TokenKind::Whitespace && self.text.matches('\n').count() >= 2
    }

    /// Имя идентификатора без двойных кавычек
    pub fn unquoted(&self) -> &'a str {
        if self.kind == TokenKind::QuotedIdentifier {
            let inner = self.text.strip_prefix('"').unwrap_or(self.text);
            inner.strip_suffix('"').unwrap_or(inner)
        } else {
            self.text
        }
    }

    /// Текст комментария без маркеров `--`, `/*`, `*/` и без крайних пробелов
    pub fn comment_body(&self) -> &'a str {
        match self.kind {
            TokenKind::LineComment => self.text.strip_prefix("--").unwrap_or(self.text).trim(),
            TokenKind::BlockComment => {
                let inner = self.text.strip_prefix("/*").unwrap_or(self.text);
                inner.strip_suffix("*/").unwrap_or(inner).trim()
            }
            _ => self.text,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.kind, self.text, self.position)
    }
}

lazy_static! {
    /// Ключевые слова PostgreSQL, распознаваемые лексером.
    ///
    /// Помимо зарезервированных слов сюда входят имена встроенных типов:
    /// эвристика поиска ключа встроенного комментария пропускает ключевые
    /// слова и должна остановиться на имени колонки, а не на ее типе.
    static ref KEYWORDS: HashSet<&'static str> = [
        // Зарезервированные слова
        "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC",
        "BOTH", "CASE", "CAST", "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE",
        "CURRENT_CATALOG", "CURRENT_DATE", "CURRENT_ROLE", "CURRENT_TIME",
        "CURRENT_TIMESTAMP", "CURRENT_USER", "DEFAULT", "DEFERRABLE", "DESC", "DISTINCT",
        "DO", "ELSE", "END", "EXCEPT", "FALSE", "FETCH", "FOR", "FOREIGN", "FROM", "GRANT",
        "GROUP", "HAVING", "IN", "INITIALLY", "INTERSECT", "INTO", "LATERAL", "LEADING",
        "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "NOT", "NULL", "OFFSET", "ON", "ONLY", "OR",
        "ORDER", "PLACING", "PRIMARY", "REFERENCES", "RETURNING", "SELECT", "SESSION_USER",
        "SOME", "SYMMETRIC", "TABLE", "THEN", "TO", "TRAILING", "TRUE", "UNION", "UNIQUE",
        "USER", "USING", "VARIADIC", "WHEN", "WHERE", "WINDOW", "WITH",
        // DDL / DML
        "ADD", "ALTER", "BEGIN", "BETWEEN", "BY", "CASCADE", "COMMIT", "CONFLICT", "CROSS",
        "DELETE", "DROP", "EXISTS", "EXTENSION", "FULL", "FUNCTION", "IF", "ILIKE", "INDEX",
        "INNER", "INSERT", "IS", "JOIN", "KEY", "LANGUAGE", "LEFT", "LIKE", "MATERIALIZED",
        "NOTHING", "OUTER", "OVER", "PARTITION", "PROCEDURE", "REPLACE", "RESTRICT",
        "RETURNS", "RIGHT", "ROLLBACK", "SCHEMA", "SEQUENCE", "SET", "TRIGGER", "TYPE",
        "UPDATE", "VALUES", "VIEW", "ENUM", "NULLS", "FIRST", "LAST", "RECURSIVE",
        // Встроенные типы
        "BIGINT", "BIGSERIAL", "BIT", "BOOL", "BOOLEAN", "BYTEA", "CHAR", "CHARACTER",
        "CIDR", "DATE", "DEC", "DECIMAL", "DOUBLE", "FLOAT", "FLOAT4", "FLOAT8", "INET",
        "INT", "INT2", "INT4", "INT8", "INTEGER", "INTERVAL", "JSON", "JSONB", "MONEY",
        "NUMERIC", "PRECISION", "REAL", "SERIAL", "SMALLINT", "SMALLSERIAL", "TEXT", "TIME",
        "TIMESTAMP", "TIMESTAMPTZ", "TIMETZ", "UUID", "VARCHAR", "VARYING", "WITHOUT", "XML",
        "ZONE",
    ]
    .into_iter()
    .collect();
}

/// Проверяет, является ли слово ключевым (без учета регистра)
pub fn is_keyword(word: &str) -> bool {
    if word.bytes().any(|b| b.is_ascii_lowercase()) {
        KEYWORDS.contains(word.to_ascii_uppercase().as_str())
    } else {
        KEYWORDS.contains(word)
    }
}
