//! Диагностика незавершенных конструкций
//!
//! В обычном режиме лексер поглощает незавершенную конструкцию до конца
//! входа и только записывает диагностику. В строгом режиме первая
//! диагностика превращается в ошибку.

use crate::common::Error;
use crate::parser::token::{Position, TokenKind};
use serde::Serialize;
use std::fmt;

/// Вид незавершенной конструкции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    UnterminatedBlockComment,
    UnterminatedString,
    UnterminatedDollarQuote,
    UnterminatedQuotedIdentifier,
}

impl DiagnosticKind {
    /// Диагностика для токена, оборванного концом входа
    pub fn for_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::BlockComment => Some(DiagnosticKind::UnterminatedBlockComment),
            TokenKind::StringLiteral => Some(DiagnosticKind::UnterminatedString),
            TokenKind::DollarQuotedString => Some(DiagnosticKind::UnterminatedDollarQuote),
            TokenKind::QuotedIdentifier => Some(DiagnosticKind::UnterminatedQuotedIdentifier),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::UnterminatedBlockComment => "unterminated block comment",
            DiagnosticKind::UnterminatedString => "unterminated string literal",
            DiagnosticKind::UnterminatedDollarQuote => "unterminated dollar-quoted string",
            DiagnosticKind::UnterminatedQuotedIdentifier => "unterminated quoted identifier",
        }
    }
}

/// Диагностика лексера с позицией начала конструкции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexDiagnostic {
    pub kind: DiagnosticKind,
    pub position: Position,
}

impl LexDiagnostic {
    pub fn new(kind: DiagnosticKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn to_error(&self) -> Error {
        Error::sql_parsing(self.kind.message(), self.position.line, self.position.column)
    }
}

impl fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind.message(), self.position)
    }
}
