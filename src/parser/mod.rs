//! Фронтенд PostgreSQL для pgcodegen
//!
//! Исходный текст → лексер → поток токенов → парсер блоков (с построителем
//! канонического текста) → список блоков с комментариями-директивами.

pub mod block;
pub mod chars;
pub mod comment;
pub mod content;
pub mod cursor;
pub mod diagnostics;
pub mod lexer;
pub mod lexer_readers;
pub mod settings;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use block::{extract_blocks, extract_blocks_with, BlockParser, InlineComment, SqlBlock};
pub use comment::{parse_comment_metadata, CommentMetadata};
pub use content::{build_content, ContentBuilder};
pub use cursor::Cursor;
pub use diagnostics::{DiagnosticKind, LexDiagnostic};
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use settings::ParserSettings;
pub use token::{Position, Token, TokenKind};
