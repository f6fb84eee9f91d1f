//! pgcodegen - фронтенд генератора кода для PostgreSQL
//!
//! Лексер PostgreSQL без потерь, разбиение файла на инструкции и разбор
//! комментариев-директив (`-- name: Foo :one`, `-- comment: x; to_type: BIGINT;`),
//! которые используют анализаторы схемы и запросов.

pub mod batch;
pub mod cli;
pub mod common;
pub mod parser;

pub use common::error::{Error, Result};
pub use parser::{
    extract_blocks, extract_blocks_with, parse_comment_metadata, tokenize, tokenize_with,
    CommentMetadata, InlineComment, ParserSettings, SqlBlock, Token, TokenKind,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
