//! Разбиение потока токенов на блоки инструкций
//!
//! Блок заканчивается значимой `;` верхнего уровня (включительно) или концом
//! входа. Подряд идущие строки `--` перед блоком образуют его заголовок;
//! пустая строка между комментариями и инструкцией разрывает эту связь.
//! Строки `--` внутри блока становятся встроенными комментариями и
//! привязываются к ближайшему предшествующему идентификатору.

use crate::common::constants::LINE_COMMENT_PREFIX;
use crate::common::{Error, Result};
use crate::parser::comment::CommentMetadata;
use crate::parser::content::ContentBuilder;
use crate::parser::lexer::Lexer;
use crate::parser::settings::ParserSettings;
use crate::parser::token::{Token, TokenKind};
use serde::Serialize;

/// Встроенный комментарий внутри блока
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineComment {
    /// Ближайший предшествующий идентификатор (без кавычек)
    pub key: String,
    /// Текст комментария без `--`
    pub comment: String,
    /// Смещение в байтах в каноническом тексте блока
    pub position: usize,
}

/// Одна инструкция верхнего уровня
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlBlock {
    /// Канонический текст без комментариев
    pub content: String,
    /// Исходный текст инструкции с заголовком в виде `-- ...`
    pub raw_content: String,
    pub header_comment: Option<String>,
    pub inline_comments: Option<Vec<InlineComment>>,
    pub start_line: usize,
    pub end_line: usize,
}

impl SqlBlock {
    /// Первый встроенный комментарий для ключа (без учета регистра)
    pub fn inline_comment(&self, key: &str) -> Option<&InlineComment> {
        self.inline_comments
            .as_deref()?
            .iter()
            .find(|comment| comment.key.eq_ignore_ascii_case(key))
    }

    /// Метаданные всех встроенных комментариев в порядке следования
    pub fn inline_metadata(&self) -> Vec<(String, CommentMetadata)> {
        self.inline_comments
            .iter()
            .flatten()
            .map(|comment| (comment.key.clone(), CommentMetadata::parse(&comment.comment)))
            .collect()
    }

    /// Метаданные заголовка блока
    pub fn header_metadata(&self) -> Option<CommentMetadata> {
        self.header_comment.as_deref().map(CommentMetadata::parse)
    }

    /// Количество строк исходного текста, занятых блоком
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    CollectingHeader,
    InBlock,
}

/// Парсер блоков поверх готового потока токенов
pub struct BlockParser<'a> {
    source: &'a str,
    settings: ParserSettings,
}

impl<'a> BlockParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_settings(source, ParserSettings::default())
    }

    pub fn with_settings(source: &'a str, settings: ParserSettings) -> Self {
        Self { source, settings }
    }

    /// Разбивает поток токенов на блоки в порядке следования
    pub fn parse(&self, tokens: &[Token<'a>]) -> Vec<SqlBlock> {
        let mut blocks = Vec::new();
        let mut state = State::CollectingHeader;
        let mut header: Vec<&'a str> = Vec::new();
        let mut block_start = 0;

        for (index, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::EndOfFile {
                break;
            }

            if state == State::CollectingHeader {
                match token.kind {
                    TokenKind::Whitespace => {
                        if token.contains_blank_line() {
                            header.clear();
                        }
                        continue;
                    }
                    TokenKind::LineComment => {
                        let body = token.comment_body();
                        if !body.is_empty() {
                            header.push(body);
                        }
                        continue;
                    }
                    TokenKind::BlockComment => continue,
                    _ => {
                        state = State::InBlock;
                        block_start = index;
                    }
                }
            }

            if token.kind == TokenKind::Semicolon {
                blocks.push(self.build_block(&tokens[block_start..=index], &header));
                header.clear();
                state = State::CollectingHeader;
            }
        }

        if state == State::InBlock {
            let rest = &tokens[block_start..];
            let end = rest
                .iter()
                .rposition(|token| {
                    token.kind != TokenKind::EndOfFile && token.kind != TokenKind::Whitespace
                })
                .map_or(0, |last| last + 1);
            blocks.push(self.build_block(&rest[..end], &header));
        }

        log::debug!("extracted {} blocks", blocks.len());
        blocks
    }

    fn build_block(&self, tokens: &[Token<'a>], header: &[&str]) -> SqlBlock {
        let header_comment = if header.is_empty() {
            None
        } else {
            Some(header.join(" "))
        };

        let mut builder = ContentBuilder::new();
        let mut inline_comments = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::LineComment {
                let comment = token.comment_body();
                if !comment.is_empty() {
                    inline_comments.push(InlineComment {
                        key: self.comment_key(&tokens[..index]),
                        comment: comment.to_string(),
                        position: builder.len(),
                    });
                }
            }
            builder.push(token);
        }

        let (first, last) = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return SqlBlock {
                    content: String::new(),
                    raw_content: String::new(),
                    header_comment,
                    inline_comments: None,
                    start_line: 1,
                    end_line: 1,
                }
            }
        };

        let source = &self.source[first.start()..last.end()];
        let raw_content = match &header_comment {
            Some(header) => format!("{} {}\n{}", LINE_COMMENT_PREFIX, header, source),
            None => source.to_string(),
        };

        SqlBlock {
            content: builder.finish(),
            raw_content,
            header_comment,
            inline_comments: if inline_comments.is_empty() {
                None
            } else {
                Some(inline_comments)
            },
            start_line: first.line(),
            end_line: last.end_line(),
        }
    }

    /// Ближайший идентификатор перед комментарием, иначе ключ по умолчанию
    fn comment_key(&self, preceding: &[Token<'a>]) -> String {
        preceding
            .iter()
            .rev()
            .find(|token| token.is_identifier())
            .map(|token| token.unquoted().to_string())
            .unwrap_or_else(|| self.settings.unknown_key.clone())
    }
}

/// Разбивает исходный текст на блоки инструкций
pub fn extract_blocks(source: &str) -> Result<Vec<SqlBlock>> {
    extract_blocks_with(source, &ParserSettings::default())
}

/// Разбивает исходный текст на блоки с учетом настроек
pub fn extract_blocks_with(source: &str, settings: &ParserSettings) -> Result<Vec<SqlBlock>> {
    if source.trim().is_empty() {
        return Err(Error::invalid_input("SQL source is empty or whitespace"));
    }

    let tokens = Lexer::with_settings(source, settings.clone()).tokenize()?;
    Ok(BlockParser::with_settings(source, settings.clone()).parse(&tokens))
}
