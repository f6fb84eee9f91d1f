//! Лексический анализатор PostgreSQL для pgcodegen
//!
//! Преобразует исходный текст в полный упорядоченный поток токенов,
//! включая пробелы и комментарии. Конкатенация текстов всех токенов
//! в точности воспроизводит исходный текст; поток завершается одним
//! токеном `EndOfFile` нулевой длины.

use crate::common::Result;
use crate::parser::chars::{is_digit, is_identifier_start, is_whitespace};
use crate::parser::cursor::Cursor;
use crate::parser::diagnostics::{DiagnosticKind, LexDiagnostic};
use crate::parser::lexer_readers::*;
use crate::parser::settings::ParserSettings;
use crate::parser::token::{Token, TokenKind};

/// Лексический анализатор SQL
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    settings: ParserSettings,
    diagnostics: Vec<LexDiagnostic>,
    /// Последний значимый токен был `.`
    after_dot: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Создает новый лексический анализатор
    pub fn new(source: &'a str) -> Self {
        Self::with_settings(source, ParserSettings::default())
    }

    /// Создает лексер с настройками
    pub fn with_settings(source: &'a str, settings: ParserSettings) -> Self {
        Self {
            cursor: Cursor::new(source),
            settings,
            diagnostics: Vec::new(),
            after_dot: false,
            finished: false,
        }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Незавершенные конструкции, встреченные на данный момент
    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    /// Возвращает следующий токен; после конца входа всегда `EndOfFile`
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.cursor.snapshot();

        if self.cursor.is_at_end() {
            self.finished = true;
            return Token::eof(start);
        }

        let mut scan = self.scan();
        if scan.len == 0 {
            // Сканер обязан продвинуть курсор хотя бы на один символ
            self.cursor.restore(start);
            scan = read_single_char(&mut self.cursor, TokenKind::Unknown);
        }

        // Слово после `.` является частью составного имени: `schema.table`
        if scan.kind == TokenKind::Keyword && self.after_dot {
            scan.kind = TokenKind::Identifier;
        }
        if scan.kind.is_significant() {
            self.after_dot = scan.kind == TokenKind::Dot;
        }

        let token = Token::new(
            scan.kind,
            self.cursor.get_slice(start.offset, scan.len),
            start,
        );

        if !scan.terminated {
            if let Some(kind) = DiagnosticKind::for_token(scan.kind) {
                let diagnostic = LexDiagnostic::new(kind, start);
                log::warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
            }
        }

        token
    }

    /// Возвращает все токены входного текста.
    ///
    /// В строгом режиме незавершенная конструкция возвращается как ошибка.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>> {
        let tokens = self.collect_tokens();

        if self.settings.strict {
            if let Some(diagnostic) = self.diagnostics.first() {
                return Err(diagnostic.to_error());
            }
        }

        Ok(tokens)
    }

    fn collect_tokens(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        log::trace!(
            "tokenized {} bytes into {} tokens",
            self.cursor.source().len(),
            tokens.len()
        );
        tokens
    }

    /// Выбирает сканер по текущему символу
    fn scan(&mut self) -> Scan {
        let cursor = &mut self.cursor;
        let ch = cursor.current();

        match ch {
            _ if is_whitespace(ch) => read_whitespace(cursor),
            '-' if cursor.peek() == '-' => read_line_comment(cursor),
            '/' if cursor.peek() == '*' => read_block_comment(cursor),
            '$' => read_dollar_quoted(cursor),
            '\'' => read_string_literal(cursor),
            '"' => read_quoted_identifier(cursor),
            _ if is_digit(ch) => read_number(cursor),
            '(' => read_single_char(cursor, TokenKind::OpenParen),
            ')' => read_single_char(cursor, TokenKind::CloseParen),
            '[' => read_single_char(cursor, TokenKind::OpenBracket),
            ']' => read_single_char(cursor, TokenKind::CloseBracket),
            ';' => read_single_char(cursor, TokenKind::Semicolon),
            ',' => read_single_char(cursor, TokenKind::Comma),
            '.' => read_single_char(cursor, TokenKind::Dot),
            _ if starts_operator(cursor) => read_operator(cursor),
            _ if is_identifier_start(ch) => read_identifier_or_keyword(cursor),
            _ => read_single_char(cursor, TokenKind::Unknown),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Выдает токены до `EndOfFile` включительно
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

/// Разбивает текст на токены в обычном режиме; всегда успешна
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect_tokens()
}

/// Разбивает текст на токены с учетом настроек
pub fn tokenize_with<'a>(source: &'a str, settings: &ParserSettings) -> Result<Vec<Token<'a>>> {
    Lexer::with_settings(source, settings.clone()).tokenize()
}
