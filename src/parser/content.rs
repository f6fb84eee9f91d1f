//! Построение канонического текста инструкции
//!
//! Из среза токенов (вместе с trivia) собирается строка только из значимых
//! токенов, разделенных одним пробелом, кроме мест, где пробел запрещен:
//!
//! - перед `,` `;` `)` `.`
//! - после `(` и `.`
//! - с обеих сторон оператора `::`
//! - после оператора, начинающегося с `@` (`@>`, `@@`, ...)
//! - перед `(`, идущей сразу за идентификатором (вызов функции,
//!   список колонок таблицы)

use crate::parser::token::{Token, TokenKind};

/// Нужен ли пробел между двумя соседними значимыми токенами
pub fn needs_space(previous: &Token<'_>, next: &Token<'_>) -> bool {
    if matches!(
        next.kind,
        TokenKind::Comma | TokenKind::Semicolon | TokenKind::CloseParen | TokenKind::Dot
    ) {
        return false;
    }

    if matches!(previous.kind, TokenKind::OpenParen | TokenKind::Dot) {
        return false;
    }

    if previous.is_operator_text("::") || next.is_operator_text("::") {
        return false;
    }

    if previous.kind == TokenKind::Operator && previous.text.starts_with('@') {
        return false;
    }

    if next.kind == TokenKind::OpenParen && previous.is_identifier() {
        return false;
    }

    true
}

/// Однопроходный построитель канонического текста
#[derive(Debug, Default)]
pub struct ContentBuilder<'a> {
    content: String,
    previous: Option<Token<'a>>,
}

impl<'a> ContentBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет токен; trivia и `EndOfFile` пропускаются
    pub fn push(&mut self, token: &Token<'a>) {
        if token.is_trivia() || token.kind == TokenKind::EndOfFile {
            return;
        }

        if let Some(previous) = &self.previous {
            if needs_space(previous, token) {
                self.content.push(' ');
            }
        }

        self.content.push_str(token.text);
        self.previous = Some(*token);
    }

    /// Текущая длина текста в байтах
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn finish(self) -> String {
        self.content
    }
}

/// Канонический текст для среза токенов
pub fn build_content(tokens: &[Token<'_>]) -> String {
    let mut builder = ContentBuilder::new();
    for token in tokens {
        builder.push(token);
    }
    builder.finish()
}
