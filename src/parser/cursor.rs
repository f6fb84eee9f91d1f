//! Курсор для посимвольной навигации по исходному тексту
//!
//! Курсор хранит смещение в байтах вместе с номером строки и колонки.
//! Снимок позиции (`snapshot`) позволяет сканерам заглянуть вперед
//! произвольно далеко и откатиться без пересчета строки и колонки.

use crate::parser::token::Position;

/// Символ, возвращаемый за концом текста
pub const EOF_CHAR: char = '\0';

/// Курсор над неизменяемым исходным буфером
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: Position::start(),
        }
    }

    /// Исходный текст целиком
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Текущая позиция (строка, колонка, смещение)
    pub fn position(&self) -> Position {
        self.position
    }

    /// Смещение в байтах
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Непрочитанный остаток текста
    pub fn rest(&self) -> &'a str {
        &self.source[self.position.offset..]
    }

    /// Текущий символ или `EOF_CHAR` в конце текста
    pub fn current(&self) -> char {
        self.rest().chars().next().unwrap_or(EOF_CHAR)
    }

    /// Следующий за текущим символ без продвижения
    pub fn peek(&self) -> char {
        self.peek_nth(1)
    }

    /// Символ на расстоянии `n` от текущего (`peek_nth(0) == current()`)
    pub fn peek_nth(&self, n: usize) -> char {
        self.rest().chars().nth(n).unwrap_or(EOF_CHAR)
    }

    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    /// Потребляет и возвращает текущий символ
    pub fn advance(&mut self) -> char {
        let ch = match self.rest().chars().next() {
            Some(ch) => ch,
            None => return EOF_CHAR,
        };

        self.position.offset += ch.len_utf8();
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        ch
    }

    /// Продвигает курсор на `count` символов
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Потребляет символы, пока выполняется предикат
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.offset();
        while !self.is_at_end() && predicate(self.current()) {
            self.advance();
        }
        self.offset() - start
    }

    /// Проверяет, начинается ли остаток текста с `seq`, не потребляя его
    pub fn match_sequence(&self, seq: &str) -> bool {
        self.rest().starts_with(seq)
    }

    /// Срез исходного текста; границы обрезаются по длине буфера
    pub fn get_slice(&self, start: usize, len: usize) -> &'a str {
        let start = start.min(self.source.len());
        let end = start.saturating_add(len).min(self.source.len());
        self.source.get(start..end).unwrap_or("")
    }

    /// Снимок позиции для последующего отката
    pub fn snapshot(&self) -> Position {
        self.position
    }

    /// Возвращает курсор в ранее сохраненную позицию
    pub fn restore(&mut self, snapshot: Position) {
        self.position = snapshot;
    }
}
