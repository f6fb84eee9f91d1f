//! Сканеры отдельных семейств токенов
//!
//! Каждый сканер получает курсор, стоящий на первом символе токена,
//! потребляет токен целиком и сообщает его тип и длину в байтах.
//! Незавершенные конструкции потребляют текст до конца входа и
//! помечаются флагом `terminated == false`.

use crate::parser::chars::{is_digit, is_identifier_part, is_operator_char, is_whitespace};
use crate::parser::cursor::Cursor;
use crate::parser::token::{is_keyword, TokenKind};

/// Многосимвольные операторы PostgreSQL, от длинных к коротким
pub const MULTI_CHAR_OPERATORS: &[&str] = &[
    // 4
    "!~~*",
    // 3
    "!~~", "~~*", "!~*", "->>", "#>>", "<->", "<<|", "|>>", "&<|", "|&>",
    // 2
    "<=", ">=", "<>", "!=", "||", "&&", "::", "->", "#>", "@>", "<@", "?|", "?&", "~*", "!~",
    "~~", "@@", "##", "<<", ">>", "&<", "&>",
];

/// Результат работы сканера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub kind: TokenKind,
    /// Длина токена в байтах
    pub len: usize,
    /// `false`, если конструкция оборвалась концом входа
    pub terminated: bool,
}

impl Scan {
    pub fn complete(kind: TokenKind, len: usize) -> Self {
        Self {
            kind,
            len,
            terminated: true,
        }
    }

    pub fn unterminated(kind: TokenKind, len: usize) -> Self {
        Self {
            kind,
            len,
            terminated: false,
        }
    }
}

/// Читает последовательность пробельных символов
pub fn read_whitespace(cursor: &mut Cursor<'_>) -> Scan {
    let len = cursor.eat_while(is_whitespace);
    Scan::complete(TokenKind::Whitespace, len)
}

/// Читает `--` до перевода строки (не включая его) или до конца входа
pub fn read_line_comment(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.offset();
    cursor.advance_by(2);
    cursor.eat_while(|ch| ch != '\n');
    Scan::complete(TokenKind::LineComment, cursor.offset() - start)
}

/// Читает `/* ... */` с учетом вложенных комментариев
pub fn read_block_comment(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.offset();
    cursor.advance_by(2);
    let mut depth = 1usize;

    while !cursor.is_at_end() {
        if cursor.match_sequence("/*") {
            cursor.advance_by(2);
            depth += 1;
        } else if cursor.match_sequence("*/") {
            cursor.advance_by(2);
            depth -= 1;
            if depth == 0 {
                return Scan::complete(TokenKind::BlockComment, cursor.offset() - start);
            }
        } else {
            cursor.advance();
        }
    }

    Scan::unterminated(TokenKind::BlockComment, cursor.offset() - start)
}

/// Читает числовой литерал: целое, `0x`/`0b`/`0o`, дробь, экспонента
pub fn read_number(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.offset();

    if cursor.current() == '0' {
        if let Some(is_radix_digit) = radix_digits(cursor.peek()) {
            // Префикс без единой цифры остается обычным нулем
            if is_radix_digit(cursor.peek_nth(2)) {
                cursor.advance_by(2);
                cursor.eat_while(is_radix_digit);
                return Scan::complete(TokenKind::NumericLiteral, cursor.offset() - start);
            }
        }
    }

    cursor.eat_while(is_digit);

    if cursor.current() == '.' && is_digit(cursor.peek()) {
        cursor.advance();
        cursor.eat_while(is_digit);
    }

    if matches!(cursor.current(), 'e' | 'E') {
        let next = cursor.peek();
        let signed = (next == '+' || next == '-') && is_digit(cursor.peek_nth(2));
        if is_digit(next) || signed {
            cursor.advance();
            if signed {
                cursor.advance();
            }
            cursor.eat_while(is_digit);
        }
    }

    Scan::complete(TokenKind::NumericLiteral, cursor.offset() - start)
}

fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

fn is_binary_digit(ch: char) -> bool {
    ch == '0' || ch == '1'
}

fn is_octal_digit(ch: char) -> bool {
    ('0'..='7').contains(&ch)
}

/// Предикат цифр для префикса `0x`, `0b`, `0o`
fn radix_digits(marker: char) -> Option<fn(char) -> bool> {
    match marker {
        'x' | 'X' => Some(is_hex_digit),
        'b' | 'B' => Some(is_binary_digit),
        'o' | 'O' => Some(is_octal_digit),
        _ => None,
    }
}

/// Проверяет, начинается ли в позиции курсора оператор
pub fn starts_operator(cursor: &Cursor<'_>) -> bool {
    is_operator_char(cursor.current())
        || MULTI_CHAR_OPERATORS
            .iter()
            .any(|op| cursor.match_sequence(op))
}

/// Читает оператор: самое длинное совпадение по таблице, иначе один символ
pub fn read_operator(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.offset();

    match MULTI_CHAR_OPERATORS
        .iter()
        .find(|op| cursor.match_sequence(op))
    {
        Some(op) => cursor.advance_by(op.chars().count()),
        None => {
            cursor.advance();
        }
    }

    Scan::complete(TokenKind::Operator, cursor.offset() - start)
}

/// Читает строковый литерал в одинарных кавычках; `''` экранирует кавычку
pub fn read_string_literal(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.offset();
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.advance() == '\'' {
            if cursor.current() == '\'' {
                cursor.advance();
                continue;
            }
            return Scan::complete(TokenKind::StringLiteral, cursor.offset() - start);
        }
    }

    Scan::unterminated(TokenKind::StringLiteral, cursor.offset() - start)
}

/// Читает строку в долларовых кавычках `$tag$ ... $tag$`.
///
/// Если после `$` и символов тега не встречается закрывающий `$`,
/// курсор откатывается и `$` возвращается как оператор длины 1
/// (позиционный параметр `$1` и т.п.).
pub fn read_dollar_quoted(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.snapshot();
    cursor.advance();
    cursor.eat_while(|ch| ch != '$' && is_identifier_part(ch));

    if cursor.current() != '$' {
        cursor.restore(start);
        cursor.advance();
        return Scan::complete(TokenKind::Operator, cursor.offset() - start.offset);
    }

    cursor.advance();
    let delimiter = cursor.get_slice(start.offset, cursor.offset() - start.offset);

    while !cursor.is_at_end() {
        if cursor.match_sequence(delimiter) {
            cursor.advance_by(delimiter.chars().count());
            return Scan::complete(
                TokenKind::DollarQuotedString,
                cursor.offset() - start.offset,
            );
        }
        cursor.advance();
    }

    Scan::unterminated(
        TokenKind::DollarQuotedString,
        cursor.offset() - start.offset,
    )
}

/// Читает идентификатор в двойных кавычках (без экранирования)
pub fn read_quoted_identifier(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.offset();
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.advance() == '"' {
            return Scan::complete(TokenKind::QuotedIdentifier, cursor.offset() - start);
        }
    }

    Scan::unterminated(TokenKind::QuotedIdentifier, cursor.offset() - start)
}

/// Читает идентификатор или ключевое слово
pub fn read_identifier_or_keyword(cursor: &mut Cursor<'_>) -> Scan {
    let start = cursor.offset();
    cursor.advance();
    cursor.eat_while(is_identifier_part);

    let len = cursor.offset() - start;
    let kind = if is_keyword(cursor.get_slice(start, len)) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    Scan::complete(kind, len)
}

/// Читает токен из одного символа
pub fn read_single_char(cursor: &mut Cursor<'_>, kind: TokenKind) -> Scan {
    let start = cursor.offset();
    cursor.advance();
    Scan::complete(kind, cursor.offset() - start)
}
