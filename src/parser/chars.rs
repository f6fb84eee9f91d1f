//! Классификация символов для лексера

/// Символы, из которых состоят операторы PostgreSQL
const OPERATOR_CHARS: &[char] = &[
    '+', '-', '*', '/', '%', '^', '<', '>', '=', '!', '|', '&', '~', '#',
];

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Буква или `_`
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Буква, цифра, `_` или `$` (позиционные параметры вида `$1`)
pub fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_operator_char(ch: char) -> bool {
    OPERATOR_CHARS.contains(&ch)
}
