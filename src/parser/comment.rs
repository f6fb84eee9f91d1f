//! Разбор директив в тексте комментария
//!
//! Поддерживаются две формы полей:
//!
//! - `key: value; key: value;` (значение до `;` или конца строки)
//! - `key(value); key(value);` (значение до парной `)`)
//!
//! Распознаются поля `comment`, `to_type` и `to_name`; имя поля
//! сравнивается без учета регистра.

use crate::common::constants::LINE_COMMENT_PREFIX;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub const COMMENT_FIELD: &str = "comment";
pub const TO_TYPE_FIELD: &str = "to_type";
pub const TO_NAME_FIELD: &str = "to_name";

lazy_static! {
    static ref COLON_FIELD: Regex =
        Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*:\s*([^;]*)").expect("valid colon field regex");
    static ref PAREN_FIELD_START: Regex =
        Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("valid paren field regex");
}

/// Структурированные метаданные комментария
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentMetadata {
    /// Описание; весь текст, если поле `comment` не задано
    pub comment: String,
    /// Целевой тип из `to_type`
    pub to_data_type: Option<String>,
    /// Целевое имя из `to_name`
    pub to_name: Option<String>,
}

impl CommentMetadata {
    /// Разбирает текст комментария; никогда не завершается ошибкой
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let cleaned = trimmed
            .strip_prefix(LINE_COMMENT_PREFIX)
            .unwrap_or(trimmed)
            .trim();

        if cleaned.is_empty() {
            return Self::default();
        }

        let fields = Fields::parse(cleaned);
        if fields.is_empty() {
            return Self {
                comment: cleaned.to_string(),
                ..Self::default()
            };
        }

        Self {
            comment: fields
                .get(COMMENT_FIELD)
                .unwrap_or(cleaned)
                .to_string(),
            to_data_type: fields.get(TO_TYPE_FIELD).map(str::to_string),
            to_name: fields.get(TO_NAME_FIELD).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comment.is_empty() && self.to_data_type.is_none() && self.to_name.is_none()
    }

    /// Задана ли хотя бы одна директива преобразования
    pub fn has_directives(&self) -> bool {
        self.to_data_type.is_some() || self.to_name.is_some()
    }
}

/// Разбирает текст комментария в метаданные
pub fn parse_comment_metadata(text: &str) -> CommentMetadata {
    CommentMetadata::parse(text)
}

/// Поля обеих грамматик в порядке следования
struct Fields<'t> {
    colon: Vec<(&'t str, &'t str)>,
    paren: Vec<(&'t str, &'t str)>,
}

impl<'t> Fields<'t> {
    fn parse(text: &'t str) -> Self {
        let colon = COLON_FIELD
            .captures_iter(text)
            .filter_map(|caps| {
                let key = caps.get(1)?.as_str();
                let value = caps.get(2)?.as_str().trim();
                Some((key, value))
            })
            .collect();

        Self {
            colon,
            paren: paren_fields(text),
        }
    }

    fn is_empty(&self) -> bool {
        self.colon.is_empty() && self.paren.is_empty()
    }

    /// Значение поля: сначала форма `key: value`, затем `key(value)`
    fn get(&self, name: &str) -> Option<&'t str> {
        let lookup = |fields: &[(&'t str, &'t str)]| {
            fields
                .iter()
                .find(|(key, value)| key.eq_ignore_ascii_case(name) && !value.is_empty())
                .map(|(_, value)| *value)
        };

        lookup(&self.colon).or_else(|| lookup(&self.paren))
    }
}

/// Поля вида `key(value)`; значение берется до парной закрывающей скобки
fn paren_fields(text: &str) -> Vec<(&str, &str)> {
    let mut fields = Vec::new();
    let mut search_from = 0;

    while let Some(caps) = PAREN_FIELD_START.captures_at(text, search_from) {
        let (key, open_end) = match (caps.get(1), caps.get(0)) {
            (Some(key), Some(whole)) => (key.as_str(), whole.end()),
            _ => break,
        };

        match matching_paren(&text[open_end..]) {
            Some(close) => {
                fields.push((key, text[open_end..open_end + close].trim()));
                search_from = open_end + close + 1;
            }
            None => break,
        }
    }

    fields
}

/// Смещение закрывающей скобки для уже открытой `(`
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;

    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }

    None
}
