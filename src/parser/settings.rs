//! Настройки лексера и парсера блоков

use crate::common::constants::UNKNOWN_COMMENT_KEY;

/// Настройки парсера
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    /// Строгий режим: незавершенные строки, комментарии и кавычки
    /// возвращаются как ошибка вместо поглощения до конца входа
    pub strict: bool,
    /// Ключ встроенного комментария, перед которым нет идентификатора
    pub unknown_key: String,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            strict: false,
            unknown_key: UNKNOWN_COMMENT_KEY.to_string(),
        }
    }
}

impl ParserSettings {
    /// Настройки строгого режима
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
