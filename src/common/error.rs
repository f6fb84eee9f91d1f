//! Обработка ошибок для pgcodegen

use thiserror::Error;

/// Основной тип ошибки для pgcodegen
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Недопустимые входные данные (пустой исходный текст и т.п.)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Незавершенная конструкция SQL в строгом режиме
    #[error("SQL parsing error at {line}:{column}: {message}")]
    SqlParsing {
        message: String,
        line: usize,
        column: usize,
    },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для pgcodegen
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку недопустимых входных данных
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Создает ошибку SQL парсинга с позицией
    pub fn sql_parsing(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::SqlParsing {
            message: message.into(),
            line,
            column,
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Проверяет, является ли ошибка ошибкой входных данных
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("source is empty");
        assert_eq!(err.to_string(), "Invalid input: source is empty");
        assert!(err.is_invalid_input());

        let err = Error::sql_parsing("unterminated string literal", 3, 7);
        assert_eq!(
            err.to_string(),
            "SQL parsing error at 3:7: unterminated string literal"
        );
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("strict = ");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
