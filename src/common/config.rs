//! Конфигурация для pgcodegen
//!
//! Настройки фронтенда: режим лексера, отбор исходных файлов и логирование

use crate::common::constants::{DEFAULT_FILE_EXTENSION, DEFAULT_LOG_LEVEL};
use crate::common::error::{Error, Result};
use crate::parser::ParserSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Допустимые уровни логирования
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Основная конфигурация фронтенда
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Строгий режим: незавершенные конструкции считаются ошибкой
    pub strict: bool,
    /// Расширение исходных файлов (без точки)
    pub file_extension: String,
    /// Обходить вложенные директории
    pub recursive: bool,
    /// Разбирать документы параллельно
    pub parallel: bool,
    /// Уровень логирования
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            strict: false,
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            recursive: true,
            parallel: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl FrontendConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FrontendConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = FrontendConfig::default();

        if let Ok(strict) = std::env::var("PGCODEGEN_STRICT") {
            config.strict = parse_bool("PGCODEGEN_STRICT", &strict)?;
        }

        if let Ok(ext) = std::env::var("PGCODEGEN_FILE_EXTENSION") {
            config.file_extension = ext;
        }

        if let Ok(recursive) = std::env::var("PGCODEGEN_RECURSIVE") {
            config.recursive = parse_bool("PGCODEGEN_RECURSIVE", &recursive)?;
        }

        if let Ok(parallel) = std::env::var("PGCODEGEN_PARALLEL") {
            config.parallel = parse_bool("PGCODEGEN_PARALLEL", &parallel)?;
        }

        if let Ok(level) = std::env::var("PGCODEGEN_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой: значения `other`, отличные от
    /// значений по умолчанию, имеют приоритет
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = Self::default();

        if other.strict != defaults.strict {
            self.strict = other.strict;
        }
        if other.file_extension != defaults.file_extension {
            self.file_extension = other.file_extension;
        }
        if other.recursive != defaults.recursive {
            self.recursive = other.recursive;
        }
        if other.parallel != defaults.parallel {
            self.parallel = other.parallel;
        }
        if other.log_level != defaults.log_level {
            self.log_level = other.log_level;
        }

        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.file_extension.is_empty() {
            return Err(Error::configuration("File extension cannot be empty"));
        }

        if self.file_extension.starts_with('.') {
            return Err(Error::configuration(format!(
                "File extension must not start with a dot: {}",
                self.file_extension
            )));
        }

        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Настройки парсера, соответствующие конфигурации
    pub fn settings(&self) -> ParserSettings {
        ParserSettings {
            strict: self.strict,
            ..ParserSettings::default()
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
