//! Константы для pgcodegen

/// Ключ встроенного комментария, когда перед ним нет идентификатора
pub const UNKNOWN_COMMENT_KEY: &str = "unknown";

/// Префикс однострочного комментария SQL
pub const LINE_COMMENT_PREFIX: &str = "--";

/// Расширение исходных файлов по умолчанию
pub const DEFAULT_FILE_EXTENSION: &str = "sql";

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "info";
