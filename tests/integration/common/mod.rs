//! Общие утилиты для интеграционных тестов

use pgcodegen::common::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Схема из нескольких инструкций с заголовками и встроенными комментариями
pub const SCHEMA_SQL: &str = r#"-- Пользователи системы
-- comment: Users; to_name: User;
CREATE TABLE public.users (
    id BIGSERIAL PRIMARY KEY, -- comment: Identifier; to_type: BIGINT;
    "Email" TEXT NOT NULL, -- to_name(EmailAddress)
    created_at TIMESTAMPTZ DEFAULT now()
);

CREATE INDEX users_email_idx ON public.users ("Email");

-- Обновляет updated_at
CREATE FUNCTION touch() RETURNS trigger AS $body$
BEGIN
    NEW.updated_at := now();
    RETURN NEW;
END;
$body$ LANGUAGE plpgsql;
"#;

/// Запросы с директивами sqlc
pub const QUERIES_SQL: &str = "-- name: GetUser :one
SELECT id, \"Email\" FROM users WHERE id = $1;

-- name: ListUsers :many
SELECT * FROM users WHERE tags @> $1 ORDER BY id;
";

/// Временная директория с SQL файлами
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Записывает файл, создавая промежуточные директории
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Имена файлов относительно корня
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.root())
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
