//! Тесты фронтенда PostgreSQL

pub mod cursor_tests;
