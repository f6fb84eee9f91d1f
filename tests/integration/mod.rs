//! Интеграционные тесты для pgcodegen

pub mod batch_tests;
pub mod common;
pub mod config_tests;
pub mod pipeline_tests;
