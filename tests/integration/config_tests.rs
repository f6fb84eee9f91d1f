//! Тесты конфигурации вместе с отбором файлов

use super::common::*;
use pgcodegen::batch::{collect_sources, parse_documents};
use pgcodegen::common::FrontendConfig;

#[test]
fn test_config_file_drives_collection() {
    let workspace = TestWorkspace::new().unwrap();
    workspace.write("a.pgsql", "SELECT 1;").unwrap();
    workspace.write("b.sql", "SELECT 2;").unwrap();
    let config_path = workspace
        .write("pgcodegen.toml", "file_extension = \"pgsql\"\nparallel = false\n")
        .unwrap();

    let config = FrontendConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();
    assert!(!config.parallel);
    assert!(config.recursive);

    let documents = collect_sources(workspace.root(), &config).unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(workspace.relative(&documents[0].path), "a.pgsql");
}

#[test]
fn test_strict_config_reports_errors() {
    let workspace = TestWorkspace::new().unwrap();
    workspace.write("open.sql", "SELECT /* never closed").unwrap();

    let config = FrontendConfig {
        strict: true,
        ..FrontendConfig::default()
    };
    let documents = collect_sources(workspace.root(), &config).unwrap();
    let results = parse_documents(&documents, &config.settings(), config.parallel);

    let message = results[0].result.as_ref().unwrap_err().to_string();
    assert!(message.contains("unterminated block comment"));
    assert!(message.contains("1:8"));
}

#[test]
fn test_invalid_config_file() {
    let workspace = TestWorkspace::new().unwrap();
    let path = workspace.write("bad.toml", "strict = \"maybe\"").unwrap();
    assert!(FrontendConfig::from_file(&path).is_err());
}
