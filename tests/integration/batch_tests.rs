//! Тесты пакетного разбора директорий

use super::common::*;
use pgcodegen::batch::{collect_sources, parse_documents, SourceDocument};
use pgcodegen::common::FrontendConfig;
use pgcodegen::ParserSettings;

fn workspace() -> TestWorkspace {
    let workspace = TestWorkspace::new().unwrap();
    workspace.write("schema.sql", SCHEMA_SQL).unwrap();
    workspace.write("queries/users.sql", QUERIES_SQL).unwrap();
    workspace.write("queries/EXTRA.SQL", "SELECT 1;").unwrap();
    workspace.write("notes.txt", "not sql").unwrap();
    workspace
}

#[test]
fn test_collect_sources_recursive() {
    let workspace = workspace();
    let documents = collect_sources(workspace.root(), &FrontendConfig::default()).unwrap();

    let names: Vec<String> = documents
        .iter()
        .map(|document| workspace.relative(&document.path))
        .collect();
    assert_eq!(
        names,
        vec!["queries/EXTRA.SQL", "queries/users.sql", "schema.sql"]
    );
    assert_eq!(documents[2].text, SCHEMA_SQL);
}

#[test]
fn test_collect_sources_flat() {
    let workspace = workspace();
    let config = FrontendConfig {
        recursive: false,
        ..FrontendConfig::default()
    };

    let documents = collect_sources(workspace.root(), &config).unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(workspace.relative(&documents[0].path), "schema.sql");
}

#[test]
fn test_collect_single_file_ignores_extension() {
    let workspace = workspace();
    let path = workspace.root().join("notes.txt");

    let documents = collect_sources(&path, &FrontendConfig::default()).unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].text, "not sql");
}

#[test]
fn test_collect_missing_directory() {
    let workspace = workspace();
    let missing = workspace.root().join("missing");
    assert!(collect_sources(&missing, &FrontendConfig::default()).is_err());
}

#[test]
fn test_parse_documents_keeps_order() {
    let documents = vec![
        SourceDocument::new("a.sql", "SELECT 1; SELECT 2;"),
        SourceDocument::new("b.sql", "   "),
        SourceDocument::new("c.sql", QUERIES_SQL),
    ];

    let results = parse_documents(&documents, &ParserSettings::default(), true);
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].path.to_str(), Some("a.sql"));
    assert_eq!(results[0].result.as_ref().unwrap().len(), 2);

    assert!(!results[1].is_ok());
    assert!(results[1].result.as_ref().unwrap_err().is_invalid_input());

    assert_eq!(results[2].result.as_ref().unwrap().len(), 2);
}

#[test]
fn test_parallel_matches_sequential() {
    let documents: Vec<SourceDocument> = (0..32)
        .map(|i| {
            let text = format!("-- name: Q{} :one\nSELECT {} FROM t WHERE id = $1;\n{}", i, i, SCHEMA_SQL);
            SourceDocument::new(format!("{}.sql", i), text)
        })
        .collect();
    let settings = ParserSettings::default();

    let parallel = parse_documents(&documents, &settings, true);
    let sequential = parse_documents(&documents, &settings, false);

    assert_eq!(parallel.len(), sequential.len());
    for (left, right) in parallel.iter().zip(&sequential) {
        assert_eq!(left.path, right.path);
        assert_eq!(
            left.result.as_ref().unwrap(),
            right.result.as_ref().unwrap()
        );
    }
}

#[test]
fn test_strict_failure_is_isolated() {
    let documents = vec![
        SourceDocument::new("bad.sql", "SELECT 'open"),
        SourceDocument::new("good.sql", "SELECT 1;"),
    ];

    let results = parse_documents(&documents, &ParserSettings::strict(), true);
    assert!(!results[0].is_ok());
    assert!(results[1].is_ok());
}
