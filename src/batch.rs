//! Пакетный разбор нескольких SQL документов
//!
//! Документы независимы, поэтому разбираются параллельно на пуле rayon;
//! порядок результатов совпадает с порядком документов, а ошибка одного
//! документа не прерывает разбор остальных.

use crate::common::{FrontendConfig, Result};
use crate::parser::{extract_blocks_with, ParserSettings, SqlBlock};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Исходный SQL документ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Читает документ с диска
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path, text))
    }
}

/// Результат разбора одного документа
#[derive(Debug)]
pub struct DocumentBlocks {
    pub path: PathBuf,
    pub result: Result<Vec<SqlBlock>>,
}

impl DocumentBlocks {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Собирает документы из файла или директории.
///
/// Явно указанный файл читается независимо от расширения; в директории
/// отбираются файлы с расширением из конфигурации. Результат отсортирован
/// по пути.
pub fn collect_sources(root: &Path, config: &FrontendConfig) -> Result<Vec<SourceDocument>> {
    if root.is_file() {
        return Ok(vec![SourceDocument::read(root)?]);
    }

    let mut paths = Vec::new();
    collect_paths(root, config, &mut paths)?;
    paths.sort();

    log::debug!("found {} source files under {}", paths.len(), root.display());

    paths
        .iter()
        .map(|path| SourceDocument::read(path))
        .collect()
}

fn collect_paths(dir: &Path, config: &FrontendConfig, paths: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if config.recursive {
                collect_paths(&path, config, paths)?;
            }
        } else if has_extension(&path, &config.file_extension) {
            paths.push(path);
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Разбирает документы на блоки
pub fn parse_documents(
    documents: &[SourceDocument],
    settings: &ParserSettings,
    parallel: bool,
) -> Vec<DocumentBlocks> {
    let parse = |document: &SourceDocument| {
        log::debug!("parsing {}", document.path.display());
        let result = extract_blocks_with(&document.text, settings);
        if let Err(err) = &result {
            log::warn!("{}: {}", document.path.display(), err);
        }
        DocumentBlocks {
            path: document.path.clone(),
            result,
        }
    };

    if parallel {
        documents.par_iter().map(parse).collect()
    } else {
        documents.iter().map(parse).collect()
    }
}
