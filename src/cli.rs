//! CLI интерфейс для pgcodegen
//!
//! Команды для просмотра токенов, блоков инструкций и метаданных комментариев

use crate::batch::{collect_sources, parse_documents, DocumentBlocks};
use crate::common::{Error, FrontendConfig, Result};
use crate::parser::{parse_comment_metadata, Lexer, SqlBlock};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// pgcodegen - фронтенд генератора кода для PostgreSQL
#[derive(Parser)]
#[command(name = "pgcodegen")]
#[command(about = "pgcodegen - PostgreSQL lexer and statement block parser")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Строгий режим: незавершенные конструкции считаются ошибкой
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Показать токены файла
    Tokens {
        /// SQL файл
        file: PathBuf,

        /// Скрыть пробелы и комментарии
        #[arg(long)]
        significant: bool,
    },

    /// Разбить файл или директорию на блоки инструкций
    Blocks {
        /// SQL файл или директория
        path: PathBuf,

        /// Формат вывода
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Разобрать директивы комментария
    Comment {
        /// Текст комментария
        text: String,
    },

    /// Показать действующую конфигурацию
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Результат разбора документа для вывода в JSON
#[derive(Serialize)]
struct DocumentReport<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocks: Option<&'a [SqlBlock]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a DocumentBlocks> for DocumentReport<'a> {
    fn from(document: &'a DocumentBlocks) -> Self {
        match &document.result {
            Ok(blocks) => Self {
                path: &document.path,
                blocks: Some(blocks),
                error: None,
            },
            Err(err) => Self {
                path: &document.path,
                blocks: None,
                error: Some(err.to_string()),
            },
        }
    }
}

impl Cli {
    /// Загружает конфигурацию: файл, затем окружение, затем аргументы
    pub fn load_config(&self) -> Result<FrontendConfig> {
        let mut config = match &self.config {
            Some(path) => FrontendConfig::from_file(path)?,
            None => FrontendConfig::default(),
        };

        config = config.merge(FrontendConfig::from_env()?);

        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.strict {
            config.strict = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду; `false`, если хотя бы один документ не разобран
    pub fn execute(&self, config: &FrontendConfig) -> Result<bool> {
        match &self.command {
            Commands::Tokens { file, significant } => {
                self.print_tokens(file, *significant, config)?;
                Ok(true)
            }
            Commands::Blocks { path, format } => self.print_blocks(path, *format, config),
            Commands::Comment { text } => {
                let metadata = parse_comment_metadata(text);
                println!("{}", serde_json::to_string_pretty(&metadata)?);
                Ok(true)
            }
            Commands::Config => {
                let content = toml::to_string_pretty(config)?;
                print!("{}", content);
                Ok(true)
            }
        }
    }

    fn print_tokens(&self, file: &Path, significant: bool, config: &FrontendConfig) -> Result<()> {
        let source = std::fs::read_to_string(file)?;
        let mut lexer = Lexer::with_settings(&source, config.settings());

        for token in lexer.tokenize()? {
            if significant && token.is_trivia() {
                continue;
            }
            println!("{}\t{}\t{:?}", token.position, token.kind, token.text);
        }

        Ok(())
    }

    fn print_blocks(&self, path: &Path, format: OutputFormat, config: &FrontendConfig) -> Result<bool> {
        if !path.exists() {
            return Err(Error::invalid_input(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }

        let documents = collect_sources(path, config)?;
        let results = parse_documents(&documents, &config.settings(), config.parallel);
        let success = results.iter().all(DocumentBlocks::is_ok);

        match format {
            OutputFormat::Json => {
                let reports: Vec<DocumentReport<'_>> =
                    results.iter().map(DocumentReport::from).collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
            OutputFormat::Text => {
                for document in &results {
                    print_text_report(document);
                }
            }
        }

        Ok(success)
    }
}

fn print_text_report(document: &DocumentBlocks) {
    println!("== {}", document.path.display());

    let blocks = match &document.result {
        Ok(blocks) => blocks,
        Err(err) => {
            println!("   error: {}", err);
            return;
        }
    };

    for (index, block) in blocks.iter().enumerate() {
        println!(
            "[{}] lines {}-{}: {}",
            index + 1,
            block.start_line,
            block.end_line,
            block.content
        );
        if let Some(header) = &block.header_comment {
            println!("    header: {}", header);
        }
        for (key, metadata) in block.inline_metadata() {
            println!(
                "    {}: {} (type: {}, name: {})",
                key,
                metadata.comment,
                metadata.to_data_type.as_deref().unwrap_or("-"),
                metadata.to_name.as_deref().unwrap_or("-")
            );
        }
    }
}
