//! Тесты полного цикла: исходный текст → токены → блоки → метаданные

use super::common::*;
use pgcodegen::{extract_blocks, parse_comment_metadata, tokenize, TokenKind};

#[test]
fn test_schema_blocks() {
    let blocks = extract_blocks(SCHEMA_SQL).unwrap();
    assert_eq!(blocks.len(), 3);

    let table = &blocks[0];
    assert_eq!(
        table.header_comment.as_deref(),
        Some("Пользователи системы comment: Users; to_name: User;")
    );
    assert!(table.content.starts_with("CREATE TABLE public.users(id BIGSERIAL"));
    assert!(table.content.ends_with("DEFAULT now());"));
    assert_eq!(table.start_line, 3);
    assert_eq!(table.end_line, 7);

    let index = &blocks[1];
    assert_eq!(index.header_comment, None);
    assert_eq!(
        index.content,
        "CREATE INDEX users_email_idx ON public.users(\"Email\");"
    );

    let function = &blocks[2];
    assert_eq!(function.header_comment.as_deref(), Some("Обновляет updated_at"));
    assert!(function.content.ends_with("$body$ LANGUAGE plpgsql;"));
    assert_eq!(function.inline_comments, None);
}

#[test]
fn test_schema_metadata() {
    let blocks = extract_blocks(SCHEMA_SQL).unwrap();
    let table = &blocks[0];

    let header = table.header_metadata().unwrap();
    assert_eq!(header.comment, "Users");
    assert_eq!(header.to_name.as_deref(), Some("User"));

    let columns = table.inline_metadata();
    assert_eq!(columns.len(), 2);

    assert_eq!(columns[0].0, "id");
    assert_eq!(columns[0].1.comment, "Identifier");
    assert_eq!(columns[0].1.to_data_type.as_deref(), Some("BIGINT"));

    assert_eq!(columns[1].0, "Email");
    assert_eq!(columns[1].1.to_name.as_deref(), Some("EmailAddress"));
    assert_eq!(columns[1].1.comment, "to_name(EmailAddress)");
}

#[test]
fn test_raw_content_matches_source() {
    let blocks = extract_blocks(SCHEMA_SQL).unwrap();

    for block in &blocks {
        let body = match &block.header_comment {
            Some(header) => block
                .raw_content
                .strip_prefix(&format!("-- {}\n", header))
                .unwrap(),
            None => block.raw_content.as_str(),
        };
        assert!(SCHEMA_SQL.contains(body));
        assert!(body.ends_with(';'));
    }
}

#[test]
fn test_query_blocks() {
    let blocks = extract_blocks(QUERIES_SQL).unwrap();
    assert_eq!(blocks.len(), 2);

    assert_eq!(blocks[0].header_comment.as_deref(), Some("name: GetUser :one"));
    assert_eq!(
        blocks[0].content,
        "SELECT id, \"Email\" FROM users WHERE id = $ 1;"
    );

    assert_eq!(blocks[1].header_comment.as_deref(), Some("name: ListUsers :many"));
    assert_eq!(
        blocks[1].content,
        "SELECT * FROM users WHERE tags @>$ 1 ORDER BY id;"
    );

    let metadata = parse_comment_metadata(blocks[0].header_comment.as_deref().unwrap());
    assert_eq!(metadata.comment, "name: GetUser :one");
    assert!(!metadata.has_directives());
}

#[test]
fn test_tokens_cover_files() {
    for source in [SCHEMA_SQL, QUERIES_SQL] {
        let tokens = tokenize(source);
        let rebuilt: String = tokens.iter().map(|token| token.text).collect();
        assert_eq!(rebuilt, source);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
        assert!(tokens.iter().all(|token| token.kind != TokenKind::Unknown
            || token.text == ":"));
    }
}

#[test]
fn test_blocks_serialize_to_json() {
    let blocks = extract_blocks(QUERIES_SQL).unwrap();
    let json = serde_json::to_value(&blocks).unwrap();

    assert_eq!(json[0]["header_comment"], "name: GetUser :one");
    assert_eq!(json[0]["start_line"], 2);
    assert!(json[0]["inline_comments"].is_null());
}
