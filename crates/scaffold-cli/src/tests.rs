use clap::Parser;
use pretty_assertions::assert_eq;
use scaffold_core::boundary;
use scaffold_core::{AppConfig, Note, NoteId, NoteStore, NotesService, PushMessage};

use crate::cli::{Cli, Commands};
use crate::commands::common::{format_note_line, format_push_line, resolve_note_text};
use crate::commands::{run_add, run_list, run_sync};
use crate::error::CliError;

fn note(id: i64, text: &str) -> Note {
    Note {
        id: NoteId::new(id),
        text: text.to_string(),
        created_at: "2024-05-01T10:00:00.000Z".to_string(),
    }
}

#[test]
fn resolve_note_text_joins_words() {
    let parts = vec!["buy".to_string(), "milk".to_string()];
    assert_eq!(resolve_note_text(&parts).unwrap(), "buy milk");
}

#[test]
fn resolve_note_text_rejects_blank_input() {
    assert!(matches!(resolve_note_text(&[]), Err(CliError::EmptyText)));
    assert!(matches!(
        resolve_note_text(&["  ".to_string()]),
        Err(CliError::EmptyText)
    ));
}

#[test]
fn format_note_line_flattens_newlines() {
    assert_eq!(
        format_note_line(&note(3, "first\nsecond")),
        "   3  2024-05-01T10:00:00.000Z  first second"
    );
}

#[test]
fn format_push_line_uses_wire_field_names() {
    let at = chrono::DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let line = format_push_line(&PushMessage::listening("127.0.0.1", 5555, at)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();

    assert_eq!(value["type"], "tcp-demo");
    assert_eq!(value["payload"]["port"], 5555);
    assert!(!line.contains('\n'));
}

#[test]
fn parses_add_with_global_data_dir() {
    let cli = Cli::try_parse_from(["scaffold", "add", "hello", "world", "--data-dir", "/tmp/x"])
        .unwrap();

    assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/x")));
    match cli.command {
        Commands::Add { text } => assert_eq!(text, vec!["hello", "world"]),
        _ => panic!("expected add"),
    }
}

#[test]
fn parses_list_json_flag() {
    let cli = Cli::try_parse_from(["scaffold", "list", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::List { json: true }));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["scaffold"]).is_err());
}

#[tokio::test]
async fn add_then_list_through_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::with_data_dir(dir.path());
    let service = NotesService::new(NoteStore::new(config.db_path()));
    let (backend, handle) = boundary::connect(service, config.tcp.clone());
    let task = backend.without_tcp_demo().spawn();

    run_add(&handle, &["first".to_string()]).await.unwrap();
    run_add(&handle, &["second".to_string(), "note".to_string()])
        .await
        .unwrap();
    run_list(&handle, true).await.unwrap();
    run_sync(&handle, false).await.unwrap();

    let texts: Vec<String> = handle
        .get_notes()
        .await
        .unwrap()
        .into_iter()
        .map(|note| note.text)
        .collect();
    assert_eq!(texts, vec!["first", "second note"]);
    assert!(config.db_path().exists());

    task.abort();
}

#[tokio::test]
async fn add_rejects_blank_text_without_touching_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::with_data_dir(dir.path());
    let service = NotesService::new(NoteStore::new(config.db_path()));
    let (backend, handle) = boundary::connect(service, config.tcp.clone());
    let task = backend.without_tcp_demo().spawn();

    let result = run_add(&handle, &["   ".to_string()]).await;

    assert!(matches!(result, Err(CliError::EmptyText)));
    assert!(!config.db_path().exists());
    task.abort();
}
