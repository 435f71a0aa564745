use scaffold_core::util::normalize_note_text;
use scaffold_core::{Note, PushMessage};

use crate::error::CliError;

/// Join command-line words into note text, rejecting blank input
pub fn resolve_note_text(parts: &[String]) -> Result<String, CliError> {
    normalize_note_text(&parts.join(" ")).ok_or(CliError::EmptyText)
}

/// `id  created_at  text`, one note per line
pub fn format_note_line(note: &Note) -> String {
    let text = note.text.replace('\n', " ");
    format!("{:>4}  {}  {}", note.id, note.created_at, text)
}

/// One compact JSON object per push message
pub fn format_push_line(message: &PushMessage) -> Result<String, CliError> {
    Ok(serde_json::to_string(message)?)
}
