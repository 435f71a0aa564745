use scaffold_core::BoundaryHandle;

use crate::commands::common::resolve_note_text;
use crate::error::CliError;

pub async fn run_add(handle: &BoundaryHandle, text_parts: &[String]) -> Result<(), CliError> {
    let text = resolve_note_text(text_parts)?;
    let note = handle.add_note(&text).await?;

    tracing::debug!("Stored note {} at {}", note.id, note.created_at);
    println!("{}", note.id);
    Ok(())
}
