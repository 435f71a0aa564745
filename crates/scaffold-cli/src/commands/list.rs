use scaffold_core::BoundaryHandle;

use crate::commands::common::format_note_line;
use crate::error::CliError;

pub async fn run_list(handle: &BoundaryHandle, as_json: bool) -> Result<(), CliError> {
    let notes = handle.get_notes().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes yet.");
        return Ok(());
    }

    for note in &notes {
        println!("{}", format_note_line(note));
    }
    Ok(())
}
