//! Services built on the database layer.

mod notes;
mod store;

pub use notes::NotesService;
pub use store::NoteStore;
