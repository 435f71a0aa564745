//! Data models for Scaffold

mod note;
mod push;
mod sync_result;

pub use note::{Note, NoteId};
pub use push::{PushKind, PushMessage};
pub use sync_result::SyncResult;
