//! Messages carried over the boundary channels

use tokio::sync::oneshot;

use crate::error::Result;
use crate::models::{Note, SyncResult};

/// A request together with the slot its single reply goes to
#[derive(Debug)]
pub(crate) enum Call {
    GetNotes {
        reply: oneshot::Sender<Result<Vec<Note>>>,
    },
    AddNote {
        text: String,
        reply: oneshot::Sender<Result<Note>>,
    },
    Sync {
        reply: oneshot::Sender<SyncResult>,
    },
}

impl Call {
    /// Operation name used in logs
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::GetNotes { .. } => "notes:getNotes",
            Self::AddNote { .. } => "notes:addNote",
            Self::Sync { .. } => "notes:sync",
        }
    }
}

/// A call tagged with its correlation id
#[derive(Debug)]
pub(crate) struct Envelope {
    pub(crate) call_id: u64,
    pub(crate) call: Call,
}

/// Fire-and-forget messages from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A push subscriber wants to see demo traffic
    RequestDemo,
}
