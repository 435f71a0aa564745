//! scaffold-core - Core library for Scaffold
//!
//! This crate contains the note model, the embedded record store, the notes
//! service, the UI/backend boundary and the TCP demo listener shared by the
//! desktop app and the CLI.

pub mod boundary;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod tcp;
pub mod util;

pub use boundary::{Backend, BoundaryHandle, PushSubscription};
pub use config::{AppConfig, TcpDemoConfig};
pub use error::{Error, Result};
pub use models::{Note, NoteId, PushKind, PushMessage, SyncResult};
pub use services::{NoteStore, NotesService};
