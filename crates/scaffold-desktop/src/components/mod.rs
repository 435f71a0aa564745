//! UI Components
//!
//! Reusable UI components for the desktop application.

mod counter;
mod notes_demo;
mod tcp_messages;

pub use counter::Counter;
pub use notes_demo::NotesDemo;
pub use tcp_messages::TcpMessages;
