//! Application services
//!
//! The backend runtime that serves the UI through the boundary.

mod backend;

pub use backend::{backend, BackendRuntime};
