//! UI/backend boundary
//!
//! The UI never touches the store directly. It holds a [`BoundaryHandle`] and
//! talks to a [`Backend`] task over two channels: a request channel where
//! every call carries its own reply slot, and a broadcast push channel for
//! backend-originated events. Fire-and-forget [`Signal`]s travel on a third,
//! unbounded queue.
//!
//! The backend starts the TCP demo listener as soon as it runs. Subscribers
//! that arrive after the listener reported its outcome get that event
//! replayed through [`PushSubscription`].

mod backend;
mod handle;
mod protocol;
mod subscription;

pub use backend::Backend;
pub use handle::BoundaryHandle;
pub use protocol::Signal;
pub use subscription::PushSubscription;

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::config::TcpDemoConfig;
use crate::services::NotesService;
use crate::tcp::TcpDemoListener;

/// Pending calls the request channel holds before senders wait
const REQUEST_CAPACITY: usize = 64;
/// Push messages kept for slow subscribers
const PUSH_CAPACITY: usize = 64;

/// Build a backend and the handle that talks to it.
///
/// The backend does nothing until [`Backend::run`] is polled, typically via
/// [`Backend::spawn`].
pub fn connect(service: NotesService, tcp: TcpDemoConfig) -> (Backend, BoundaryHandle) {
    let (request_tx, request_rx) = mpsc::channel(REQUEST_CAPACITY);
    let (signal_tx, signal_rx) = mpsc::unbounded_channel();
    let (push_tx, _) = broadcast::channel(PUSH_CAPACITY);

    let listener = Arc::new(TcpDemoListener::new(tcp, push_tx.clone()));
    let backend = Backend::new(service, Arc::clone(&listener), request_rx, signal_rx);
    let handle = BoundaryHandle::new(request_tx, signal_tx, push_tx, listener);
    (backend, handle)
}
