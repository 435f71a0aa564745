//! UI side of the boundary

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use super::protocol::{Call, Envelope, Signal};
use super::subscription::PushSubscription;
use crate::error::{Error, Result};
use crate::models::{Note, PushMessage, SyncResult};
use crate::tcp::TcpDemoListener;

/// Cloneable client for the backend.
///
/// Every call yields exactly one reply or one error. Calls fail with
/// [`Error::BoundaryClosed`] once the backend has stopped.
#[derive(Clone)]
pub struct BoundaryHandle {
    requests: mpsc::Sender<Envelope>,
    signals: mpsc::UnboundedSender<Signal>,
    push: broadcast::Sender<PushMessage>,
    listener: Arc<TcpDemoListener>,
    next_call_id: Arc<AtomicU64>,
}

impl BoundaryHandle {
    pub(crate) fn new(
        requests: mpsc::Sender<Envelope>,
        signals: mpsc::UnboundedSender<Signal>,
        push: broadcast::Sender<PushMessage>,
        listener: Arc<TcpDemoListener>,
    ) -> Self {
        Self {
            requests,
            signals,
            push,
            listener,
            next_call_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// All notes, ascending by id
    pub async fn get_notes(&self) -> Result<Vec<Note>> {
        self.call(|reply| Call::GetNotes { reply }).await?
    }

    /// Store a new note and return it
    pub async fn add_note(&self, text: &str) -> Result<Note> {
        let text = text.to_owned();
        self.call(|reply| Call::AddNote { text, reply }).await?
    }

    /// Run the sync placeholder
    pub async fn sync(&self) -> Result<SyncResult> {
        self.call(|reply| Call::Sync { reply }).await
    }

    /// Receive push messages: the listener's last lifecycle event, if one was
    /// already published, then everything published from now on
    pub fn subscribe(&self) -> PushSubscription {
        let receiver = self.push.subscribe();
        PushSubscription::new(receiver, self.listener.last_event())
    }

    /// Subscribe, then ask the backend for demo traffic
    pub fn on_push(&self) -> Result<PushSubscription> {
        let subscription = self.subscribe();
        self.request_demo()?;
        Ok(subscription)
    }

    /// Fire-and-forget request for demo traffic
    pub fn request_demo(&self) -> Result<()> {
        self.signals
            .send(Signal::RequestDemo)
            .map_err(|_| Error::BoundaryClosed)
    }

    async fn call<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Call) -> Result<T> {
        let call_id = self.next_call_id.fetch_add(1, Ordering::Relaxed) + 1;
        let (reply, response) = oneshot::channel();
        let call = make(reply);
        tracing::trace!(call_id, op = call.name(), "Sending boundary call");

        self.requests
            .send(Envelope { call_id, call })
            .await
            .map_err(|_| Error::BoundaryClosed)?;
        response.await.map_err(|_| Error::BoundaryClosed)
    }
}
