//! Backend side of the boundary

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;

use super::protocol::{Call, Envelope, Signal};
use crate::services::NotesService;
use crate::tcp::TcpDemoListener;

/// Owns the notes service and the TCP demo listener and serves boundary calls.
pub struct Backend {
    service: NotesService,
    listener: Arc<TcpDemoListener>,
    start_listener: bool,
    requests: mpsc::Receiver<Envelope>,
    signals: mpsc::UnboundedReceiver<Signal>,
}

impl Backend {
    pub(crate) fn new(
        service: NotesService,
        listener: Arc<TcpDemoListener>,
        requests: mpsc::Receiver<Envelope>,
        signals: mpsc::UnboundedReceiver<Signal>,
    ) -> Self {
        Self {
            service,
            listener,
            start_listener: true,
            requests,
            signals,
        }
    }

    /// Serve notes calls only; the TCP demo listener is never bound
    #[must_use]
    pub fn without_tcp_demo(mut self) -> Self {
        self.start_listener = false;
        self
    }

    /// Run on the current tokio runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Start the TCP demo listener, then serve calls and signals until every
    /// [`super::BoundaryHandle`] is dropped.
    ///
    /// Each call runs in its own task, so a slow call never holds up others.
    pub async fn run(mut self) {
        tracing::debug!("Boundary backend started");
        if self.start_listener {
            let listener = Arc::clone(&self.listener);
            tokio::spawn(async move {
                listener.start().await;
            });
        }
        loop {
            tokio::select! {
                Some(envelope) = self.requests.recv() => self.dispatch(envelope),
                Some(signal) = self.signals.recv() => self.handle_signal(signal),
                else => break,
            }
        }
        tracing::debug!("Boundary backend stopped");
    }

    fn dispatch(&self, envelope: Envelope) {
        let Envelope { call_id, call } = envelope;
        let span = tracing::debug_span!("boundary_call", call_id, op = call.name());
        let service = self.service.clone();
        tokio::spawn(serve(service, call).instrument(span));
    }

    fn handle_signal(&self, signal: Signal) {
        match signal {
            Signal::RequestDemo => {
                tracing::debug!(
                    state = ?self.listener.state(),
                    "Demo requested; the listener reports its own lifecycle"
                );
            }
        }
    }
}

async fn serve(service: NotesService, call: Call) {
    let delivered = match call {
        Call::GetNotes { reply } => reply.send(service.get_notes().await).is_ok(),
        Call::AddNote { text, reply } => reply.send(service.add_note(&text).await).is_ok(),
        Call::Sync { reply } => reply.send(service.sync()).is_ok(),
    };

    if !delivered {
        tracing::debug!("Caller went away before the reply was sent");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::net::TcpStream;

    use crate::boundary::connect;
    use crate::config::TcpDemoConfig;
    use crate::services::{NoteStore, NotesService};
    use crate::tcp::ListenerState;

    fn loopback_any_port() -> TcpDemoConfig {
        TcpDemoConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    #[tokio::test]
    async fn test_run_binds_listener_before_any_signal() {
        let (backend, handle) = connect(
            NotesService::new(NoteStore::in_memory()),
            loopback_any_port(),
        );
        let listener = std::sync::Arc::clone(&backend.listener);
        backend.spawn();

        let addr = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if let Some(addr) = listener.local_addr() {
                    break addr;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();

        assert!(TcpStream::connect(addr).await.is_ok());
        drop(handle);
    }

    #[tokio::test]
    async fn test_without_tcp_demo_leaves_listener_unstarted() {
        let (backend, handle) = connect(
            NotesService::new(NoteStore::in_memory()),
            loopback_any_port(),
        );
        let listener = std::sync::Arc::clone(&backend.listener);
        backend.without_tcp_demo().spawn();

        handle.request_demo().unwrap();
        assert!(handle.get_notes().await.unwrap().is_empty());
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(listener.state(), ListenerState::Unstarted);
        assert!(handle.subscribe().try_recv().is_err());
    }
}
