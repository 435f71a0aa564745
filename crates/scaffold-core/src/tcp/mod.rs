//! TCP demo listener
//!
//! Binds one loopback listener and reports the outcome on the push channel:
//! a `tcp-demo` message once listening, or a `tcp-data` message carrying the
//! bind error. The last of those events is kept for subscribers that arrive
//! later. Accepted connections are drained and otherwise ignored.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;

use crate::config::TcpDemoConfig;
use crate::error::{Error, Result};
use crate::models::PushMessage;

/// Listener lifecycle. `Listening` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerState {
    Unstarted,
    Starting,
    Listening(SocketAddr),
    Failed(String),
}

/// One-shot TCP listener publishing lifecycle events
pub struct TcpDemoListener {
    config: TcpDemoConfig,
    push: broadcast::Sender<PushMessage>,
    state: Mutex<ListenerState>,
    last_event: Mutex<Option<PushMessage>>,
}

/// Pause after a failed `accept` so a persistent error does not spin
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

impl TcpDemoListener {
    pub fn new(config: TcpDemoConfig, push: broadcast::Sender<PushMessage>) -> Self {
        Self {
            config,
            push,
            state: Mutex::new(ListenerState::Unstarted),
            last_event: Mutex::new(None),
        }
    }

    pub fn state(&self) -> ListenerState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bound address once listening
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match self.state() {
            ListenerState::Listening(addr) => Some(addr),
            _ => None,
        }
    }

    /// Most recent lifecycle event, if the listener got that far
    pub fn last_event(&self) -> Option<PushMessage> {
        self.last_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bind the listener and publish the outcome.
    ///
    /// Only the first call does anything; later calls return the current
    /// state, whether or not the first attempt succeeded. Bind errors are
    /// published, not returned.
    pub async fn start(&self) -> ListenerState {
        if !self.claim_start() {
            tracing::debug!("TCP demo listener already started");
            return self.state();
        }

        match self.bind().await {
            Ok((listener, local)) => {
                tracing::info!("TCP demo listener bound on {local}");
                self.set_state(ListenerState::Listening(local));
                self.publish(PushMessage::listening(
                    &self.config.host,
                    local.port(),
                    Utc::now(),
                ));
                tokio::spawn(accept_loop(listener));
            }
            Err(error) => {
                tracing::warn!("{error}");
                let message = match &error {
                    Error::ListenerBind { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                self.set_state(ListenerState::Failed(error.to_string()));
                self.publish(PushMessage::listener_error(&message, Utc::now()));
            }
        }

        self.state()
    }

    fn claim_start(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == ListenerState::Unstarted {
            *state = ListenerState::Starting;
            true
        } else {
            false
        }
    }

    fn set_state(&self, next: ListenerState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    async fn bind(&self) -> Result<(TcpListener, SocketAddr)> {
        let addr = self.config.address();
        let bind_error = |source| Error::ListenerBind {
            addr: addr.clone(),
            source,
        };

        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(bind_error)?;
        let local = listener.local_addr().map_err(bind_error)?;
        Ok((listener, local))
    }

    fn publish(&self, message: PushMessage) {
        *self
            .last_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(message.clone());
        if self.push.send(message).is_err() {
            tracing::debug!("No push subscribers for TCP demo event");
        }
    }
}

async fn accept_loop(listener: TcpListener) {
    serve_accepts(|| listener.accept()).await;
}

/// Hand every accepted connection to [`drain`], pausing after failures.
async fn serve_accepts<F, Fut>(mut accept: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<(TcpStream, SocketAddr)>>,
{
    loop {
        match accept().await {
            Ok((stream, peer)) => {
                tracing::debug!("TCP demo connection from {peer}");
                tokio::spawn(drain(stream));
            }
            Err(error) => {
                tracing::warn!("TCP demo accept failed: {error}");
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
            }
        }
    }
}

/// Read and discard everything the peer sends.
async fn drain(mut stream: TcpStream) {
    if let Err(error) = tokio::io::copy(&mut stream, &mut tokio::io::sink()).await {
        tracing::debug!("TCP demo connection closed: {error}");
    }
}
