//! Messages delivered over the backend-to-UI push channel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::util::iso_timestamp;

/// Push message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PushKind {
    /// Listener lifecycle event
    TcpDemo,
    /// Listener data or error event
    TcpData,
}

impl PushKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TcpDemo => "tcp-demo",
            Self::TcpData => "tcp-data",
        }
    }
}

/// A single push notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PushKind,
    pub payload: Value,
    pub timestamp: String,
}

impl PushMessage {
    /// Listener bound successfully
    #[must_use]
    pub fn listening(host: &str, port: u16, at: DateTime<Utc>) -> Self {
        Self {
            id: format!("tcp-demo-{}", at.timestamp_millis()),
            kind: PushKind::TcpDemo,
            payload: json!({
                "host": host,
                "port": port,
                "info": "TCP demo server is listening",
            }),
            timestamp: iso_timestamp(at),
        }
    }

    /// Listener failed
    #[must_use]
    pub fn listener_error(message: &str, at: DateTime<Utc>) -> Self {
        Self {
            id: format!("tcp-error-{}", at.timestamp_millis()),
            kind: PushKind::TcpData,
            payload: json!({ "error": message }),
            timestamp: iso_timestamp(at),
        }
    }

    /// Payload rendered as indented JSON
    #[must_use]
    pub fn pretty_payload(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string())
    }
}
