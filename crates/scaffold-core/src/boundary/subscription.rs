//! Push channel receiver that replays the listener's last lifecycle event

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use crate::models::PushMessage;

/// Receives push messages, starting with the lifecycle event published before
/// the subscription existed, if any.
///
/// An event that is both replayed and still queued on the channel is
/// delivered once.
pub struct PushSubscription {
    replay: Option<PushMessage>,
    replayed_id: Option<String>,
    receiver: broadcast::Receiver<PushMessage>,
}

impl PushSubscription {
    pub(crate) fn new(
        receiver: broadcast::Receiver<PushMessage>,
        replay: Option<PushMessage>,
    ) -> Self {
        Self {
            replayed_id: replay.as_ref().map(|message| message.id.clone()),
            replay,
            receiver,
        }
    }

    /// Next push message, waiting if none is queued
    pub async fn recv(&mut self) -> Result<PushMessage, RecvError> {
        if let Some(message) = self.replay.take() {
            return Ok(message);
        }
        loop {
            let message = self.receiver.recv().await?;
            if !self.is_duplicate(&message) {
                return Ok(message);
            }
        }
    }

    /// Next push message if one is queued
    pub fn try_recv(&mut self) -> Result<PushMessage, TryRecvError> {
        if let Some(message) = self.replay.take() {
            return Ok(message);
        }
        loop {
            let message = self.receiver.try_recv()?;
            if !self.is_duplicate(&message) {
                return Ok(message);
            }
        }
    }

    fn is_duplicate(&mut self, message: &PushMessage) -> bool {
        if self.replayed_id.as_deref() == Some(message.id.as_str()) {
            self.replayed_id = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn listening() -> PushMessage {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        PushMessage::listening("127.0.0.1", 5555, at)
    }

    #[test]
    fn test_replayed_event_comes_first() {
        let (push, receiver) = broadcast::channel(8);
        let mut subscription = PushSubscription::new(receiver, Some(listening()));

        let error = PushMessage::listener_error("boom", Utc::now());
        push.send(error.clone()).unwrap();

        assert_eq!(subscription.try_recv().unwrap(), listening());
        assert_eq!(subscription.try_recv().unwrap(), error);
        assert!(matches!(subscription.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_replayed_event_is_not_delivered_twice() {
        let (push, receiver) = broadcast::channel(8);
        let mut subscription = PushSubscription::new(receiver, Some(listening()));
        push.send(listening()).unwrap();

        assert_eq!(subscription.try_recv().unwrap(), listening());
        assert!(matches!(subscription.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_without_replay_reads_the_channel() {
        let (push, receiver) = broadcast::channel(8);
        let mut subscription = PushSubscription::new(receiver, None);
        push.send(listening()).unwrap();
        drop(push);

        assert_eq!(subscription.recv().await.unwrap(), listening());
        assert!(matches!(subscription.recv().await, Err(RecvError::Closed)));
    }
}
