//! Channel-backed event sink.

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{DeliveryError, EventSink, SessionEvent};

/// Hands events to an unbounded mpsc channel, converting them into `T`.
///
/// Sending never blocks, so delivery is fire-and-forget; the receiving task
/// does the actual I/O outside the session lock.
pub struct ChannelEventSink<T> {
    sender: UnboundedSender<T>,
}

impl<T> ChannelEventSink<T> {
    pub fn new(sender: UnboundedSender<T>) -> Self {
        Self { sender }
    }
}

impl<T> EventSink for ChannelEventSink<T>
where
    T: From<SessionEvent> + Send + 'static,
{
    fn deliver(&self, event: &SessionEvent) -> Result<(), DeliveryError> {
        self.sender
            .send(T::from(event.clone()))
            .map_err(|_| DeliveryError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::ParticipantName, infrastructure::dto::websocket::ServerMessage,
    };
    use tokio::sync::mpsc;

    #[test]
    fn test_deliver_converts_event() {
        // テスト項目: イベントが変換されてチャンネルに送られる
        // given (前提条件):
        let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();
        let sink = ChannelEventSink::new(tx);
        let event = SessionEvent::Said {
            name: ParticipantName::new("alice").unwrap(),
            text: "Hello!".to_string(),
        };

        // when (操作):
        let result = sink.deliver(&event);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(
            rx.try_recv().unwrap(),
            ServerMessage::Message {
                user_name: "alice".to_string(),
                user_msg: "Hello!".to_string(),
            }
        );
    }

    #[test]
    fn test_deliver_to_closed_channel_fails() {
        // テスト項目: 受信側が破棄されている場合は DeliveryError が返される
        // given (前提条件):
        let (tx, rx) = mpsc::unbounded_channel::<SessionEvent>();
        let sink = ChannelEventSink::new(tx);
        drop(rx);

        // when (操作):
        let result = sink.deliver(&SessionEvent::Joined {
            name: ParticipantName::new("bob").unwrap(),
        });

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::ChannelClosed));
    }
}
