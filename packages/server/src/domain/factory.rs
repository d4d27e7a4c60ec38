//! Construction of new messages.
//!
//! Every message gets a fresh UUID v4 id here; callers never pick ids.

use super::{
    entity::{ENTERED_TEXT, LEFT_TEXT, Message, MessageEdit},
    value_object::{MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp},
};

/// Factory for messages appended to the log.
pub struct MessageFactory;

impl MessageFactory {
    /// A new random message id.
    pub fn new_id() -> MessageId {
        MessageId::from_uuid(uuid::Uuid::new_v4())
    }

    /// Chat message written by `from`.
    pub fn chat(from: ParticipantName, body: MessageEdit, time: Timestamp) -> Message {
        Message::new(Self::new_id(), from, body.to, body.text, body.kind, time)
    }

    /// Notice that `name` joined the room.
    pub fn entered(name: ParticipantName, time: Timestamp) -> Message {
        Self::status(name, ENTERED_TEXT, time)
    }

    /// Notice that `name` was evicted.
    pub fn left(name: ParticipantName, time: Timestamp) -> Message {
        Self::status(name, LEFT_TEXT, time)
    }

    fn status(name: ParticipantName, text: &'static str, time: Timestamp) -> Message {
        Message::new(
            Self::new_id(),
            name,
            Recipient::Everyone,
            MessageText(text.to_string()),
            MessageKind::SystemStatus,
            time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_new_id_is_unique_uuid() {
        // テスト項目: new_id() は毎回異なる UUID v4 形式の ID を生成する
        // when (操作):
        let id1 = MessageFactory::new_id();
        let id2 = MessageFactory::new_id();

        // then (期待する結果):
        assert_eq!(id1.as_str().len(), 36); // ハイフン含む
        assert_eq!(
            uuid::Uuid::parse_str(id1.as_str()).unwrap().get_version_num(),
            4
        );
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_chat_copies_body() {
        // テスト項目: chat() は本文の宛先・テキスト・種別をそのまま使う
        // given (前提条件):
        let body = MessageEdit {
            to: Recipient::new("Beto".to_string()).unwrap(),
            text: MessageText::new("oi".to_string()).unwrap(),
            kind: MessageKind::DirectChat,
        };

        // when (操作):
        let message = MessageFactory::chat(name("Ana"), body, Timestamp::new(42));

        // then (期待する結果):
        assert_eq!(message.from, name("Ana"));
        assert!(message.to.is(&name("Beto")));
        assert_eq!(message.text.as_str(), "oi");
        assert_eq!(message.kind, MessageKind::DirectChat);
        assert_eq!(message.time, Timestamp::new(42));
    }

    #[test]
    fn test_status_notices() {
        // テスト項目: 入退室メッセージは全員宛ての status として作成される
        let entered = MessageFactory::entered(name("Ana"), Timestamp::new(0));
        let left = MessageFactory::left(name("Ana"), Timestamp::new(1));

        for (message, text) in [(&entered, ENTERED_TEXT), (&left, LEFT_TEXT)] {
            assert_eq!(message.kind, MessageKind::SystemStatus);
            assert!(message.to.is_everyone());
            assert_eq!(message.text.as_str(), text);
            assert!(message.is_authored_by(&name("Ana")));
        }
        assert_ne!(entered.id, left.id);
    }
}
