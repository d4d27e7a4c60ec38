//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};

use super::{
    error::{MessageLogError, RegistryError},
    value_object::{MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp},
};

/// Text of the synthetic message appended when a participant registers
pub const ENTERED_TEXT: &str = "entra na sala...";

/// Text of the synthetic message appended when a participant is evicted
pub const LEFT_TEXT: &str = "sai da sala...";

/// Represents a participant present in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant identity (display name)
    pub name: ParticipantName,
    /// Last registration or heartbeat
    pub last_seen: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_seen: Timestamp) -> Self {
        Self { name, last_seen }
    }

    /// Whether the participant has not been seen since `cutoff` (inclusive).
    pub fn is_stale(&self, cutoff: Timestamp) -> bool {
        self.last_seen <= cutoff
    }
}

/// Represents a message in the room log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Immutable identifier
    pub id: MessageId,
    /// Immutable author
    pub from: ParticipantName,
    /// Recipient designator
    pub to: Recipient,
    /// Message body
    pub text: MessageText,
    /// Message kind
    pub kind: MessageKind,
    /// Creation time
    pub time: Timestamp,
}

impl Message {
    /// Create a new message
    pub fn new(
        id: MessageId,
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        time: Timestamp,
    ) -> Self {
        Self {
            id,
            from,
            to,
            text,
            kind,
            time,
        }
    }

    /// Whether `name` wrote this message
    pub fn is_authored_by(&self, name: &ParticipantName) -> bool {
        &self.from == name
    }
}

/// The mutable part of a message, as submitted by its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEdit {
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
}

/// Participants currently present in the room
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    /// Registration order
    pub participants: Vec<Participant>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AlreadyRegistered` if the name is taken
    pub fn register(&mut self, participant: Participant) -> Result<(), RegistryError> {
        if self.is_present(&participant.name) {
            return Err(RegistryError::AlreadyRegistered(
                participant.name.into_string(),
            ));
        }
        self.participants.push(participant);
        Ok(())
    }

    /// Refresh a participant's liveness timestamp
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotRegistered` if the name is unknown
    pub fn heartbeat(&mut self, name: &ParticipantName, at: Timestamp) -> Result<(), RegistryError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| &p.name == name)
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))?;
        participant.last_seen = at;
        Ok(())
    }

    /// Remove a participant
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotRegistered` if the name is unknown
    pub fn remove(&mut self, name: &ParticipantName) -> Result<Participant, RegistryError> {
        let index = self
            .participants
            .iter()
            .position(|p| &p.name == name)
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))?;
        Ok(self.participants.remove(index))
    }

    /// Get a participant by name
    pub fn get(&self, name: &ParticipantName) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.name == name)
    }

    pub fn is_present(&self, name: &ParticipantName) -> bool {
        self.get(name).is_some()
    }

    /// Everyone except `viewer`, in registration order
    pub fn list_excluding(&self, viewer: &ParticipantName) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|p| &p.name != viewer)
            .cloned()
            .collect()
    }

    /// Participants not seen since `cutoff`
    pub fn stale(&self, cutoff: Timestamp) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|p| p.is_stale(cutoff))
            .cloned()
            .collect()
    }
}

/// Insertion-ordered message log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    /// Oldest first
    pub messages: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end of the log
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Get a message by id
    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    /// Replace `to`, `text` and `kind` of a message written by `editor`
    ///
    /// # Errors
    ///
    /// * `MessageLogError::NotFound` if no message has this id
    /// * `MessageLogError::NotAuthor` if `editor` is not the author; the
    ///   message is left untouched
    pub fn update(
        &mut self,
        id: &MessageId,
        editor: &ParticipantName,
        edit: MessageEdit,
    ) -> Result<(), MessageLogError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| MessageLogError::NotFound(id.to_string()))?;
        if !message.is_authored_by(editor) {
            return Err(MessageLogError::NotAuthor {
                id: id.to_string(),
                requester: editor.to_string(),
            });
        }
        message.to = edit.to;
        message.text = edit.text;
        message.kind = edit.kind;
        Ok(())
    }

    /// Remove a message written by `requester`
    ///
    /// # Errors
    ///
    /// Same as [`MessageLog::update`]
    pub fn delete(
        &mut self,
        id: &MessageId,
        requester: &ParticipantName,
    ) -> Result<Message, MessageLogError> {
        let index = self
            .messages
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| MessageLogError::NotFound(id.to_string()))?;
        if !self.messages[index].is_authored_by(requester) {
            return Err(MessageLogError::NotAuthor {
                id: id.to_string(),
                requester: requester.to_string(),
            });
        }
        Ok(self.messages.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::MessageFactory;

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    fn chat(from: &str, to: &str, text: &str) -> Message {
        Message::new(
            MessageFactory::new_id(),
            name(from),
            Recipient::new(to.to_string()).unwrap(),
            MessageText::new(text.to_string()).unwrap(),
            MessageKind::BroadcastChat,
            Timestamp::new(1000),
        )
    }

    #[test]
    fn test_registry_register() {
        // テスト項目: 参加者を登録できる
        // given (前提条件):
        let mut registry = Registry::new();

        // when (操作):
        let result = registry.register(Participant::new(name("Ana"), Timestamp::new(1000)));

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(registry.is_present(&name("Ana")));
        assert_eq!(registry.participants.len(), 1);
    }

    #[test]
    fn test_registry_register_duplicate_fails() {
        // テスト項目: 同じ名前の二重登録は Conflict になり、エントリは 1 件のまま
        // given (前提条件):
        let mut registry = Registry::new();
        registry
            .register(Participant::new(name("Ana"), Timestamp::new(1000)))
            .unwrap();

        // when (操作):
        let result = registry.register(Participant::new(name("Ana"), Timestamp::new(2000)));

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RegistryError::AlreadyRegistered("Ana".to_string()))
        );
        assert_eq!(registry.participants.len(), 1);
        assert_eq!(
            registry.get(&name("Ana")).unwrap().last_seen,
            Timestamp::new(1000)
        );
    }

    #[test]
    fn test_registry_heartbeat() {
        // テスト項目: ハートビートで last_seen が更新され、未登録なら NotRegistered
        // given (前提条件):
        let mut registry = Registry::new();
        registry
            .register(Participant::new(name("Ana"), Timestamp::new(1000)))
            .unwrap();

        // when (操作):
        let ok = registry.heartbeat(&name("Ana"), Timestamp::new(5000));
        let missing = registry.heartbeat(&name("Beto"), Timestamp::new(5000));

        // then (期待する結果):
        assert!(ok.is_ok());
        assert_eq!(
            registry.get(&name("Ana")).unwrap().last_seen,
            Timestamp::new(5000)
        );
        assert_eq!(
            missing,
            Err(RegistryError::NotRegistered("Beto".to_string()))
        );
    }

    #[test]
    fn test_registry_list_excluding_and_stale() {
        // テスト項目: 閲覧者を除いた一覧と、閾値以前の参加者の抽出
        // given (前提条件):
        let mut registry = Registry::new();
        registry
            .register(Participant::new(name("Ana"), Timestamp::new(1000)))
            .unwrap();
        registry
            .register(Participant::new(name("Beto"), Timestamp::new(9000)))
            .unwrap();
        registry
            .register(Participant::new(name("Caio"), Timestamp::new(3000)))
            .unwrap();

        // when (操作):
        let others = registry.list_excluding(&name("Beto"));
        let stale = registry.stale(Timestamp::new(3000));

        // then (期待する結果): 登録順が保たれる
        let others: Vec<&str> = others.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(others, vec!["Ana", "Caio"]);
        let stale: Vec<&str> = stale.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(stale, vec!["Ana", "Caio"]);
    }

    #[test]
    fn test_registry_remove() {
        // テスト項目: 参加者を削除できる
        let mut registry = Registry::new();
        registry
            .register(Participant::new(name("Ana"), Timestamp::new(1000)))
            .unwrap();

        let removed = registry.remove(&name("Ana")).unwrap();

        assert_eq!(removed.name, name("Ana"));
        assert!(!registry.is_present(&name("Ana")));
        assert!(registry.remove(&name("Ana")).is_err());
    }

    #[test]
    fn test_message_log_update_by_author() {
        // テスト項目: 作成者による編集は to/text/kind のみを置き換える
        // given (前提条件):
        let mut log = MessageLog::new();
        let original = chat("Ana", "Todos", "hi");
        log.append(original.clone());

        // when (操作):
        let edit = MessageEdit {
            to: Recipient::new("Beto".to_string()).unwrap(),
            text: MessageText::new("psst".to_string()).unwrap(),
            kind: MessageKind::DirectChat,
        };
        let result = log.update(&original.id, &name("Ana"), edit);

        // then (期待する結果):
        assert!(result.is_ok());
        let updated = log.get(&original.id).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.from, original.from);
        assert_eq!(updated.time, original.time);
        assert_eq!(updated.to.as_str(), "Beto");
        assert_eq!(updated.text.as_str(), "psst");
        assert_eq!(updated.kind, MessageKind::DirectChat);
    }

    #[test]
    fn test_message_log_update_by_other_is_forbidden() {
        // テスト項目: 作成者以外の編集は NotAuthor になり、メッセージは変わらない
        // given (前提条件):
        let mut log = MessageLog::new();
        let original = chat("Ana", "Todos", "hi");
        log.append(original.clone());

        // when (操作):
        let edit = MessageEdit {
            to: Recipient::Everyone,
            text: MessageText::new("hijacked".to_string()).unwrap(),
            kind: MessageKind::BroadcastChat,
        };
        let result = log.update(&original.id, &name("Beto"), edit);

        // then (期待する結果):
        assert!(matches!(result, Err(MessageLogError::NotAuthor { .. })));
        assert_eq!(log.get(&original.id), Some(&original));
    }

    #[test]
    fn test_message_log_delete() {
        // テスト項目: 作成者のみ削除でき、存在しない ID は NotFound
        // given (前提条件):
        let mut log = MessageLog::new();
        let first = chat("Ana", "Todos", "one");
        let second = chat("Ana", "Todos", "two");
        log.append(first.clone());
        log.append(second.clone());

        // when (操作):
        let forbidden = log.delete(&first.id, &name("Beto"));
        let deleted = log.delete(&first.id, &name("Ana"));
        let missing = log.delete(&first.id, &name("Ana"));

        // then (期待する結果):
        assert!(matches!(forbidden, Err(MessageLogError::NotAuthor { .. })));
        assert_eq!(deleted.unwrap(), first);
        assert_eq!(
            missing,
            Err(MessageLogError::NotFound(first.id.to_string()))
        );
        assert_eq!(log.messages, vec![second]);
    }
}
