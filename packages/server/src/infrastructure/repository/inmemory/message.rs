use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Message, MessageEdit, MessageId, MessageLog, MessageRepository, ParticipantName,
    RepositoryError,
};

/// インメモリ Message Repository 実装
///
/// `MessageLog` 集約を Mutex で保護します。所有者チェックと更新・削除は
/// 同じロックの中で行われるため、チェック後に状態が変わることはありません。
#[derive(Clone, Default)]
pub struct InMemoryMessageRepository {
    log: Arc<Mutex<MessageLog>>,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: Message) -> Result<(), RepositoryError> {
        let mut log = self.log.lock().await;
        log.append(message);
        Ok(())
    }

    async fn get(&self, id: &MessageId) -> Result<Option<Message>, RepositoryError> {
        let log = self.log.lock().await;
        Ok(log.get(id).cloned())
    }

    async fn update(
        &self,
        id: &MessageId,
        editor: &ParticipantName,
        edit: MessageEdit,
    ) -> Result<(), RepositoryError> {
        let mut log = self.log.lock().await;
        log.update(id, editor, edit)?;
        Ok(())
    }

    async fn delete(
        &self,
        id: &MessageId,
        requester: &ParticipantName,
    ) -> Result<(), RepositoryError> {
        let mut log = self.log.lock().await;
        log.delete(id, requester)?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Message>, RepositoryError> {
        let log = self.log.lock().await;
        Ok(log.messages.clone())
    }
}
