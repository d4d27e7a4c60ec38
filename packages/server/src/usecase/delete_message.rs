//! UseCase: メッセージ削除処理

use std::sync::Arc;

use crate::domain::{MessageId, MessageRepository, ParticipantName};

use super::error::MessageMutationError;

/// メッセージ削除のユースケース
pub struct DeleteMessageUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl DeleteMessageUseCase {
    /// 新しい DeleteMessageUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// 作成者本人であればメッセージを削除する
    ///
    /// 削除は在室を要求しません（退室後でも自分のメッセージは消せる）。
    /// 存在しない ID は、要求者が名乗っていなくても NotFound になります。
    pub async fn execute(
        &self,
        id: &MessageId,
        requester: Option<&ParticipantName>,
    ) -> Result<(), MessageMutationError> {
        let Some(requester) = requester else {
            return match self.messages.get(id).await? {
                Some(_) => Err(MessageMutationError::RequesterMissing(id.to_string())),
                None => Err(MessageMutationError::NotFound(id.to_string())),
            };
        };
        self.messages.delete(id, requester).await?;
        Ok(())
    }
}
