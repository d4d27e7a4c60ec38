//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 送信者の在室確認とメッセージログへの追加
//!
//! ### どのような状況を想定しているか
//! - 正常系：在室中の参加者による投稿
//! - 異常系：未登録の送信者による投稿

use std::sync::Arc;

use crate::domain::{
    Message, MessageEdit, MessageFactory, MessageRepository, ParticipantName,
    ParticipantRepository, Timestamp,
};

use super::error::PostMessageError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// メッセージ投稿を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者（在室している必要がある）
    /// * `body` - 検証済みの宛先・本文・種別
    pub async fn execute(
        &self,
        from: ParticipantName,
        body: MessageEdit,
    ) -> Result<Message, PostMessageError> {
        if !self.participants.is_present(&from).await? {
            return Err(PostMessageError::SenderNotRegistered(from.into_string()));
        }

        let message = MessageFactory::chat(from, body, Timestamp::now());
        self.messages.append(message.clone()).await?;

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageKind, MessageText, Participant, Recipient},
        infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    };

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    fn broadcast(text: &str) -> MessageEdit {
        MessageEdit {
            to: Recipient::Everyone,
            text: MessageText::new(text.to_string()).unwrap(),
            kind: MessageKind::BroadcastChat,
        }
    }

    #[tokio::test]
    async fn test_post_message_success() {
        // テスト項目: 在室中の参加者の投稿がログ末尾に追加される
        // given (前提条件):
        let participants = Arc::new(InMemoryParticipantRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        participants
            .register(Participant::new(name("Ana"), Timestamp::now()))
            .await
            .unwrap();
        let usecase = PostMessageUseCase::new(participants, messages.clone());

        // when (操作):
        let first = usecase.execute(name("Ana"), broadcast("one")).await.unwrap();
        let second = usecase.execute(name("Ana"), broadcast("two")).await.unwrap();

        // then (期待する結果):
        let log = messages.all().await.unwrap();
        assert_eq!(log, vec![first.clone(), second]);
        assert_eq!(first.from, name("Ana"));
        assert_ne!(log[0].id, log[1].id);
    }

    #[tokio::test]
    async fn test_post_message_sender_not_registered() {
        // テスト項目: 未登録の送信者は SenderNotRegistered になり、ログは変わらない
        // given (前提条件):
        let participants = Arc::new(InMemoryParticipantRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        let usecase = PostMessageUseCase::new(participants, messages.clone());

        // when (操作):
        let result = usecase.execute(name("Ghost"), broadcast("boo")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(PostMessageError::SenderNotRegistered("Ghost".to_string()))
        );
        assert!(messages.all().await.unwrap().is_empty());
    }
}
