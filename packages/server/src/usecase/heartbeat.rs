//! UseCase: ハートビート（在室状態の更新）

use std::sync::Arc;

use crate::domain::{ParticipantName, ParticipantRepository, Timestamp};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct HeartbeatUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl HeartbeatUseCase {
    /// 新しい HeartbeatUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// 参加者の last_seen を現在時刻に更新する
    pub async fn execute(&self, name: &ParticipantName) -> Result<(), HeartbeatError> {
        self.participants.heartbeat(name, Timestamp::now()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::Participant, infrastructure::repository::InMemoryParticipantRepository};

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_heartbeat_refreshes_last_seen() {
        // テスト項目: ハートビートで last_seen が現在時刻に更新される
        // given (前提条件):
        let repository = Arc::new(InMemoryParticipantRepository::new());
        repository
            .register(Participant::new(name("Ana"), Timestamp::new(0)))
            .await
            .unwrap();
        let usecase = HeartbeatUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&name("Ana")).await;

        // then (期待する結果): 古い閾値では stale 扱いされない
        assert!(result.is_ok());
        let stale = repository.find_stale(Timestamp::new(1000)).await.unwrap();
        assert!(stale.is_empty());
    }

    #[tokio::test]
    async fn test_heartbeat_unknown_participant() {
        // テスト項目: 未登録の参加者は NotRegistered
        let repository = Arc::new(InMemoryParticipantRepository::new());
        let usecase = HeartbeatUseCase::new(repository);

        let result = usecase.execute(&name("Ghost")).await;

        assert_eq!(
            result,
            Err(HeartbeatError::NotRegistered("Ghost".to_string()))
        );
    }
}
