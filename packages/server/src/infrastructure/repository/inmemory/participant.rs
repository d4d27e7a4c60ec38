use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, Registry, RepositoryError, Timestamp,
};

/// インメモリ Participant Repository 実装
///
/// `Registry` 集約を Mutex で保護し、ドメイン層の ParticipantRepository trait を実装します。
#[derive(Clone, Default)]
pub struct InMemoryParticipantRepository {
    registry: Arc<Mutex<Registry>>,
}

impl InMemoryParticipantRepository {
    /// 新しい InMemoryParticipantRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 参加者数を取得（テスト・デバッグ用）
    pub async fn count(&self) -> usize {
        self.registry.lock().await.participants.len()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn register(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut registry = self.registry.lock().await;
        registry.register(participant)?;
        Ok(())
    }

    async fn heartbeat(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<(), RepositoryError> {
        let mut registry = self.registry.lock().await;
        registry.heartbeat(name, at)?;
        Ok(())
    }

    async fn is_present(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        let registry = self.registry.lock().await;
        Ok(registry.is_present(name))
    }

    async fn list_excluding(
        &self,
        viewer: &ParticipantName,
    ) -> Result<Vec<Participant>, RepositoryError> {
        let registry = self.registry.lock().await;
        Ok(registry.list_excluding(viewer))
    }

    async fn find_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError> {
        let registry = self.registry.lock().await;
        Ok(registry.stale(cutoff))
    }

    async fn remove(&self, name: &ParticipantName) -> Result<(), RepositoryError> {
        let mut registry = self.registry.lock().await;
        registry.remove(name)?;
        Ok(())
    }
}
