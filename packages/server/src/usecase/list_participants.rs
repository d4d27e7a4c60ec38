//! UseCase: 参加者一覧取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantName, ParticipantRepository};

use super::error::ListError;

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    /// 新しい ListParticipantsUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// 閲覧者以外の参加者を登録順で返す
    pub async fn execute(&self, viewer: &ParticipantName) -> Result<Vec<Participant>, ListError> {
        Ok(self.participants.list_excluding(viewer).await?)
    }
}
