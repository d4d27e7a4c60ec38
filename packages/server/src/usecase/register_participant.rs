//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 参加者の登録（重複チェック）と入室メッセージの追加
//!
//! ### なぜこのテストが必要か
//! - 同じ名前の参加者が二重に存在しないことを保証
//! - 入室メッセージが全員宛ての status として残ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：登録済みの名前での登録試行
//! - 異常系：ストア障害

use std::sync::Arc;

use crate::domain::{
    MessageFactory, MessageRepository, Participant, ParticipantName, ParticipantRepository,
    Timestamp,
};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// 参加者登録を実行
    ///
    /// 登録と入室メッセージの追加は独立した 2 つの操作です。
    /// 入室メッセージの追加に失敗しても参加者は登録されたままになります。
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(RegisterError)` - 登録失敗
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, RegisterError> {
        let now = Timestamp::now();
        let participant = Participant::new(name.clone(), now);

        // 1. Registry に追加（重複時は AlreadyRegistered）
        self.participants.register(participant.clone()).await?;

        // 2. 入室メッセージを追加
        self.messages
            .append(MessageFactory::entered(name, now))
            .await?;

        Ok(participant)
    }
}
