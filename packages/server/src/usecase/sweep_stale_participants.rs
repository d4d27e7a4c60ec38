//! UseCase: 無応答参加者の退室処理（スイープ）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SweepStaleParticipantsUseCase::execute() メソッド
//! - 閾値を超えて無応答の参加者が削除され、退室メッセージが 1 件だけ追加されること
//!
//! ### なぜこのテストが必要か
//! - 明示的な切断がないため、在室状態はこの処理だけで整理される
//! - 1 人の失敗が同じ回の他の参加者の処理を止めないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：stale な参加者の退室、最近ハートビートした参加者の維持
//! - 異常系：特定の参加者だけ退室メッセージの追加に失敗
//! - 異常系：stale 一覧の取得自体に失敗

use std::{sync::Arc, time::Duration};

use futures_util::future::join_all;

use crate::domain::{
    MessageFactory, MessageRepository, ParticipantName, ParticipantRepository, Timestamp,
};

use super::error::SweepError;

/// 1 回のスイープの結果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// 退室させた参加者
    pub evicted: Vec<ParticipantName>,
    /// 処理に失敗した参加者とその理由
    pub failed: Vec<(ParticipantName, SweepError)>,
}

/// 無応答参加者の退室処理のユースケース
pub struct SweepStaleParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    /// この時間以上ハートビートがない参加者を stale とみなす
    stale_after: Duration,
}

impl SweepStaleParticipantsUseCase {
    /// 新しい SweepStaleParticipantsUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        stale_after: Duration,
    ) -> Self {
        Self {
            participants,
            messages,
            stale_after,
        }
    }

    /// `now` 時点で stale な参加者をまとめて退室させる
    ///
    /// 参加者ごとに「退室メッセージの追加 → Registry からの削除」を行い、
    /// 各参加者の処理は独立して並行に実行されます。
    ///
    /// # Errors
    ///
    /// stale な参加者の一覧を取得できなかった場合のみ `SweepError::Scan`。
    /// 個々の参加者の失敗は `SweepReport::failed` に入ります。
    pub async fn execute(&self, now: Timestamp) -> Result<SweepReport, SweepError> {
        let stale_after = i64::try_from(self.stale_after.as_millis()).unwrap_or(i64::MAX);
        let cutoff = now.minus_millis(stale_after);

        let stale = self
            .participants
            .find_stale(cutoff)
            .await
            .map_err(SweepError::Scan)?;
        if stale.is_empty() {
            return Ok(SweepReport::default());
        }
        tracing::debug!("Found {} stale participant(s)", stale.len());

        let outcomes = join_all(stale.into_iter().map(|participant| async move {
            let result = self.evict(&participant.name, now).await;
            (participant.name, result)
        }))
        .await;

        let mut report = SweepReport::default();
        for (name, result) in outcomes {
            match result {
                Ok(()) => {
                    tracing::info!("Participant '{}' timed out and left the room", name);
                    report.evicted.push(name);
                }
                Err(e) => {
                    tracing::warn!("Failed to evict participant '{}': {}", name, e);
                    report.failed.push((name, e));
                }
            }
        }
        Ok(report)
    }

    async fn evict(&self, name: &ParticipantName, now: Timestamp) -> Result<(), SweepError> {
        self.messages
            .append(MessageFactory::left(name.clone(), now))
            .await
            .map_err(SweepError::AppendLeftMessage)?;
        self.participants
            .remove(name)
            .await
            .map_err(SweepError::Remove)?;
        Ok(())
    }
}
