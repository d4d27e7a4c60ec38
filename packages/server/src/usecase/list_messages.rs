//! UseCase: メッセージ一覧取得
//!
//! limit の有無で 2 つの可視性モードを使い分けます（`domain::visibility` 参照）。

use std::sync::Arc;

use crate::domain::{
    Message, MessageRepository, ParticipantName, latest_broadcasts_visible_to, visible_to,
};

use super::error::ListError;

/// メッセージ一覧取得のユースケース
pub struct ListMessagesUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// 閲覧者が読めるメッセージを時系列順で返す
    ///
    /// * `limit == None` - 可視なメッセージすべて（種別を問わない）
    /// * `limit == Some(n)` - 可視な `message` 種別のうち最新 n 件
    pub async fn execute(
        &self,
        viewer: &ParticipantName,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, ListError> {
        let log = self.messages.all().await?;
        let visible = match limit {
            None => visible_to(viewer, &log),
            Some(limit) => latest_broadcasts_visible_to(viewer, &log, limit),
        };
        Ok(visible)
    }
}
