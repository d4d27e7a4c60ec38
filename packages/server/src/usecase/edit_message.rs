//! UseCase: メッセージ編集処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EditMessageUseCase::execute() メソッド
//! - 作成者のみが to/text/kind を書き換えられること
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成者による編集
//! - 異常系：作成者以外による編集（メッセージは変わらない）
//! - 異常系：存在しない ID、未登録の編集者

use std::sync::Arc;

use crate::domain::{
    MessageEdit, MessageId, MessageRepository, ParticipantName, ParticipantRepository,
};

use super::error::MessageMutationError;

/// メッセージ編集のユースケース
pub struct EditMessageUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl EditMessageUseCase {
    /// 新しい EditMessageUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// メッセージ編集を実行
    ///
    /// 編集者は在室している必要があります。所有者チェックと書き換えは
    /// Repository 内で不可分に行われます。
    pub async fn execute(
        &self,
        id: &MessageId,
        editor: &ParticipantName,
        edit: MessageEdit,
    ) -> Result<(), MessageMutationError> {
        let present = self
            .participants
            .is_present(editor)
            .await
            .map_err(MessageMutationError::Store)?;
        if !present {
            return Err(MessageMutationError::EditorNotRegistered(editor.to_string()));
        }

        self.messages.update(id, editor, edit).await?;
        Ok(())
    }
}
