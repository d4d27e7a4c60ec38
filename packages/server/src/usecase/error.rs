//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{MessageLogError, RegistryError, RepositoryError};

/// 参加者登録のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Participant '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Store error: {0}")]
    Store(RepositoryError),
}

impl From<RepositoryError> for RegisterError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Registry(RegistryError::AlreadyRegistered(name)) => {
                Self::AlreadyRegistered(name)
            }
            other => Self::Store(other),
        }
    }
}

/// ハートビートのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    #[error("Participant '{0}' is not registered")]
    NotRegistered(String),

    #[error("Store error: {0}")]
    Store(RepositoryError),
}

impl From<RepositoryError> for HeartbeatError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Registry(RegistryError::NotRegistered(name)) => {
                Self::NotRegistered(name)
            }
            other => Self::Store(other),
        }
    }
}

/// 一覧取得のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),
}

/// メッセージ投稿のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostMessageError {
    #[error("Sender '{0}' is not registered")]
    SenderNotRegistered(String),

    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),
}

/// メッセージ編集・削除のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageMutationError {
    #[error("Message '{0}' not found")]
    NotFound(String),

    #[error("Participant '{requester}' is not the author of message '{id}'")]
    NotAuthor { id: String, requester: String },

    #[error("Editor '{0}' is not registered")]
    EditorNotRegistered(String),

    /// 要求者が名乗っていない（対象のメッセージは存在する）
    #[error("No requester given for message '{0}'")]
    RequesterMissing(String),

    #[error("Store error: {0}")]
    Store(RepositoryError),
}

impl From<RepositoryError> for MessageMutationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::MessageLog(MessageLogError::NotFound(id)) => Self::NotFound(id),
            RepositoryError::MessageLog(MessageLogError::NotAuthor { id, requester }) => {
                Self::NotAuthor { id, requester }
            }
            other => Self::Store(other),
        }
    }
}

/// 退室処理（スイープ）のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// stale な参加者の一覧すら取得できなかった
    #[error("Failed to load stale participants: {0}")]
    Scan(RepositoryError),

    /// 退室メッセージの追加に失敗（参加者は残り、次回再試行される）
    #[error("Failed to append left message: {0}")]
    AppendLeftMessage(RepositoryError),

    /// 退室メッセージは追加済みだが削除に失敗
    #[error("Failed to remove participant: {0}")]
    Remove(RepositoryError),
}
