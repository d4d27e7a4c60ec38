//! Repository traits.
//!
//! The domain defines what it needs from storage; infrastructure provides
//! the implementations (dependency inversion). Every implementation must
//! evaluate ownership checks and the mutation they guard atomically.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use super::{
    Message, MessageEdit, MessageId, MessageLogError, Participant, ParticipantName, RegistryError,
    Timestamp,
};

/// Errors returned by repositories
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    MessageLog(#[from] MessageLogError),

    /// The backing store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Storage for present participants
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Add a participant; fails with `RegistryError::AlreadyRegistered`
    async fn register(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// Set `last_seen`; fails with `RegistryError::NotRegistered`
    async fn heartbeat(&self, name: &ParticipantName, at: Timestamp)
    -> Result<(), RepositoryError>;

    async fn is_present(&self, name: &ParticipantName) -> Result<bool, RepositoryError>;

    /// All participants but `viewer`, in registration order
    async fn list_excluding(
        &self,
        viewer: &ParticipantName,
    ) -> Result<Vec<Participant>, RepositoryError>;

    /// Participants with `last_seen <= cutoff`
    async fn find_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError>;

    /// Remove a participant; fails with `RegistryError::NotRegistered`
    async fn remove(&self, name: &ParticipantName) -> Result<(), RepositoryError>;
}

/// Storage for the ordered message log
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append at the end of the log
    async fn append(&self, message: Message) -> Result<(), RepositoryError>;

    async fn get(&self, id: &MessageId) -> Result<Option<Message>, RepositoryError>;

    /// Replace the mutable fields if `editor` is the author
    async fn update(
        &self,
        id: &MessageId,
        editor: &ParticipantName,
        edit: MessageEdit,
    ) -> Result<(), RepositoryError>;

    /// Remove the message if `requester` is the author
    async fn delete(
        &self,
        id: &MessageId,
        requester: &ParticipantName,
    ) -> Result<(), RepositoryError>;

    /// Every message, oldest first
    async fn all(&self) -> Result<Vec<Message>, RepositoryError>;
}
