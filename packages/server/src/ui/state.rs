//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{MessageRepository, ParticipantRepository},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
};

/// Shared application state
///
/// Constructed once at startup and handed to the router and to the sweeper.
#[derive(Clone)]
pub struct AppState {
    /// Repository（参加者 Registry の抽象化）
    pub participants: Arc<dyn ParticipantRepository>,
    /// Repository（メッセージログの抽象化）
    pub messages: Arc<dyn MessageRepository>,
}

impl AppState {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// State backed by fresh in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryParticipantRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
        )
    }
}
