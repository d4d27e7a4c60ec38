//! Domain layer for the chat room.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;
pub mod visibility;

pub use entity::{
    ENTERED_TEXT, LEFT_TEXT, Message, MessageEdit, MessageLog, Participant, Registry,
};
pub use error::{MessageLogError, RegistryError, ValueObjectError};
pub use factory::MessageFactory;
pub use repository::{MessageRepository, ParticipantRepository, RepositoryError};
pub use value_object::{
    BROADCAST_SENTINEL, MESSAGE_TEXT_MAX_LEN, MessageId, MessageKind, MessageText,
    PARTICIPANT_NAME_MAX_LEN, ParticipantName, Recipient, Timestamp,
};
pub use visibility::{latest_broadcasts_visible_to, visible_to};
