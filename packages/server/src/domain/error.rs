//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// ParticipantName too long error
    #[error("ParticipantName cannot exceed {max} characters (got {actual})")]
    ParticipantNameTooLong { max: usize, actual: usize },

    /// MessageId validation error
    #[error("MessageId cannot be empty")]
    MessageIdEmpty,

    /// MessageId invalid format error (not a valid UUID format)
    #[error("MessageId must be a valid UUID format (got: {0})")]
    MessageIdInvalidFormat(String),

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },

    /// Recipient validation error
    #[error("Recipient cannot be empty")]
    RecipientEmpty,

    /// Unknown message kind on the wire
    #[error("MessageKind must be one of [message, private_message, status] (got: {0})")]
    MessageKindUnknown(String),
}

/// Errors related to the participant registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Name already taken
    #[error("Participant '{0}' is already registered")]
    AlreadyRegistered(String),

    /// No participant with this name
    #[error("Participant '{0}' is not registered")]
    NotRegistered(String),
}

/// Errors related to the message log
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageLogError {
    /// No message with this id
    #[error("Message '{0}' not found")]
    NotFound(String),

    /// Mutation attempted by someone other than the author
    #[error("Participant '{requester}' is not the author of message '{id}'")]
    NotAuthor { id: String, requester: String },
}
