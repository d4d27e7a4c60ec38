//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a participant name (characters)
pub const PARTICIPANT_NAME_MAX_LEN: usize = 100;

/// Maximum length of a message body (characters)
pub const MESSAGE_TEXT_MAX_LEN: usize = 10_000;

/// Recipient value meaning "everyone in the room"
pub const BROADCAST_SENTINEL: &str = "Todos";

/// Participant name value object.
///
/// The name is the participant's identity inside the room. It is
/// case-sensitive and compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name, already sanitized
    ///
    /// # Returns
    ///
    /// A Result containing the ParticipantName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::ParticipantNameEmpty);
        }
        let len = name.chars().count();
        if len > PARTICIPANT_NAME_MAX_LEN {
            return Err(ValueObjectError::ParticipantNameTooLong {
                max: PARTICIPANT_NAME_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantName> for String {
    fn from(value: ParticipantName) -> Self {
        value.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message identifier value object.
///
/// Always a hyphenated UUID string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageId(String);

impl MessageId {
    /// Create a new MessageId from its string form.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::MessageIdEmpty);
        }
        let uuid = uuid::Uuid::parse_str(&id)
            .map_err(|_| ValueObjectError::MessageIdInvalidFormat(id.clone()))?;
        Ok(Self::from_uuid(uuid))
    }

    /// Create a MessageId from an already parsed UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageId> for String {
    fn from(value: MessageId) -> Self {
        value.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message text value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(pub(super) String);

impl MessageText {
    /// Create a new MessageText.
    ///
    /// # Arguments
    ///
    /// * `text` - The message body, already sanitized
    ///
    /// # Returns
    ///
    /// A Result containing the MessageText or an error if validation fails
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        if text.is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        let len = text.chars().count();
        if len > MESSAGE_TEXT_MAX_LEN {
            return Err(ValueObjectError::MessageTextTooLong {
                max: MESSAGE_TEXT_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(text))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageText> for String {
    fn from(value: MessageText) -> Self {
        value.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a message is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Recipient {
    /// The whole room (`Todos` on the wire)
    Everyone,
    /// A single participant, who does not have to be present
    Participant(ParticipantName),
}

impl Recipient {
    /// Parse a recipient designator. `Todos` is the broadcast sentinel.
    pub fn new(to: String) -> Result<Self, ValueObjectError> {
        if to == BROADCAST_SENTINEL {
            return Ok(Self::Everyone);
        }
        match ParticipantName::new(to) {
            Ok(name) => Ok(Self::Participant(name)),
            Err(ValueObjectError::ParticipantNameEmpty) => Err(ValueObjectError::RecipientEmpty),
            Err(e) => Err(e),
        }
    }

    /// True for the broadcast sentinel.
    pub fn is_everyone(&self) -> bool {
        matches!(self, Self::Everyone)
    }

    /// True when the message is addressed to exactly this participant.
    pub fn is(&self, name: &ParticipantName) -> bool {
        matches!(self, Self::Participant(p) if p == name)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Everyone => BROADCAST_SENTINEL,
            Self::Participant(name) => name.as_str(),
        }
    }
}

impl TryFrom<String> for Recipient {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Recipient> for String {
    fn from(value: Recipient) -> Self {
        match value {
            Recipient::Everyone => BROADCAST_SENTINEL.to_string(),
            Recipient::Participant(name) => name.into_string(),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// Chat line addressed to the room
    #[serde(rename = "message")]
    BroadcastChat,
    /// Chat line addressed to a single participant
    #[serde(rename = "private_message")]
    DirectChat,
    /// Synthetic entry/exit notice, never client-settable
    #[serde(rename = "status")]
    SystemStatus,
}

impl MessageKind {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BroadcastChat => "message",
            Self::DirectChat => "private_message",
            Self::SystemStatus => "status",
        }
    }

    /// Kinds a client may set when posting or editing.
    pub fn is_client_settable(&self) -> bool {
        !matches!(self, Self::SystemStatus)
    }
}

impl std::str::FromStr for MessageKind {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::BroadcastChat),
            "private_message" => Ok(Self::DirectChat),
            "status" => Ok(Self::SystemStatus),
            other => Err(ValueObjectError::MessageKindUnknown(other.to_string())),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self(parlor_shared::time::now_millis())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// This timestamp moved back by `millis`, saturating.
    pub fn minus_millis(&self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
