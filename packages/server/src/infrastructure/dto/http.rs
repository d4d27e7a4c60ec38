//! HTTP API request/response DTOs for the chat room.
//!
//! Request DTOs deserialize leniently (every field optional) and are then
//! validated into domain values with [`RegisterParticipantRequest::validate`]
//! and friends, which report every field error at once.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        MESSAGE_TEXT_MAX_LEN, Message, MessageEdit, MessageKind, MessageText,
        PARTICIPANT_NAME_MAX_LEN, Participant, ParticipantName, Recipient, ValueObjectError,
    },
    infrastructure::sanitize::strip_markup,
};

/// Field-level validation messages, returned to the caller as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(pub Vec<String>);

impl FieldErrors {
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

/// Body of `POST /participants`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterParticipantRequest {
    pub name: Option<String>,
}

impl RegisterParticipantRequest {
    /// Sanitize and validate the requested name.
    pub fn validate(self) -> Result<ParticipantName, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = required_text(&mut errors, "name", self.name, |raw| {
            ParticipantName::new(raw).map_err(|e| describe("name", &e))
        });
        match name {
            Some(name) if errors.is_empty() => Ok(name),
            _ => Err(errors),
        }
    }
}

/// Body of `POST /participants` on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParticipantResponse {
    pub name: String,
}

/// Body of `POST /messages` and `PUT /messages/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBodyRequest {
    pub to: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type", alias = "kind")]
    pub kind: Option<String>,
}

impl MessageBodyRequest {
    /// Sanitize and validate the message fields.
    ///
    /// `type` must be `message` or `private_message`; `status` is reserved
    /// for notices produced by the server.
    pub fn validate(self) -> Result<MessageEdit, FieldErrors> {
        let mut errors = FieldErrors::default();

        let to = required_text(&mut errors, "to", self.to, |raw| {
            Recipient::new(raw).map_err(|e| describe("to", &e))
        });
        let text = required_text(&mut errors, "text", self.text, |raw| {
            MessageText::new(raw).map_err(|e| describe("text", &e))
        });
        let kind = match self.kind {
            None => {
                errors.push("\"type\" is required");
                None
            }
            Some(raw) => match raw.parse::<MessageKind>() {
                Ok(kind) if kind.is_client_settable() => Some(kind),
                _ => {
                    errors.push("\"type\" must be one of [message, private_message]");
                    None
                }
            },
        };

        match (to, text, kind) {
            (Some(to), Some(text), Some(kind)) if errors.is_empty() => {
                Ok(MessageEdit { to, text, kind })
            }
            _ => Err(errors),
        }
    }
}

/// Query of `GET /messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<String>,
}

impl ListMessagesQuery {
    /// `None` when no limit was requested; an empty value counts as none.
    pub fn limit(&self) -> Result<Option<usize>, FieldErrors> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<usize>().map(Some).map_err(|_| {
                FieldErrors(vec![
                    "\"limit\" must be a non-negative integer".to_string(),
                ])
            }),
        }
    }
}

/// Entry of `GET /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub name: String,
    /// Last liveness signal, Unix milliseconds
    pub last_status: i64,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name.into_string(),
            last_status: participant.last_seen.value(),
        }
    }
}

/// Entry of `GET /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Local wall-clock creation time, `HH:MM:SS`
    pub time: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.into(),
            from: message.from.into_string(),
            to: message.to.into(),
            text: message.text.into(),
            kind: message.kind.as_str().to_string(),
            time: parlor_shared::time::timestamp_to_clock_time(message.time.value()),
        }
    }
}

fn required_text<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, String>,
) -> Option<T> {
    let Some(raw) = value else {
        errors.push(format!("\"{field}\" is required"));
        return None;
    };
    match parse(strip_markup(&raw)) {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(message);
            None
        }
    }
}

fn describe(field: &str, error: &ValueObjectError) -> String {
    match error {
        ValueObjectError::ParticipantNameEmpty
        | ValueObjectError::MessageTextEmpty
        | ValueObjectError::RecipientEmpty => format!("\"{field}\" is not allowed to be empty"),
        ValueObjectError::ParticipantNameTooLong { .. } => format!(
            "\"{field}\" length must be less than or equal to {PARTICIPANT_NAME_MAX_LEN} characters long"
        ),
        ValueObjectError::MessageTextTooLong { .. } => format!(
            "\"{field}\" length must be less than or equal to {MESSAGE_TEXT_MAX_LEN} characters long"
        ),
        other => format!("\"{field}\" is invalid: {other}"),
    }
}
