//! Caller identity carried in the `user` request header.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::domain::ParticipantName;

use super::error::ApiError;

/// Header naming the participant making the request
pub const IDENTITY_HEADER: &str = "user";

/// Identity claimed by the caller, if any.
///
/// A missing, non UTF-8, blank or otherwise invalid header counts as no
/// identity. Extraction never fails; each handler decides what a missing
/// identity means for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub Option<ParticipantName>);

impl Identity {
    /// The identity, or 401 when absent.
    pub fn require(self) -> Result<ParticipantName, ApiError> {
        self.0.ok_or(ApiError::Unauthorized)
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
            .map(str::trim)
            .and_then(|value| ParticipantName::new(value.to_string()).ok());
        Ok(Self(name))
    }
}
