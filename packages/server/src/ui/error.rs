//! Mapping of use case errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::FieldErrors,
    usecase::{
        HeartbeatError, ListError, MessageMutationError, PostMessageError, RegisterError,
    },
};

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// 422 with the list of field messages
    Validation(Vec<String>),
    /// 422 with an empty body
    Unprocessable,
    /// 409
    Conflict(String),
    /// 401
    Unauthorized,
    /// 404
    NotFound,
    /// 500, details are logged but not returned
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(messages) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(messages)).into_response()
            }
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Json(serde_json::json!({"error": "Unauthorized"})))
                    .into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors.into_messages())
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::AlreadyRegistered(_) => {
                ApiError::Conflict("User already exists".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(error: HeartbeatError) -> Self {
        match error {
            HeartbeatError::NotRegistered(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ListError> for ApiError {
    fn from(error: ListError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<PostMessageError> for ApiError {
    fn from(error: PostMessageError) -> Self {
        match error {
            PostMessageError::SenderNotRegistered(_) => ApiError::Unprocessable,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<MessageMutationError> for ApiError {
    fn from(error: MessageMutationError) -> Self {
        match error {
            MessageMutationError::NotFound(_) => ApiError::NotFound,
            MessageMutationError::NotAuthor { .. } | MessageMutationError::RequesterMissing(_) => {
                ApiError::Unauthorized
            }
            MessageMutationError::EditorNotRegistered(_) => ApiError::Unprocessable,
            MessageMutationError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryError;

    #[test]
    fn test_status_mapping() {
        // テスト項目: UseCase エラーが対応するステータスに変換される
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (
                RegisterError::AlreadyRegistered("Ana".to_string()).into(),
                StatusCode::CONFLICT,
            ),
            (
                HeartbeatError::NotRegistered("Ana".to_string()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                PostMessageError::SenderNotRegistered("Ana".to_string()).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                MessageMutationError::NotAuthor {
                    id: "x".to_string(),
                    requester: "Beto".to_string(),
                }
                .into(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                MessageMutationError::NotFound("x".to_string()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                MessageMutationError::RequesterMissing("x".to_string()).into(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ListError::Store(RepositoryError::Unavailable("down".to_string())).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
