//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::MessageId,
    infrastructure::dto::http::{
        ListMessagesQuery, MessageBodyRequest, MessageDto, ParticipantDto,
        RegisterParticipantRequest, RegisterParticipantResponse,
    },
    ui::{
        error::{ApiError, ApiResult},
        identity::Identity,
        state::AppState,
    },
    usecase::{
        DeleteMessageUseCase, EditMessageUseCase, HeartbeatUseCase, ListMessagesUseCase,
        ListParticipantsUseCase, PostMessageUseCase, RegisterParticipantUseCase,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /participants`
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RegisterParticipantRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterParticipantResponse>)> {
    let name = json_body(body)?.validate()?;

    let usecase =
        RegisterParticipantUseCase::new(state.participants.clone(), state.messages.clone());
    let participant = usecase.execute(name).await.inspect_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
    })?;
    tracing::info!("Participant '{}' entered the room", participant.name);

    Ok((
        StatusCode::CREATED,
        Json(RegisterParticipantResponse {
            name: participant.name.into_string(),
        }),
    ))
}

/// `GET /participants`
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
    identity: Identity,
) -> ApiResult<Json<Vec<ParticipantDto>>> {
    let viewer = identity.require()?;

    let usecase = ListParticipantsUseCase::new(state.participants.clone());
    let participants = usecase.execute(&viewer).await?;

    Ok(Json(participants.into_iter().map(ParticipantDto::from).collect()))
}

/// `POST /messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    body: Result<Json<MessageBodyRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let body = json_body(body)?.validate()?;
    let Some(from) = identity.0 else {
        tracing::warn!("Message rejected: no sender identity");
        return Err(ApiError::Unprocessable);
    };

    let usecase = PostMessageUseCase::new(state.participants.clone(), state.messages.clone());
    let message = usecase.execute(from, body).await?;
    tracing::debug!("Message '{}' posted by '{}'", message.id, message.from);

    Ok(StatusCode::CREATED)
}

/// `GET /messages?limit=N`
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Query(query): Query<ListMessagesQuery>,
) -> ApiResult<Json<Vec<MessageDto>>> {
    let viewer = identity.require()?;
    let limit = query.limit()?;

    let usecase = ListMessagesUseCase::new(state.messages.clone());
    let messages = usecase.execute(&viewer, limit).await?;

    Ok(Json(messages.into_iter().map(MessageDto::from).collect()))
}

/// `POST /status`
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    identity: Identity,
) -> ApiResult<StatusCode> {
    let Some(name) = identity.0 else {
        return Err(ApiError::NotFound);
    };

    let usecase = HeartbeatUseCase::new(state.participants.clone());
    usecase.execute(&name).await?;

    Ok(StatusCode::OK)
}

/// `PUT /messages/{id}`
pub async fn edit_message(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(id): Path<String>,
    body: Result<Json<MessageBodyRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let edit = json_body(body)?.validate()?;
    let Some(editor) = identity.0 else {
        return Err(ApiError::Unprocessable);
    };
    let id = parse_message_id(id)?;

    let usecase = EditMessageUseCase::new(state.participants.clone(), state.messages.clone());
    usecase.execute(&id, &editor, edit).await.inspect_err(|e| {
        tracing::warn!("Edit of message '{}' rejected: {}", id, e);
    })?;

    Ok(StatusCode::CREATED)
}

/// `DELETE /messages/{id}`
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_message_id(id)?;

    let usecase = DeleteMessageUseCase::new(state.messages.clone());
    usecase.execute(&id, identity.0.as_ref()).await.inspect_err(|e| {
        tracing::warn!("Deletion of message '{}' rejected: {}", id, e);
    })?;

    Ok(StatusCode::OK)
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::Validation(vec![rejection.body_text()])),
    }
}

/// Malformed ids cannot name an existing message.
fn parse_message_id(raw: String) -> Result<MessageId, ApiError> {
    MessageId::new(raw).map_err(|_| ApiError::NotFound)
}
