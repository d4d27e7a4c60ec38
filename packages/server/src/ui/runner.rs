//! Router construction and server lifecycle.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::ServerConfig,
    error::ServerError,
    usecase::SweepStaleParticipantsUseCase,
};

use super::{
    handler::{
        delete_message, edit_message, health_check, heartbeat, list_messages, list_participants,
        post_message, register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
    sweeper::LivenessSweeper,
};

/// Build the HTTP router over `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/participants",
            get(list_participants).post(register_participant),
        )
        .route("/messages", get(list_messages).post(post_message))
        .route("/messages/{id}", put(edit_message).delete(delete_message))
        .route("/status", post(heartbeat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C / SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve(listener, &config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// Stores are created here and torn down with the sweeper once the HTTP
/// server has drained.
pub async fn serve<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = Arc::new(AppState::in_memory());

    let sweep = SweepStaleParticipantsUseCase::new(
        state.participants.clone(),
        state.messages.clone(),
        config.stale_after(),
    );
    let sweeper = LivenessSweeper::spawn(sweep, config.sweep_interval());

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Chat server listening on http://{}", addr),
        Err(e) => tracing::warn!("Chat server listening (address unknown: {})", e),
    }

    let result = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await;

    sweeper.shutdown().await;
    tracing::info!("Chat server stopped");

    result.map_err(ServerError::Serve)
}
