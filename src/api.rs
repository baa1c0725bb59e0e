//! REST API for the word-guessing game.
//!
//! A thin transport layer over [`SessionRegistry`]: each endpoint maps onto
//! one registry operation and does no game logic of its own.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::error::RegistryError;
use crate::registry::{SessionId, SessionRegistry};

/// Shared API state.
#[derive(Clone)]
pub struct ApiState {
    /// The session registry, injected at startup.
    pub registry: Arc<SessionRegistry>,
}

impl ApiState {
    /// Creates API state around the given registry.
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}

/// Response for a newly created game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    /// ID of the created session.
    pub game_id: SessionId,
}

/// Guessing status of an existing game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessingStatus {
    /// The target word.
    pub word_to_guess: String,
    /// Number of accepted guesses so far.
    pub number_of_guesses: u64,
}

/// Result of a guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResult {
    /// Positions in the target word matching the guessed letter.
    pub occurrences: usize,
    /// The target word.
    pub word_to_guess: String,
    /// Number of accepted guesses, including this one.
    pub number_of_guesses: u64,
}

/// API error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false for errors.
    pub success: bool,
    /// Error message.
    pub message: String,
    /// Error code for programmatic handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Error returned by API handlers.
#[derive(Debug)]
pub struct ApiError(RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status code for this error.
    fn status_code(&self) -> StatusCode {
        match self.0 {
            RegistryError::InvalidLetter => StatusCode::BAD_REQUEST,
            RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::Registration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error code for this error.
    fn error_code(&self) -> &'static str {
        match self.0 {
            RegistryError::InvalidLetter => "INVALID_INPUT",
            RegistryError::NotFound { .. } => "NOT_FOUND",
            RegistryError::Registration { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            success: false,
            message: self.0.to_string(),
            code: Some(self.error_code().to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Creates the API router with all endpoints.
pub fn router(state: ApiState) -> Router {
    let game_routes = Router::new()
        .route("/", post(create_game))
        .route("/{game_id}", get(get_status).post(make_guess));

    Router::new()
        .nest("/game", game_routes)
        .route("/health", get(health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Creates a new game and returns its ID.
#[instrument(skip(state))]
async fn create_game(State(state): State<ApiState>) -> Result<Json<NewGame>, ApiError> {
    let game_id = state.registry.create_session()?;
    Ok(Json(NewGame { game_id }))
}

/// Returns the guessing status of a game.
#[instrument(skip(state))]
async fn get_status(
    State(state): State<ApiState>,
    Path(game_id): Path<SessionId>,
) -> Result<Json<GuessingStatus>, ApiError> {
    let status = state.registry.status(game_id)?;

    Ok(Json(GuessingStatus {
        word_to_guess: status.word,
        number_of_guesses: status.guess_count,
    }))
}

/// Makes a guess in a game. The body is the guessed letter as a JSON string.
#[instrument(skip(state))]
async fn make_guess(
    State(state): State<ApiState>,
    Path(game_id): Path<SessionId>,
    Json(letter): Json<String>,
) -> Result<Json<GuessResult>, ApiError> {
    let outcome = state.registry.apply_guess(game_id, &letter)?;

    Ok(Json(GuessResult {
        occurrences: outcome.occurrences,
        word_to_guess: outcome.word,
        number_of_guesses: outcome.guess_count,
    }))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
