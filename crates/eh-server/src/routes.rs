use crate::error::ApiError;
use crate::state::{AppState, SessionEntry};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use eh_advisor::Reply;
use eh_assess::{assess, Assessment, MissionQueue};
use eh_core::{EhError, Profile};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn assessment_routes() -> Router<AppState> {
    Router::new().route("/api/v1/assessment", post(create_assessment))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/sessions", post(create_session))
        .route("/api/v1/sessions/{id}", get(get_session).delete(delete_session))
        .route("/api/v1/sessions/{id}/messages", post(send_message))
        .route("/api/v1/sessions/{id}/restart", post(restart_session))
        .route("/api/v1/sessions/{id}/missions", get(get_mission))
}

fn session_body(entry: &SessionEntry) -> Value {
    let chat = entry.transcript();
    json!({
        "id": entry.id,
        "profile": entry.profile(),
        "messages": chat.messages(),
        "typing": chat.is_typing(),
        "createdAt": entry.created_at,
    })
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptimeSecs": state.start_time.elapsed().as_secs(),
        "sessions": state.sessions.count(),
    }))
}

async fn create_assessment(payload: Result<Json<Profile>, JsonRejection>) -> Result<Json<Assessment>, ApiError> {
    let Json(profile) = payload?;
    Ok(Json(assess(&profile)))
}

async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(profile) = payload?;
    let entry = state.sessions.create(profile);
    tracing::info!(session = %entry.id, "advisor session created");
    Ok((StatusCode::CREATED, Json(session_body(&entry))))
}

async fn get_session(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let entry = state.sessions.get(&id)?;
    Ok(Json(session_body(&entry)))
}

async fn delete_session(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state.sessions.remove(&id).ok_or(EhError::SessionNotFound { id })?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct SendMessage {
    pub text: String,
}

async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SendMessage>, JsonRejection>,
) -> Result<Json<Reply>, ApiError> {
    let entry = state.sessions.get(&id)?;
    let Json(body) = payload?;
    let profile = entry.profile();
    let reply = state
        .advisor
        .converse(&entry.chat, &profile, &body.text)
        .await
        .map_err(|e| match e {
            EhError::SessionRestarted { .. } => EhError::SessionRestarted { id: id.clone() },
            other => other,
        })?;
    tracing::debug!(session = %id, intent = %reply.intent, "advisor replied");
    Ok(Json(reply))
}

async fn restart_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let entry = state.sessions.get(&id)?;
    let Json(profile) = payload?;
    entry.restart(profile);
    tracing::info!(session = %id, "advisor session restarted");
    Ok(Json(session_body(&entry)))
}

#[derive(Debug, Default, Deserialize)]
pub struct MissionQuery {
    #[serde(default)]
    pub cursor: usize,
}

async fn get_mission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<MissionQuery>,
) -> Result<Json<Value>, ApiError> {
    let entry = state.sessions.get(&id)?;
    let mut queue = MissionQueue::for_profile(&entry.profile());
    let mission = queue.seek(query.cursor);
    Ok(Json(json!({
        "mission": mission,
        "index": queue.index(),
        "total": queue.len(),
        "position": queue.position(),
        "hasPrevious": queue.has_previous(),
        "hasNext": queue.has_next(),
    })))
}
