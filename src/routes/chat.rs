use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::messages;
use crate::db::models::Message;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(get_messages))
        .route("/messages", post(post_message))
}

#[derive(Deserialize)]
struct PostMessageRequest {
    #[serde(default)]
    sender: String,
    #[serde(default)]
    content: String,
}

/// GET /messages - the poll. The whole log, oldest first; clients
/// re-render from scratch each tick.
async fn get_messages(State(state): State<AppState>) -> AppResult<Json<Vec<Message>>> {
    let log = messages::list_all(&state.db)?;
    Ok(Json(log))
}

/// POST /messages - append-only send.
async fn post_message(
    State(state): State<AppState>,
    Json(req): Json<PostMessageRequest>,
) -> AppResult<Json<Value>> {
    if req.content.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    messages::append(&state.db, &req.sender, &req.content)?;
    Ok(Json(json!({ "status": "success" })))
}
