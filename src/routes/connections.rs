use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::connections;
use crate::error::AppResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/connect", post(connect))
        .route("/my-connections", get(my_connections))
}

#[derive(Deserialize)]
struct ConnectRequest {
    user_email: String,
    match_name: String,
    match_id: i64,
}

#[derive(Deserialize)]
struct ConnectionsQuery {
    #[serde(default)]
    email: String,
}

/// POST /connect - idempotent; repeat connects acknowledge instead of
/// duplicating the row.
async fn connect(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> AppResult<Json<Value>> {
    let created = connections::connect(&state.db, &req.user_email, &req.match_name, req.match_id)?;

    let message = if created { "Connected!" } else { "Already connected" };
    Ok(Json(json!({ "status": "success", "message": message })))
}

/// GET /my-connections?email=
async fn my_connections(
    State(state): State<AppState>,
    Query(query): Query<ConnectionsQuery>,
) -> AppResult<Json<Value>> {
    let rows = connections::list_for_user(&state.db, &query.email)?;
    Ok(Json(json!({ "status": "success", "connections": rows })))
}
