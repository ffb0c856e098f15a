use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/matches", get(list_matches))
}

/// GET /matches - the injected demo fixture, same payload every call.
async fn list_matches(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "success", "matches": &*state.matches }))
}
