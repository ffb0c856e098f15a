use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::ledger;
use crate::error::AppResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/my-transactions", get(my_transactions))
}

#[derive(Deserialize)]
struct TransactionsQuery {
    #[serde(default)]
    email: String,
}

/// GET /my-transactions?email=
/// The first call for a user seeds the welcome bonus; the page computes
/// earned/spent/balance itself from the signed amounts.
async fn my_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> AppResult<Json<Value>> {
    let rows = ledger::history(&state.db, &query.email, state.config.ledger.welcome_bonus)?;
    Ok(Json(json!({ "status": "success", "transactions": rows })))
}
