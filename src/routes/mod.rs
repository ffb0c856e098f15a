pub mod assets;
pub mod auth;
pub mod chat;
pub mod connections;
pub mod ledger;
pub mod matches;

use axum::Router;

use crate::state::AppState;

/// API routes first; anything unclaimed falls through to the embedded
/// front end files.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(chat::router())
        .merge(connections::router())
        .merge(ledger::router())
        .merge(matches::router())
        .fallback(assets::serve)
}
