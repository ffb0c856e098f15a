use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{password, validate};
use crate::db::models::User;
use crate::db::users;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// -- Request/Response types --

// Fields default to empty so a missing field reads as a validation
// failure, not a deserialization rejection
#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub user: User,
}

// -- Handlers --

/// POST /register
/// Validates input, hashes the password, stores the user. The unique
/// email index decides duplicates.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Response> {
    validate::registration(&req.full_name, &req.email, &req.password)?;

    let hash = password::hash(&req.password)?;
    users::create(&state.db, req.full_name.trim(), req.email.trim(), &hash)?;

    tracing::info!("Registered user {}", req.email.trim());

    let response = StatusResponse {
        status: "success",
        message: "Registered successfully",
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// POST /login
/// On success echoes the user record minus the hash; the browser caches
/// it as its session. No server-side session state is created.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Response> {
    validate::login(&req.email, &req.password)?;

    let user = users::find_by_email(&state.db, req.email.trim())?.ok_or(AppError::NotFound)?;

    if !password::verify(&req.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let response = LoginResponse {
        status: "success",
        message: "Login successful",
        user,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}
