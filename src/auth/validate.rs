use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;

/// Authoritative minimum; the browser-side check mirrors this value but
/// is never trusted.
pub const MIN_PASSWORD_LEN: usize = 6;

// local@domain.tld shape, nothing stricter
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Server-side registration checks. Client-side validation is a UX
/// convenience only; everything is re-checked here.
pub fn registration(full_name: &str, email: &str, password: &str) -> Result<(), AppError> {
    if full_name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("All fields required".into()));
    }
    if !email_is_valid(email.trim()) {
        return Err(AppError::Validation("Invalid email format".into()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be {}+ chars",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

pub fn login(email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("Fields required".into()));
    }
    Ok(())
}
