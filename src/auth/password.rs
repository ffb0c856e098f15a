use crate::error::AppError;

/// One-way salted hash of a password. Cost factor comes from bcrypt's
/// default; the plaintext is never stored.
pub fn hash(plaintext: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)?)
}

/// Verify plaintext against a stored hash - constant-time via bcrypt.
/// A malformed hash counts as a failed verification.
pub fn verify(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}
