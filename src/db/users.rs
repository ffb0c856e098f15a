use rusqlite::params;

use crate::db::models::User;
use crate::db::now_timestamp;
use crate::error::AppError;
use crate::state::DbPool;

/// Insert a new user. The unique email index is the authority on
/// duplicates; a constraint violation maps to `DuplicateEmail`.
pub fn create(
    pool: &DbPool,
    full_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<(), AppError> {
    let conn = pool.get()?;
    let id = uuid::Uuid::now_v7().to_string();

    let result = conn.execute(
        "INSERT INTO users (id, full_name, email, password_hash, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, full_name, email, password_hash, now_timestamp()],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, AppError> {
    let conn = pool.get()?;

    let result = conn.query_row(
        "SELECT id, full_name, email, password_hash, created_at
         FROM users WHERE email = ?1",
        params![email],
        |row| {
            Ok(User {
                id: row.get(0)?,
                full_name: row.get(1)?,
                email: row.get(2)?,
                password_hash: row.get(3)?,
                created_at: row.get(4)?,
            })
        },
    );

    match result {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
