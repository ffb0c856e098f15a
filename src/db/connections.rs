use rusqlite::params;

use crate::db::models::Connection;
use crate::db::now_timestamp;
use crate::error::AppError;
use crate::state::DbPool;

/// Idempotent link to a match. Returns `true` when a new row was created,
/// `false` when the (user_email, match_id) pair already existed. The
/// unique index resolves the check-then-insert race.
pub fn connect(
    pool: &DbPool,
    user_email: &str,
    match_name: &str,
    match_id: i64,
) -> Result<bool, AppError> {
    let conn = pool.get()?;

    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM connections WHERE user_email = ?1 AND match_id = ?2",
        params![user_email, match_id],
        |row| row.get(0),
    )?;
    if exists {
        return Ok(false);
    }

    let result = conn.execute(
        "INSERT INTO connections (user_email, match_name, match_id, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![user_email, match_name, match_id, now_timestamp()],
    );

    match result {
        Ok(_) => Ok(true),
        // A concurrent insert won the race; same outcome as the pre-check
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn list_for_user(pool: &DbPool, user_email: &str) -> Result<Vec<Connection>, AppError> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, user_email, match_name, match_id, status, created_at
         FROM connections WHERE user_email = ?1",
    )?;

    let connections = stmt
        .query_map(params![user_email], |row| {
            Ok(Connection {
                id: row.get(0)?,
                user_email: row.get(1)?,
                match_name: row.get(2)?,
                match_id: row.get(3)?,
                status: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(connections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::run_migrations;
    use r2d2::Pool;
    use r2d2_sqlite::SqliteConnectionManager;

    fn test_pool() -> DbPool {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager).unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn connect_creates_one_row() {
        let pool = test_pool();
        let created = connect(&pool, "jo@example.com", "Sarah Johnson", 1).unwrap();
        assert!(created);

        let rows = list_for_user(&pool, "jo@example.com").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].match_name, "Sarah Johnson");
        assert_eq!(rows[0].match_id, 1);
        assert_eq!(rows[0].status, "connected");
    }

    #[test]
    fn repeat_connect_is_idempotent() {
        let pool = test_pool();
        assert!(connect(&pool, "jo@example.com", "Sarah Johnson", 1).unwrap());
        assert!(!connect(&pool, "jo@example.com", "Sarah Johnson", 1).unwrap());

        let rows = list_for_user(&pool, "jo@example.com").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn different_matches_get_separate_rows() {
        let pool = test_pool();
        connect(&pool, "jo@example.com", "Sarah Johnson", 1).unwrap();
        connect(&pool, "jo@example.com", "Mike Chen", 2).unwrap();

        let rows = list_for_user(&pool, "jo@example.com").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn connections_are_scoped_per_user() {
        let pool = test_pool();
        connect(&pool, "jo@example.com", "Sarah Johnson", 1).unwrap();
        connect(&pool, "sam@example.com", "Sarah Johnson", 1).unwrap();

        assert_eq!(list_for_user(&pool, "jo@example.com").unwrap().len(), 1);
        assert_eq!(list_for_user(&pool, "sam@example.com").unwrap().len(), 1);
        assert!(list_for_user(&pool, "other@example.com").unwrap().is_empty());
    }
}
