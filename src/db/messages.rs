use rusqlite::params;

use crate::db::models::Message;
use crate::db::now_timestamp;
use crate::error::AppError;
use crate::state::DbPool;

/// Append-only insert; the server assigns the timestamp.
pub fn append(pool: &DbPool, sender: &str, content: &str) -> Result<(), AppError> {
    let conn = pool.get()?;
    conn.execute(
        "INSERT INTO messages (sender, content, created_at) VALUES (?1, ?2, ?3)",
        params![sender, content, now_timestamp()],
    )?;
    Ok(())
}

/// The full log, oldest first. Ties on the timestamp fall back to
/// insertion (row id) order.
pub fn list_all(pool: &DbPool) -> Result<Vec<Message>, AppError> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, sender, content, created_at
         FROM messages ORDER BY created_at ASC, id ASC",
    )?;

    let messages = stmt
        .query_map([], |row| {
            Ok(Message {
                id: row.get(0)?,
                sender: row.get(1)?,
                content: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(messages)
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
    fn appended_messages_come_back_in_order() {
        let pool = test_pool();
        append(&pool, "Jo", "first").unwrap();
        append(&pool, "Sam", "second").unwrap();
        append(&pool, "Jo", "third").unwrap();

        let messages = list_all(&pool).unwrap();
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_sends_are_both_kept() {
        let pool = test_pool();
        append(&pool, "Jo", "hello").unwrap();
        append(&pool, "Jo", "hello").unwrap();

        let messages = list_all(&pool).unwrap();
        assert_eq!(messages.len(), 2);
        assert_ne!(messages[0].id, messages[1].id);
    }

    #[test]
    fn equal_timestamps_fall_back_to_row_id_order() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        // Force identical timestamps to exercise the tie-break
        for content in ["a", "b", "c"] {
            conn.execute(
                "INSERT INTO messages (sender, content, created_at)
                 VALUES ('Jo', ?1, '2026-01-01 12:00:00')",
                params![content],
            )
            .unwrap();
        }
        drop(conn);

        let messages = list_all(&pool).unwrap();
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
        assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn empty_log_lists_nothing() {
        let pool = test_pool();
        assert!(list_all(&pool).unwrap().is_empty());
    }
}
