use rusqlite::params;

use crate::db::models::Transaction;
use crate::db::now_timestamp;
use crate::error::AppError;
use crate::state::DbPool;

const BONUS_KIND: &str = "bonus";
const BONUS_DESCRIPTION: &str = "Welcome Bonus";
const BONUS_PARTNER: &str = "SkillSwap";

/// A user's transaction history, newest first.
///
/// A user with no rows gets exactly one welcome-bonus row seeded before
/// the read, so the first call per user has a write side effect and every
/// later call is a pure read. The seed is a single INSERT..SELECT guarded
/// by NOT EXISTS, so concurrent first calls cannot double-grant.
pub fn history(
    pool: &DbPool,
    user_email: &str,
    welcome_bonus: i64,
) -> Result<Vec<Transaction>, AppError> {
    let conn = pool.get()?;

    conn.execute(
        "INSERT INTO transactions (user_email, type, description, partner, amount, created_at)
         SELECT ?1, ?2, ?3, ?4, ?5, ?6
         WHERE NOT EXISTS (SELECT 1 FROM transactions WHERE user_email = ?1)",
        params![
            user_email,
            BONUS_KIND,
            BONUS_DESCRIPTION,
            BONUS_PARTNER,
            welcome_bonus,
            now_timestamp()
        ],
    )?;

    let mut stmt = conn.prepare(
        "SELECT id, user_email, type, description, partner, amount, created_at
         FROM transactions WHERE user_email = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let transactions = stmt
        .query_map(params![user_email], |row| {
            Ok(Transaction {
                id: row.get(0)?,
                user_email: row.get(1)?,
                kind: row.get(2)?,
                description: row.get(3)?,
                partner: row.get(4)?,
                amount: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(transactions)
}
