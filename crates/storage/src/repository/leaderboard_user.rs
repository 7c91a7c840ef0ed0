use sqlx::PgPool;

use crate::dto::leaderboard::NewLeaderboardUser;
use crate::error::{Result, StorageError};
use crate::models::LeaderboardUser;

pub struct LeaderboardUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardUserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<LeaderboardUser>> {
        let users = sqlx::query_as::<_, LeaderboardUser>(
            r#"
            SELECT user_id, full_name, codeforces_handle, leetcode_handle, created_at
            FROM leaderboard_users
            ORDER BY created_at ASC, user_id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn create(&self, req: &NewLeaderboardUser) -> Result<LeaderboardUser> {
        let user = sqlx::query_as::<_, LeaderboardUser>(
            r#"
            INSERT INTO leaderboard_users (full_name, codeforces_handle, leetcode_handle)
            VALUES ($1, $2, $3)
            RETURNING user_id, full_name, codeforces_handle, leetcode_handle, created_at
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.codeforces_handle)
        .bind(&req.leetcode_handle)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("Codeforces handle already registered".to_string())
            } else {
                err
            }
        })?;

        Ok(user)
    }
}
