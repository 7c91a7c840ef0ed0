use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::NewContest;
use crate::error::{Result, StorageError};
use crate::models::Contest;

pub(crate) const LIST_CONTESTS: &str = r#"
    SELECT contest_id, name, created_at
    FROM tournament_contests
    ORDER BY created_at ASC, contest_id ASC
"#;

/// Repository for tournament contests
pub struct ContestRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContestRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(LIST_CONTESTS)
            .fetch_all(self.pool)
            .await?;

        Ok(contests)
    }

    pub async fn create(&self, req: &NewContest) -> Result<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO tournament_contests (name)
            VALUES ($1)
            RETURNING contest_id, name, created_at
            "#,
        )
        .bind(&req.name)
        .fetch_one(self.pool)
        .await?;

        Ok(contest)
    }

    /// Delete a contest together with its scores in one transaction
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM tournament_scores WHERE contest_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let result = sqlx::query("DELETE FROM tournament_contests WHERE contest_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(removed)
    }
}
