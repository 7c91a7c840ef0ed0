use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::NewScore;
use crate::error::{Result, StorageError};
use crate::models::Score;

pub(crate) const LIST_SCORES: &str = r#"
    SELECT score_id, participant_id, contest_id, points, created_at
    FROM tournament_scores
    ORDER BY created_at ASC, score_id ASC
"#;

/// Repository for tournament scores
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(LIST_SCORES)
            .fetch_all(self.pool)
            .await?;

        Ok(scores)
    }

    /// Insert a score after locking both referenced rows, so a concurrent
    /// cascade delete cannot slip in between the check and the insert.
    pub async fn create(&self, req: &NewScore) -> Result<Score> {
        let mut tx = self.pool.begin().await?;

        let participant = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT participant_id FROM tournament_participants
            WHERE participant_id = $1
            FOR SHARE
            "#,
        )
        .bind(req.participant_id)
        .fetch_optional(&mut *tx)
        .await?;

        if participant.is_none() {
            tx.rollback().await?;
            return Err(StorageError::ForeignKey {
                entity: "participant",
                id: req.participant_id,
            });
        }

        let contest = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT contest_id FROM tournament_contests
            WHERE contest_id = $1
            FOR SHARE
            "#,
        )
        .bind(req.contest_id)
        .fetch_optional(&mut *tx)
        .await?;

        if contest.is_none() {
            tx.rollback().await?;
            return Err(StorageError::ForeignKey {
                entity: "contest",
                id: req.contest_id,
            });
        }

        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO tournament_scores (participant_id, contest_id, points)
            VALUES ($1, $2, $3)
            RETURNING score_id, participant_id, contest_id, points, created_at
            "#,
        )
        .bind(req.participant_id)
        .bind(req.contest_id)
        .bind(req.points)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| insert_error(e, req))?;

        tx.commit().await?;

        Ok(score)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournament_scores WHERE score_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// Maps a foreign key failure raised by the insert itself to the row it names.
fn insert_error(error: sqlx::Error, req: &NewScore) -> StorageError {
    let err = StorageError::from(error);
    if !err.is_foreign_key_violation() {
        return err;
    }

    let on_participant = matches!(
        &err,
        StorageError::Database(sqlx::Error::Database(e))
            if e.constraint().is_some_and(|c| c.contains("participant"))
    );

    if on_participant {
        StorageError::ForeignKey {
            entity: "participant",
            id: req.participant_id,
        }
    } else {
        StorageError::ForeignKey {
            entity: "contest",
            id: req.contest_id,
        }
    }
}
