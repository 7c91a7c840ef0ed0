use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::ParticipantInput;
use crate::error::{Result, StorageError};
use crate::models::Participant;

pub(crate) const LIST_PARTICIPANTS: &str = r#"
    SELECT participant_id, name, codeforces_handle, created_at
    FROM tournament_participants
    ORDER BY name ASC, created_at ASC, participant_id ASC
"#;

/// Repository for tournament participants
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(LIST_PARTICIPANTS)
            .fetch_all(self.pool)
            .await?;

        Ok(participants)
    }

    pub async fn create(&self, req: &ParticipantInput) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO tournament_participants (name, codeforces_handle)
            VALUES ($1, $2)
            RETURNING participant_id, name, codeforces_handle, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.codeforces_handle)
        .fetch_one(self.pool)
        .await?;

        Ok(participant)
    }

    pub async fn update(&self, id: Uuid, req: &ParticipantInput) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE tournament_participants
            SET name = $2, codeforces_handle = $3
            WHERE participant_id = $1
            RETURNING participant_id, name, codeforces_handle, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.codeforces_handle)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Delete a participant together with their scores in one transaction
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM tournament_scores WHERE participant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let result = sqlx::query("DELETE FROM tournament_participants WHERE participant_id = $1")
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
