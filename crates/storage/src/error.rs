use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Referenced {entity} {id} does not exist")]
    ForeignKey { entity: &'static str, id: Uuid },

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Caller errors are deterministic for a given input and must not be retried.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            StorageError::Validation(_)
                | StorageError::ForeignKey { .. }
                | StorageError::NotFound
                | StorageError::ConstraintViolation(_)
        )
    }
}
