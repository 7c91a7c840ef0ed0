use sqlx::{PgPool, postgres::PgPoolOptions};

pub mod dto;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

pub use memory::MemoryStore;
pub use store::{EntityStore, Snapshot};

use error::Result;

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
