//! Database Module
//!
//! Handles the embedded SurrealDB connection

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "roster";
const DATABASE: &str = "roster";

/// Database service that owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database under `data_dir`
    pub async fn new(data_dir: &Path) -> Result<Self, AppError> {
        let db_path = data_dir.join("roster.db");

        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path.as_path())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established ({})", db_path.display());

        Ok(Self { db })
    }
}
