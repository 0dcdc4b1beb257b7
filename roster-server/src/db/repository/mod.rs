//! Repository Module
//!
//! Thin wrappers over the embedded SurrealDB driver's query methods.

pub mod employee;

pub use employee::EmployeeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "employee:abc".parse()?;
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId
//
// 解析失败视为格式非法的 ID (RepoError::Validation → 400)，
// 而不是不存在的记录 (404)。

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
