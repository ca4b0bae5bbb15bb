//! # Formula Storage
//!
//! Persistence for assembled `FormulaRecord`s behind the `FormulaRepository`
//! trait, and for the single health profile behind `ProfileRepository`.
//! Handlers receive them as `web::Data<dyn ..>` and never know which backend
//! is in use.
//!
//! ## Sub-modules:
//! - `memory`: process-local map, lost on restart. The default.
//! - `sqlite`: one row per formula in a SQLite file, record stored as JSON.
//!   The profile lives in a one-row table of the same file.

mod memory;
mod sqlite;

pub use memory::{InMemoryFormulaRepository, InMemoryProfileRepository};
pub use sqlite::{SqliteFormulaRepository, SqliteProfileRepository};

use crate::config::StorageKind;
use async_trait::async_trait;
use common::model::formula::{FormulaRecord, StoredFormula};
use common::model::profile::HealthProfile;
use log::info;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("formula '{0}' not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored formula is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CRUD over saved formulas. Ids are assigned by the repository.
#[async_trait]
pub trait FormulaRepository: Send + Sync {
    /// Stores `record` under a fresh id and returns it.
    async fn insert(&self, record: FormulaRecord) -> Result<StoredFormula, StorageError>;

    async fn get(&self, id: &str) -> Result<StoredFormula, StorageError>;

    /// Every stored formula, oldest first.
    async fn list(&self) -> Result<Vec<StoredFormula>, StorageError>;

    /// Replaces the record stored under `id`, keeping the id.
    async fn update(&self, id: &str, record: FormulaRecord) -> Result<StoredFormula, StorageError>;

    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}

/// The health profile. There is one per server.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// `None` until a profile has been saved.
    async fn load(&self) -> Result<Option<HealthProfile>, StorageError>;

    /// Replaces the stored profile.
    async fn save(&self, profile: HealthProfile) -> Result<HealthProfile, StorageError>;
}

/// Both repositories, backed by the same storage kind.
pub struct Repositories {
    pub formulas: Arc<dyn FormulaRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

pub fn open(kind: &StorageKind) -> Result<Repositories, StorageError> {
    match kind {
        StorageKind::Memory => {
            info!("Storing formulas and profile in memory");
            Ok(Repositories {
                formulas: Arc::new(InMemoryFormulaRepository::new()),
                profiles: Arc::new(InMemoryProfileRepository::new()),
            })
        }
        StorageKind::Sqlite(path) => {
            info!("Storing formulas and profile in {}", path.display());
            Ok(Repositories {
                formulas: Arc::new(SqliteFormulaRepository::open(path)?),
                profiles: Arc::new(SqliteProfileRepository::open(path)?),
            })
        }
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
