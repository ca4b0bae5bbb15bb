use super::{new_id, FormulaRepository, ProfileRepository, StorageError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::model::formula::{FormulaRecord, StoredFormula};
use common::model::profile::HealthProfile;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tokio::sync::Mutex;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS formulas (
    id TEXT PRIMARY KEY,
    record TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

const PROFILE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS health_profile (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    profile TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// SQLite-backed repository. The record is stored as a JSON column so the
/// schema does not follow every change to `FormulaRecord`.
pub struct SqliteFormulaRepository {
    conn: Mutex<Connection>,
}

impl SqliteFormulaRepository {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::with_connection(Connection::open(path)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn row_to_formula(id: String, record: String, updated_at: DateTime<Utc>) -> Result<StoredFormula, StorageError> {
    Ok(StoredFormula {
        id,
        record: serde_json::from_str(&record)?,
        updated_at,
    })
}

#[async_trait]
impl FormulaRepository for SqliteFormulaRepository {
    async fn insert(&self, record: FormulaRecord) -> Result<StoredFormula, StorageError> {
        let stored = StoredFormula {
            id: new_id(),
            record,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&stored.record)?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO formulas (id, record, updated_at) VALUES (?1, ?2, ?3)",
            params![stored.id, json, stored.updated_at],
        )?;
        Ok(stored)
    }

    async fn get(&self, id: &str) -> Result<StoredFormula, StorageError> {
        let conn = self.conn.lock().await;
        let row = conn
            .query_row(
                "SELECT id, record, updated_at FROM formulas WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, DateTime<Utc>>(2)?,
                    ))
                },
            )
            .optional()?;
        match row {
            Some((id, record, updated_at)) => row_to_formula(id, record, updated_at),
            None => Err(StorageError::NotFound(id.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<StoredFormula>, StorageError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id, record, updated_at FROM formulas ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, DateTime<Utc>>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, record, updated_at)| row_to_formula(id, record, updated_at))
            .collect()
    }

    async fn update(&self, id: &str, record: FormulaRecord) -> Result<StoredFormula, StorageError> {
        let json = serde_json::to_string(&record)?;
        let updated_at = Utc::now();
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE formulas SET record = ?1, updated_at = ?2 WHERE id = ?3",
            params![json, updated_at, id],
        )?;
        if changed == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(StoredFormula {
            id: id.to_string(),
            record,
            updated_at,
        })
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM formulas WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Keeps the profile in a single-row table next to `formulas`. Opens its own
/// connection to the same file.
pub struct SqliteProfileRepository {
    conn: Mutex<Connection>,
}

impl SqliteProfileRepository {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::with_connection(Connection::open(path)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(PROFILE_SCHEMA, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn load(&self) -> Result<Option<HealthProfile>, StorageError> {
        let conn = self.conn.lock().await;
        let json = conn
            .query_row("SELECT profile FROM health_profile WHERE id = 1", [], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, profile: HealthProfile) -> Result<HealthProfile, StorageError> {
        let json = serde_json::to_string(&profile)?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO health_profile (id, profile, updated_at) VALUES (1, ?1, ?2)
             ON CONFLICT(id) DO UPDATE SET profile = excluded.profile, updated_at = excluded.updated_at",
            params![json, Utc::now()],
        )?;
        Ok(profile)
    }
}
