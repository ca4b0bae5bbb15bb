use super::{new_id, FormulaRepository, ProfileRepository, StorageError};
use async_trait::async_trait;
use chrono::Utc;
use common::model::formula::{FormulaRecord, StoredFormula};
use common::model::profile::HealthProfile;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps formulas in insertion order behind an `Arc<RwLock>`, so concurrent
/// list and get requests only take the read lock.
#[derive(Clone, Default)]
pub struct InMemoryFormulaRepository {
    formulas: Arc<RwLock<Vec<StoredFormula>>>,
}

impl InMemoryFormulaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormulaRepository for InMemoryFormulaRepository {
    async fn insert(&self, record: FormulaRecord) -> Result<StoredFormula, StorageError> {
        let stored = StoredFormula {
            id: new_id(),
            record,
            updated_at: Utc::now(),
        };
        self.formulas.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: &str) -> Result<StoredFormula, StorageError> {
        self.formulas
            .read()
            .await
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<StoredFormula>, StorageError> {
        Ok(self.formulas.read().await.clone())
    }

    async fn update(&self, id: &str, record: FormulaRecord) -> Result<StoredFormula, StorageError> {
        let mut formulas = self.formulas.write().await;
        let stored = formulas
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        stored.record = record;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut formulas = self.formulas.write().await;
        let before = formulas.len();
        formulas.retain(|f| f.id != id);
        if formulas.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profile: Arc<RwLock<Option<HealthProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self) -> Result<Option<HealthProfile>, StorageError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: HealthProfile) -> Result<HealthProfile, StorageError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::sample_record;
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn insert_then_read_back() {
        let repo = InMemoryFormulaRepository::new();
        let first = repo.insert(sample_record("Morning")).await.unwrap();
        let second = repo.insert(sample_record("Evening")).await.unwrap();
        assert_ne!(first.id, second.id);

        assert_eq!(repo.get(&first.id).await.unwrap(), first);
        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.record.name)
            .collect();
        assert_eq!(names, vec!["Morning", "Evening"]);
    }

    #[actix_web::test]
    async fn update_and_delete_missing_ids() {
        let repo = InMemoryFormulaRepository::new();
        assert!(matches!(
            repo.update("nope", sample_record("x")).await,
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(repo.delete("nope").await, Err(StorageError::NotFound(_))));

        let stored = repo.insert(sample_record("Before")).await.unwrap();
        let updated = repo.update(&stored.id, sample_record("After")).await.unwrap();
        assert_eq!(updated.id, stored.id);
        assert_eq!(repo.get(&stored.id).await.unwrap().record.name, "After");

        repo.delete(&stored.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn profile_is_empty_until_saved() {
        let repo = InMemoryProfileRepository::new();
        assert_eq!(repo.load().await.unwrap(), None);

        let profile = HealthProfile {
            allergies: vec!["nuts".to_string()],
            ..Default::default()
        };
        repo.save(profile.clone()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), Some(profile));
    }
}
