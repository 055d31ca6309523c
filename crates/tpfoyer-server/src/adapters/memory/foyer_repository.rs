//! In-memory implementation of CrudRepository<Foyer>

use std::sync::Arc;

use async_trait::async_trait;

use tpfoyer::{CrudRepository, DomainError, Entity, Foyer};

use super::MemoryStore;

/// In-memory implementation of the Foyer repository
pub struct MemoryFoyerRepository {
    store: Arc<MemoryStore>,
}

impl MemoryFoyerRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CrudRepository<Foyer> for MemoryFoyerRepository {
    async fn find_all(&self) -> Result<Vec<Foyer>, DomainError> {
        Ok(self.store.tables.read().await.foyers.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Foyer>, DomainError> {
        Ok(self.store.tables.read().await.foyers.get(id).cloned())
    }

    async fn save(&self, foyer: &Foyer) -> Result<Foyer, DomainError> {
        let mut tables = self.store.tables.write().await;
        let id = tables.foyers.assign_id(foyer.id)?;
        let saved = foyer.clone().with_id(id);
        tables.foyers.upsert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut tables = self.store.tables.write().await;
        let removed = tables.foyers.remove(id);
        if removed {
            tables.release_foyer(id);
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.foyers.len())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.store.tables.read().await.foyers.contains(id))
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut tables = self.store.tables.write().await;
        for row in tables.universites.rows.values_mut() {
            row.foyer_id = None;
        }
        tables.foyers.clear();
        Ok(())
    }
}
