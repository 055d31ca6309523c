//! In-memory implementation of CrudRepository<Etudiant>

use std::sync::Arc;

use async_trait::async_trait;

use tpfoyer::{CrudRepository, DomainError, Entity, Etudiant};

use super::MemoryStore;

/// In-memory implementation of the Etudiant repository
pub struct MemoryEtudiantRepository {
    store: Arc<MemoryStore>,
}

impl MemoryEtudiantRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CrudRepository<Etudiant> for MemoryEtudiantRepository {
    async fn find_all(&self) -> Result<Vec<Etudiant>, DomainError> {
        Ok(self.store.tables.read().await.etudiants.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Etudiant>, DomainError> {
        Ok(self.store.tables.read().await.etudiants.get(id).cloned())
    }

    async fn save(&self, etudiant: &Etudiant) -> Result<Etudiant, DomainError> {
        let mut tables = self.store.tables.write().await;
        let id = tables.etudiants.assign_id(etudiant.id)?;
        let saved = etudiant.clone().with_id(id);
        tables.etudiants.upsert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.store.tables.write().await.etudiants.remove(id))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.etudiants.len())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.store.tables.read().await.etudiants.contains(id))
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.store.tables.write().await.etudiants.clear();
        Ok(())
    }
}
