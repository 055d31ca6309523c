//! In-memory implementation of CrudRepository<Universite>
//!
//! The Foyer is stored as a foreign key and joined back on every read.

use std::sync::Arc;

use async_trait::async_trait;

use tpfoyer::{CrudRepository, DomainError, Universite};

use super::{MemoryStore, Tables, UniversiteRow};

/// In-memory implementation of the Universite repository
pub struct MemoryUniversiteRepository {
    store: Arc<MemoryStore>,
}

impl MemoryUniversiteRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

/// Resolve the foreign key for a Universite about to be saved
fn resolve_foyer_id(tables: &Tables, universite: &Universite) -> Result<Option<i64>, DomainError> {
    let Some(foyer) = &universite.foyer else {
        return Ok(None);
    };

    let foyer_id = foyer.id.ok_or_else(|| {
        DomainError::Validation("Foyer must be saved before a Universite can reference it".to_string())
    })?;

    if !tables.foyers.contains(foyer_id) {
        return Err(DomainError::Validation(format!(
            "Foyer {} does not exist",
            foyer_id
        )));
    }

    let taken = tables
        .universites
        .rows
        .values()
        .any(|row| row.foyer_id == Some(foyer_id) && Some(row.id) != universite.id);
    if taken {
        return Err(DomainError::Conflict(format!(
            "Foyer {} is already assigned to another Universite",
            foyer_id
        )));
    }

    Ok(Some(foyer_id))
}

#[async_trait]
impl CrudRepository<Universite> for MemoryUniversiteRepository {
    async fn find_all(&self) -> Result<Vec<Universite>, DomainError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .universites
            .rows
            .values()
            .map(|row| tables.join_universite(row))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Universite>, DomainError> {
        let tables = self.store.tables.read().await;
        Ok(tables.universites.get(id).map(|row| tables.join_universite(row)))
    }

    async fn save(&self, universite: &Universite) -> Result<Universite, DomainError> {
        let mut tables = self.store.tables.write().await;
        let foyer_id = resolve_foyer_id(&tables, universite)?;

        let id = tables.universites.assign_id(universite.id)?;
        let row = UniversiteRow {
            id,
            nom: universite.nom.clone(),
            adresse: universite.adresse.clone(),
            foyer_id,
        };
        let saved = tables.join_universite(&row);
        tables.universites.upsert(id, row);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.store.tables.write().await.universites.remove(id))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.store.tables.read().await.universites.len())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.store.tables.read().await.universites.contains(id))
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.store.tables.write().await.universites.clear();
        Ok(())
    }
}
