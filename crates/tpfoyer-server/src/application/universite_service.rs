//! Universite Application Service (Use Case)
//!
//! An embedded Foyer is saved by reference only: it must already exist, and
//! its fields come back from storage on every read.

use std::sync::Arc;

use tpfoyer::{CrudRepository, DomainError, Entity, Universite};

/// Application service for Universite operations
pub struct UniversiteService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: CrudRepository<Universite> + ?Sized> UniversiteService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Universites with their Foyers
    pub async fn retrieve_all(&self) -> Result<Vec<Universite>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Universite by ID, failing when it does not exist
    pub async fn retrieve(&self, id: i64) -> Result<Universite, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Universite::KIND, id))
    }

    /// Create a new Universite
    pub async fn add(&self, universite: Universite) -> Result<Universite, DomainError> {
        let saved = self.repo.save(&universite).await?;

        tracing::info!(
            "Created Universite: {:?} ({:?}) - foyer {:?}",
            saved.nom,
            saved.id,
            saved.foyer_id()
        );

        Ok(saved)
    }

    /// Replace a Universite by the identifier it carries.
    /// Attaching, swapping or clearing the Foyer happens here.
    pub async fn modify(&self, universite: Universite) -> Result<Universite, DomainError> {
        let saved = self.repo.save(&universite).await?;
        tracing::info!(
            "Modified Universite: {:?} - foyer {:?}",
            saved.id,
            saved.foyer_id()
        );
        Ok(saved)
    }

    /// Delete a Universite. Its Foyer is kept.
    pub async fn remove(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete_by_id(id).await? {
            tracing::info!("Deleted Universite: {}", id);
        }
        Ok(())
    }
}
