//! Foyer Application Service (Use Case)
//!
//! Orchestrates domain operations for Foyer management.

use std::sync::Arc;

use tpfoyer::{CrudRepository, DomainError, Entity, Foyer};

/// Application service for Foyer operations
pub struct FoyerService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: CrudRepository<Foyer> + ?Sized> FoyerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Foyers
    pub async fn retrieve_all(&self) -> Result<Vec<Foyer>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Foyer by ID, failing when it does not exist
    pub async fn retrieve(&self, id: i64) -> Result<Foyer, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Foyer::KIND, id))
    }

    /// Create a new Foyer
    pub async fn add(&self, foyer: Foyer) -> Result<Foyer, DomainError> {
        let saved = self.repo.save(&foyer).await?;

        tracing::info!(
            "Created Foyer: {:?} ({:?}) - capacity {:?}",
            saved.nom,
            saved.id,
            saved.capacite
        );

        Ok(saved)
    }

    /// Replace a Foyer by the identifier it carries
    pub async fn modify(&self, foyer: Foyer) -> Result<Foyer, DomainError> {
        let saved = self.repo.save(&foyer).await?;
        tracing::info!("Modified Foyer: {:?}", saved.id);
        Ok(saved)
    }

    /// Delete a Foyer. Unknown ids are ignored.
    pub async fn remove(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete_by_id(id).await? {
            tracing::info!("Deleted Foyer: {}", id);
        }
        Ok(())
    }
}
