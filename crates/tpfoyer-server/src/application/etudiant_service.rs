//! Etudiant Application Service (Use Case)

use std::sync::Arc;

use tpfoyer::{CrudRepository, DomainError, Entity, Etudiant};

/// Application service for Etudiant operations
pub struct EtudiantService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: CrudRepository<Etudiant> + ?Sized> EtudiantService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn retrieve_all(&self) -> Result<Vec<Etudiant>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn retrieve(&self, id: i64) -> Result<Etudiant, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Etudiant::KIND, id))
    }

    pub async fn add(&self, etudiant: Etudiant) -> Result<Etudiant, DomainError> {
        let saved = self.repo.save(&etudiant).await?;
        tracing::info!(
            "Created Etudiant: {:?} {:?} ({:?})",
            saved.prenom,
            saved.nom,
            saved.id
        );
        Ok(saved)
    }

    pub async fn modify(&self, etudiant: Etudiant) -> Result<Etudiant, DomainError> {
        let saved = self.repo.save(&etudiant).await?;
        tracing::info!("Modified Etudiant: {:?}", saved.id);
        Ok(saved)
    }

    pub async fn remove(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete_by_id(id).await? {
            tracing::info!("Deleted Etudiant: {}", id);
        }
        Ok(())
    }
}
