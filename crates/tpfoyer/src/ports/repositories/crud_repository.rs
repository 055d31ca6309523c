//! CRUD Repository Port
//!
//! Abstract interface for persistence of any [`Entity`].

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Entity};

/// Repository interface shared by every entity kind
#[async_trait]
pub trait CrudRepository<E: Entity>: Send + Sync {
    /// Find all records, ordered by identifier
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    /// Find a record by ID. A missing record is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError>;

    /// Save a record.
    ///
    /// Without an identifier a fresh one is assigned and the record inserted.
    /// With an identifier the stored record is replaced, or created under that
    /// identifier if it does not exist.
    async fn save(&self, record: &E) -> Result<E, DomainError>;

    /// Delete a record by ID. Returns whether a record was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Number of stored records
    async fn count(&self) -> Result<u64, DomainError>;

    /// Check if a record exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Remove every record
    async fn delete_all(&self) -> Result<(), DomainError>;
}
