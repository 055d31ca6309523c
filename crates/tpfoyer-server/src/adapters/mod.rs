//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod postgres;

// Re-exports
pub use memory::{MemoryEtudiantRepository, MemoryFoyerRepository, MemoryStore, MemoryUniversiteRepository};
pub use postgres::{PgEtudiantRepository, PgFoyerRepository, PgUniversiteRepository, MIGRATOR};
