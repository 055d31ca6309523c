//! In-memory Repository Implementations
//!
//! Every table lives behind a single `RwLock`, so each repository call is
//! atomic with respect to all others, including the Universite → Foyer join.

mod etudiant_repository;
mod foyer_repository;
mod universite_repository;

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use tpfoyer::{DomainError, Etudiant, Foyer, Universite};

pub use etudiant_repository::MemoryEtudiantRepository;
pub use foyer_repository::MemoryFoyerRepository;
pub use universite_repository::MemoryUniversiteRepository;

/// Shared backing store for the in-memory repositories
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    foyers: Table<Foyer>,
    universites: Table<UniversiteRow>,
    etudiants: Table<Etudiant>,
}

/// Universite as stored: the Foyer is kept as a foreign key
#[derive(Debug, Clone)]
struct UniversiteRow {
    id: i64,
    nom: Option<String>,
    adresse: Option<String>,
    foyer_id: Option<i64>,
}

impl Tables {
    fn join_universite(&self, row: &UniversiteRow) -> Universite {
        Universite {
            id: Some(row.id),
            nom: row.nom.clone(),
            adresse: row.adresse.clone(),
            foyer: row.foyer_id.and_then(|id| self.foyers.get(id).cloned()),
        }
    }

    /// Clear references to removed Foyers (`ON DELETE SET NULL`)
    fn release_foyer(&mut self, foyer_id: i64) {
        for row in self.universites.rows.values_mut() {
            if row.foyer_id == Some(foyer_id) {
                row.foyer_id = None;
            }
        }
    }
}

/// Rows keyed by identifier, with an identity counter
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Reuse the requested identifier or generate the next one.
    /// The counter never falls behind an explicitly chosen identifier.
    fn assign_id(&mut self, requested: Option<i64>) -> Result<i64, DomainError> {
        match requested {
            Some(id) => {
                self.last_id = self.last_id.max(id);
                Ok(id)
            }
            None => {
                self.last_id = self
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| DomainError::Repository("identity exhausted".to_string()))?;
                Ok(self.last_id)
            }
        }
    }

    fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    fn upsert(&mut self, id: i64, row: T) {
        self.rows.insert(id, row);
    }

    fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn len(&self) -> u64 {
        self.rows.len() as u64
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
