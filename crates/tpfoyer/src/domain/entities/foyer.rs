//! Foyer - Dormitory
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Foyer - a dormitory with a bed capacity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foyer {
    pub id: Option<i64>,
    pub nom: Option<String>,
    pub capacite: Option<i64>,
}

impl Foyer {
    /// Create an unsaved Foyer
    pub fn new(nom: impl Into<String>, capacite: i64) -> Self {
        Self {
            id: None,
            nom: Some(nom.into()),
            capacite: Some(capacite),
        }
    }
}

impl Entity for Foyer {
    const KIND: &'static str = "Foyer";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
