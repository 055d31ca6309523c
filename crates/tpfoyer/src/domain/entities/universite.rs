//! Universite - University
//!
//! Optionally owns exactly one Foyer. The Foyer is held by value and has no
//! link back to the Universite.

use serde::{Deserialize, Serialize};

use super::{Entity, Foyer};

/// Universite - a university, optionally attached to one Foyer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universite {
    pub id: Option<i64>,
    pub nom: Option<String>,
    pub adresse: Option<String>,
    pub foyer: Option<Foyer>,
}

impl Universite {
    /// Create an unsaved Universite without a Foyer
    pub fn new(nom: impl Into<String>, adresse: impl Into<String>) -> Self {
        Self {
            id: None,
            nom: Some(nom.into()),
            adresse: Some(adresse.into()),
            foyer: None,
        }
    }

    /// Attach a Foyer, replacing any previous one
    pub fn with_foyer(self, foyer: Foyer) -> Self {
        Self {
            foyer: Some(foyer),
            ..self
        }
    }

    /// Identifier of the referenced Foyer, if it has one
    pub fn foyer_id(&self) -> Option<i64> {
        self.foyer.as_ref().and_then(|f| f.id)
    }
}

impl Entity for Universite {
    const KIND: &'static str = "Universite";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_universite_has_no_foyer() {
        let universite = Universite::new("Université de Tunis", "Tunis, Tunisie");
        assert!(universite.is_new());
        assert!(universite.foyer.is_none());
        assert_eq!(universite.foyer_id(), None);
    }

    #[test]
    fn test_foyer_id_requires_saved_foyer() {
        let unsaved = Universite::new("U", "A").with_foyer(Foyer::new("F", 10));
        assert_eq!(unsaved.foyer_id(), None);

        let saved = Universite::new("U", "A").with_foyer(Foyer::new("F", 10).with_id(7));
        assert_eq!(saved.foyer_id(), Some(7));
    }
}
