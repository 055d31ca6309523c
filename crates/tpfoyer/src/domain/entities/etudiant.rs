//! Etudiant - Student

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Etudiant - a student record, no relations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etudiant {
    pub id: Option<i64>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    /// National identity card number
    pub cin: Option<i64>,
    pub date_naissance: Option<NaiveDate>,
}

impl Etudiant {
    /// Create an unsaved Etudiant
    pub fn new(
        nom: impl Into<String>,
        prenom: impl Into<String>,
        cin: i64,
        date_naissance: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            nom: Some(nom.into()),
            prenom: Some(prenom.into()),
            cin: Some(cin),
            date_naissance: Some(date_naissance),
        }
    }
}

impl Entity for Etudiant {
    const KIND: &'static str = "Etudiant";

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
