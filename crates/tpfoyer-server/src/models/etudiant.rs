//! Etudiant - Student

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tpfoyer::Etudiant;

/// Etudiant as sent and received over HTTP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EtudiantDto {
    pub id_etudiant: Option<i64>,
    pub nom_etudiant: Option<String>,
    pub prenom_etudiant: Option<String>,
    pub cin_etudiant: Option<i64>,
    /// ISO-8601 date, e.g. `2001-09-14`
    pub date_naissance: Option<NaiveDate>,
}

impl From<Etudiant> for EtudiantDto {
    fn from(etudiant: Etudiant) -> Self {
        Self {
            id_etudiant: etudiant.id,
            nom_etudiant: etudiant.nom,
            prenom_etudiant: etudiant.prenom,
            cin_etudiant: etudiant.cin,
            date_naissance: etudiant.date_naissance,
        }
    }
}

impl From<EtudiantDto> for Etudiant {
    fn from(dto: EtudiantDto) -> Self {
        Self {
            id: dto.id_etudiant,
            nom: dto.nom_etudiant,
            prenom: dto.prenom_etudiant,
            cin: dto.cin_etudiant,
            date_naissance: dto.date_naissance,
        }
    }
}
