//! Universite - University with an optional nested Foyer

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tpfoyer::Universite;

use super::FoyerDto;

/// Universite as sent and received over HTTP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversiteDto {
    pub id_universite: Option<i64>,
    #[schema(example = "Université de Tunis")]
    pub nom_universite: Option<String>,
    #[schema(example = "Tunis, Tunisie")]
    pub adresse: Option<String>,
    /// Referenced Foyer; only its `idFoyer` is used when saving
    pub foyer: Option<FoyerDto>,
}

impl From<Universite> for UniversiteDto {
    fn from(universite: Universite) -> Self {
        Self {
            id_universite: universite.id,
            nom_universite: universite.nom,
            adresse: universite.adresse,
            foyer: universite.foyer.map(Into::into),
        }
    }
}

impl From<UniversiteDto> for Universite {
    fn from(dto: UniversiteDto) -> Self {
        Self {
            id: dto.id_universite,
            nom: dto.nom_universite,
            adresse: dto.adresse,
            foyer: dto.foyer.map(Into::into),
        }
    }
}
