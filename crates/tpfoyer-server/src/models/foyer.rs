//! Foyer - Dormitory

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tpfoyer::Foyer;

/// Foyer as sent and received over HTTP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoyerDto {
    pub id_foyer: Option<i64>,
    #[schema(example = "Foyer A")]
    pub nom_foyer: Option<String>,
    #[schema(example = 100)]
    pub capacite_foyer: Option<i64>,
}

impl From<Foyer> for FoyerDto {
    fn from(foyer: Foyer) -> Self {
        Self {
            id_foyer: foyer.id,
            nom_foyer: foyer.nom,
            capacite_foyer: foyer.capacite,
        }
    }
}

impl From<FoyerDto> for Foyer {
    fn from(dto: FoyerDto) -> Self {
        Self {
            id: dto.id_foyer,
            nom: dto.nom_foyer,
            capacite: dto.capacite_foyer,
        }
    }
}
