//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{EtudiantDto, FoyerDto, UniversiteDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        // Foyer endpoints
        super::foyer::retrieve_all_foyers,
        super::foyer::retrieve_foyer,
        super::foyer::add_foyer,
        super::foyer::modify_foyer,
        super::foyer::remove_foyer,
        // Universite endpoints
        super::universite::retrieve_all_universites,
        super::universite::retrieve_universite,
        super::universite::add_universite,
        super::universite::modify_universite,
        super::universite::remove_universite,
        // Etudiant endpoints
        super::etudiant::retrieve_all_etudiants,
        super::etudiant::retrieve_etudiant,
        super::etudiant::add_etudiant,
        super::etudiant::modify_etudiant,
        super::etudiant::remove_etudiant,
    ),
    info(
        title = "TP Foyer API",
        version = "0.1.0",
        description = "Student housing management: Foyers, Universites and Etudiants.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Foyer", description = "Foyer - Dormitory management"),
        (name = "Universite", description = "Universite - University management, with its Foyer"),
        (name = "Etudiant", description = "Etudiant - Student management"),
    ),
    components(
        schemas(
            FoyerDto,
            UniversiteDto,
            EtudiantDto,
            crate::HealthCheck,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_resource_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/foyer/retrieve-foyer/{foyer_id}"));
        assert!(paths.iter().any(|p| *p == "/universite/add-universite"));
        assert!(paths.iter().any(|p| *p == "/etudiant/remove-etudiant/{etudiant_id}"));
        assert_eq!(paths.len(), 16);
    }

    #[test]
    fn test_registers_dto_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;

        assert!(schemas.contains_key("FoyerDto"));
        assert!(schemas.contains_key("UniversiteDto"));
        assert!(schemas.contains_key("EtudiantDto"));
    }
}
