//! Application Layer (Use Cases)
//!
//! Thin facades over the repositories. The services turn an absent record
//! into `DomainError::NotFound`; everything else is a pass-through.

mod etudiant_service;
mod foyer_service;
mod universite_service;

pub use etudiant_service::EtudiantService;
pub use foyer_service::FoyerService;
pub use universite_service::UniversiteService;
