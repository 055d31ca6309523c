//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Foyer: Dormitory with a capacity
//! - Universite: University, optionally owning one Foyer
//! - Etudiant: Student record

mod entity;
mod etudiant;
mod foyer;
mod universite;

pub use entity::*;
pub use etudiant::*;
pub use foyer::*;
pub use universite::*;
