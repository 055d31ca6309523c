//! TP Foyer Wire Models
//!
//! JSON shapes of the REST API. Field names are fixed by the public contract
//! (`idFoyer`, `nomUniversite`, ...), absent values are sent as `null`.
//!
//! - Foyer: Dormitory
//! - Universite: University with an optional nested Foyer
//! - Etudiant: Student

mod etudiant;
mod foyer;
mod universite;

pub use etudiant::*;
pub use foyer::*;
pub use universite::*;
