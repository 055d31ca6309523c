//! TP Foyer Domain Library
//!
//! Core domain types and interfaces for the student-housing backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Core domain models (Foyer, Universite, Etudiant)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use tpfoyer::domain::{Foyer, Universite};
//! use tpfoyer::ports::CrudRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Entity, Etudiant, Foyer, Universite};
pub use ports::CrudRepository;
