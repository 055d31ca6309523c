//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod crud_repository;

pub use crud_repository::*;
