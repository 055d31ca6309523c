//! TP Foyer API Routes
//!
//! - /foyer/* - Foyer (dormitory) management
//! - /universite/* - Universite management, with its Foyer
//! - /etudiant/* - Etudiant (student) management
//!
//! Handlers do no validation and no error translation: every service error,
//! NotFound included, is answered with 500 and the error text.

use axum::http::StatusCode;
use tpfoyer::DomainError;

pub mod etudiant;
pub mod foyer;
pub mod swagger;
pub mod universite;

pub(crate) type ApiResult<T> = Result<T, (StatusCode, String)>;

pub(crate) fn internal_error(e: DomainError) -> (StatusCode, String) {
    tracing::error!("Request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
