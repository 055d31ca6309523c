//! Etudiant Routes - Student Management

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::{internal_error, ApiResult};
use crate::models::EtudiantDto;
use crate::AppState;

/// List all Etudiants
#[utoipa::path(
    get,
    path = "/etudiant/retrieve-all-etudiants",
    responses(
        (status = 200, description = "List of all Etudiants", body = Vec<EtudiantDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Etudiant"
)]
pub async fn retrieve_all_etudiants(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EtudiantDto>>> {
    let etudiants = state
        .etudiant_service
        .retrieve_all()
        .await
        .map_err(internal_error)?;

    Ok(Json(etudiants.into_iter().map(EtudiantDto::from).collect()))
}

/// Get Etudiant by ID
#[utoipa::path(
    get,
    path = "/etudiant/retrieve-etudiant/{etudiant_id}",
    params(("etudiant_id" = i64, Path, description = "Etudiant ID")),
    responses(
        (status = 200, description = "Etudiant found", body = EtudiantDto),
        (status = 500, description = "Etudiant not found or internal server error")
    ),
    tag = "Etudiant"
)]
pub async fn retrieve_etudiant(
    State(state): State<AppState>,
    Path(etudiant_id): Path<i64>,
) -> ApiResult<Json<EtudiantDto>> {
    let etudiant = state
        .etudiant_service
        .retrieve(etudiant_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(etudiant.into()))
}

/// Create new Etudiant
#[utoipa::path(
    post,
    path = "/etudiant/add-etudiant",
    request_body = EtudiantDto,
    responses(
        (status = 200, description = "Etudiant created", body = EtudiantDto),
        (status = 500, description = "Internal server error")
    ),
    tag = "Etudiant"
)]
pub async fn add_etudiant(
    State(state): State<AppState>,
    Json(payload): Json<EtudiantDto>,
) -> ApiResult<Json<EtudiantDto>> {
    let etudiant = state
        .etudiant_service
        .add(payload.into())
        .await
        .map_err(internal_error)?;

    Ok(Json(etudiant.into()))
}

/// Replace an Etudiant identified by its `idEtudiant`
#[utoipa::path(
    put,
    path = "/etudiant/modify-etudiant",
    request_body = EtudiantDto,
    responses(
        (status = 200, description = "Etudiant modified", body = EtudiantDto),
        (status = 500, description = "Internal server error")
    ),
    tag = "Etudiant"
)]
pub async fn modify_etudiant(
    State(state): State<AppState>,
    Json(payload): Json<EtudiantDto>,
) -> ApiResult<Json<EtudiantDto>> {
    let etudiant = state
        .etudiant_service
        .modify(payload.into())
        .await
        .map_err(internal_error)?;

    Ok(Json(etudiant.into()))
}

/// Delete Etudiant
#[utoipa::path(
    delete,
    path = "/etudiant/remove-etudiant/{etudiant_id}",
    params(("etudiant_id" = i64, Path, description = "Etudiant ID")),
    responses(
        (status = 200, description = "Etudiant deleted, or did not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Etudiant"
)]
pub async fn remove_etudiant(
    State(state): State<AppState>,
    Path(etudiant_id): Path<i64>,
) -> ApiResult<()> {
    state
        .etudiant_service
        .remove(etudiant_id)
        .await
        .map_err(internal_error)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/etudiant/retrieve-all-etudiants", get(retrieve_all_etudiants))
        .route("/etudiant/retrieve-etudiant/:etudiant_id", get(retrieve_etudiant))
        .route("/etudiant/add-etudiant", post(add_etudiant))
        .route("/etudiant/modify-etudiant", put(modify_etudiant))
        .route("/etudiant/remove-etudiant/:etudiant_id", delete(remove_etudiant))
}
