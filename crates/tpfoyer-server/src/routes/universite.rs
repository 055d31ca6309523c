//! Universite Routes - University Management
//!
//! HTTP handlers that delegate to UniversiteService. The nested `foyer`
//! object is persisted by reference through its `idFoyer`.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::{internal_error, ApiResult};
use crate::models::UniversiteDto;
use crate::AppState;

/// List all Universites
#[utoipa::path(
    get,
    path = "/universite/retrieve-all-universites",
    responses(
        (status = 200, description = "List of all Universites", body = Vec<UniversiteDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Universite"
)]
pub async fn retrieve_all_universites(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UniversiteDto>>> {
    let universites = state
        .universite_service
        .retrieve_all()
        .await
        .map_err(internal_error)?;

    Ok(Json(universites.into_iter().map(UniversiteDto::from).collect()))
}

/// Get Universite by ID
#[utoipa::path(
    get,
    path = "/universite/retrieve-universite/{universite_id}",
    params(("universite_id" = i64, Path, description = "Universite ID")),
    responses(
        (status = 200, description = "Universite found", body = UniversiteDto),
        (status = 500, description = "Universite not found or internal server error")
    ),
    tag = "Universite"
)]
pub async fn retrieve_universite(
    State(state): State<AppState>,
    Path(universite_id): Path<i64>,
) -> ApiResult<Json<UniversiteDto>> {
    let universite = state
        .universite_service
        .retrieve(universite_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(universite.into()))
}

/// Create new Universite
#[utoipa::path(
    post,
    path = "/universite/add-universite",
    request_body = UniversiteDto,
    responses(
        (status = 200, description = "Universite created", body = UniversiteDto),
        (status = 500, description = "Unknown Foyer or internal server error")
    ),
    tag = "Universite"
)]
pub async fn add_universite(
    State(state): State<AppState>,
    Json(payload): Json<UniversiteDto>,
) -> ApiResult<Json<UniversiteDto>> {
    let universite = state
        .universite_service
        .add(payload.into())
        .await
        .map_err(internal_error)?;

    Ok(Json(universite.into()))
}

/// Replace a Universite identified by its `idUniversite`
#[utoipa::path(
    put,
    path = "/universite/modify-universite",
    request_body = UniversiteDto,
    responses(
        (status = 200, description = "Universite modified", body = UniversiteDto),
        (status = 500, description = "Unknown Foyer or internal server error")
    ),
    tag = "Universite"
)]
pub async fn modify_universite(
    State(state): State<AppState>,
    Json(payload): Json<UniversiteDto>,
) -> ApiResult<Json<UniversiteDto>> {
    let universite = state
        .universite_service
        .modify(payload.into())
        .await
        .map_err(internal_error)?;

    Ok(Json(universite.into()))
}

/// Delete Universite (its Foyer is kept)
#[utoipa::path(
    delete,
    path = "/universite/remove-universite/{universite_id}",
    params(("universite_id" = i64, Path, description = "Universite ID")),
    responses(
        (status = 200, description = "Universite deleted, or did not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Universite"
)]
pub async fn remove_universite(
    State(state): State<AppState>,
    Path(universite_id): Path<i64>,
) -> ApiResult<()> {
    state
        .universite_service
        .remove(universite_id)
        .await
        .map_err(internal_error)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/universite/retrieve-all-universites",
            get(retrieve_all_universites),
        )
        .route(
            "/universite/retrieve-universite/:universite_id",
            get(retrieve_universite),
        )
        .route("/universite/add-universite", post(add_universite))
        .route("/universite/modify-universite", put(modify_universite))
        .route(
            "/universite/remove-universite/:universite_id",
            delete(remove_universite),
        )
}
