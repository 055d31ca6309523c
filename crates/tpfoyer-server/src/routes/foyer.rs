//! Foyer Routes - Dormitory Management
//!
//! HTTP handlers that delegate to FoyerService for business logic.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::{internal_error, ApiResult};
use crate::models::FoyerDto;
use crate::AppState;

/// List all Foyers
#[utoipa::path(
    get,
    path = "/foyer/retrieve-all-foyers",
    responses(
        (status = 200, description = "List of all Foyers", body = Vec<FoyerDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Foyer"
)]
pub async fn retrieve_all_foyers(State(state): State<AppState>) -> ApiResult<Json<Vec<FoyerDto>>> {
    let foyers = state
        .foyer_service
        .retrieve_all()
        .await
        .map_err(internal_error)?;

    Ok(Json(foyers.into_iter().map(FoyerDto::from).collect()))
}

/// Get Foyer by ID
#[utoipa::path(
    get,
    path = "/foyer/retrieve-foyer/{foyer_id}",
    params(("foyer_id" = i64, Path, description = "Foyer ID")),
    responses(
        (status = 200, description = "Foyer found", body = FoyerDto),
        (status = 500, description = "Foyer not found or internal server error")
    ),
    tag = "Foyer"
)]
pub async fn retrieve_foyer(
    State(state): State<AppState>,
    Path(foyer_id): Path<i64>,
) -> ApiResult<Json<FoyerDto>> {
    let foyer = state
        .foyer_service
        .retrieve(foyer_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(foyer.into()))
}

/// Create new Foyer
#[utoipa::path(
    post,
    path = "/foyer/add-foyer",
    request_body = FoyerDto,
    responses(
        (status = 200, description = "Foyer created", body = FoyerDto),
        (status = 500, description = "Internal server error")
    ),
    tag = "Foyer"
)]
pub async fn add_foyer(
    State(state): State<AppState>,
    Json(payload): Json<FoyerDto>,
) -> ApiResult<Json<FoyerDto>> {
    let foyer = state
        .foyer_service
        .add(payload.into())
        .await
        .map_err(internal_error)?;

    Ok(Json(foyer.into()))
}

/// Replace a Foyer identified by its `idFoyer`
#[utoipa::path(
    put,
    path = "/foyer/modify-foyer",
    request_body = FoyerDto,
    responses(
        (status = 200, description = "Foyer modified", body = FoyerDto),
        (status = 500, description = "Internal server error")
    ),
    tag = "Foyer"
)]
pub async fn modify_foyer(
    State(state): State<AppState>,
    Json(payload): Json<FoyerDto>,
) -> ApiResult<Json<FoyerDto>> {
    let foyer = state
        .foyer_service
        .modify(payload.into())
        .await
        .map_err(internal_error)?;

    Ok(Json(foyer.into()))
}

/// Delete Foyer
#[utoipa::path(
    delete,
    path = "/foyer/remove-foyer/{foyer_id}",
    params(("foyer_id" = i64, Path, description = "Foyer ID")),
    responses(
        (status = 200, description = "Foyer deleted, or did not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Foyer"
)]
pub async fn remove_foyer(
    State(state): State<AppState>,
    Path(foyer_id): Path<i64>,
) -> ApiResult<()> {
    state
        .foyer_service
        .remove(foyer_id)
        .await
        .map_err(internal_error)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/foyer/retrieve-all-foyers", get(retrieve_all_foyers))
        .route("/foyer/retrieve-foyer/:foyer_id", get(retrieve_foyer))
        .route("/foyer/add-foyer", post(add_foyer))
        .route("/foyer/modify-foyer", put(modify_foyer))
        .route("/foyer/remove-foyer/:foyer_id", delete(remove_foyer))
}
