//! TP Foyer API Server
//!
//! REST facade over the Foyer, Universite and Etudiant repositories.
//! The binary wires it to Shuttle's Postgres; tests wire it to the
//! in-memory adapters or to stubs.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use tpfoyer::{CrudRepository, Etudiant, Foyer, Universite};

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;

#[cfg(test)]
mod testing;

pub use config::{AppConfig, ConfigError, StorageBackend};

use adapters::{
    MemoryEtudiantRepository, MemoryFoyerRepository, MemoryStore, MemoryUniversiteRepository,
    PgEtudiantRepository, PgFoyerRepository, PgUniversiteRepository,
};
use application::{EtudiantService, FoyerService, UniversiteService};

/// Type aliases for application services over a runtime-selected repository
pub type AppFoyerService = FoyerService<dyn CrudRepository<Foyer>>;
pub type AppUniversiteService = UniversiteService<dyn CrudRepository<Universite>>;
pub type AppEtudiantService = EtudiantService<dyn CrudRepository<Etudiant>>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub foyer_service: Arc<AppFoyerService>,
    pub universite_service: Arc<AppUniversiteService>,
    pub etudiant_service: Arc<AppEtudiantService>,
}

impl AppState {
    pub fn new(
        foyers: Arc<dyn CrudRepository<Foyer>>,
        universites: Arc<dyn CrudRepository<Universite>>,
        etudiants: Arc<dyn CrudRepository<Etudiant>>,
    ) -> Self {
        Self {
            foyer_service: Arc::new(FoyerService::new(foyers)),
            universite_service: Arc::new(UniversiteService::new(universites)),
            etudiant_service: Arc::new(EtudiantService::new(etudiants)),
        }
    }

    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgFoyerRepository::new(pool.clone())),
            Arc::new(PgUniversiteRepository::new(pool.clone())),
            Arc::new(PgEtudiantRepository::new(pool)),
        )
    }

    /// State backed by a shared in-memory store
    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self::new(
            Arc::new(MemoryFoyerRepository::new(store.clone())),
            Arc::new(MemoryUniversiteRepository::new(store.clone())),
            Arc::new(MemoryEtudiantRepository::new(store)),
        )
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "TP Foyer API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full HTTP application
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::foyer::router())
        .merge(routes::universite::router())
        .merge(routes::etudiant::router());

    if config.swagger_ui {
        let openapi = routes::swagger::ApiDoc::openapi();
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use super::*;
    use crate::testing::{request, send, StubRepositories};

    #[tokio::test]
    async fn test_health_check() {
        let stubs = StubRepositories::new(Vec::new(), Vec::new(), Vec::new());

        let res = send(stubs.router(), request(Method::GET, "/health", None)).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["status"], "ok");
    }

    #[tokio::test]
    async fn test_swagger_can_be_disabled() {
        let stubs = StubRepositories::new(Vec::new(), Vec::new(), Vec::new());
        let config = AppConfig {
            swagger_ui: false,
            ..AppConfig::default()
        };

        let res = send(
            app(stubs.state(), &config),
            request(Method::GET, "/api-docs/openapi.json", None),
        )
        .await;

        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_json_is_served() {
        let stubs = StubRepositories::new(Vec::new(), Vec::new(), Vec::new());

        let res = send(
            stubs.router(),
            request(Method::GET, "/api-docs/openapi.json", None),
        )
        .await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["info"]["title"], "TP Foyer API");
    }

    #[tokio::test]
    async fn test_in_memory_state_shares_one_store() {
        let store = Arc::new(MemoryStore::default());
        let first = AppState::in_memory(store.clone());
        let second = AppState::in_memory(store);

        let saved = first
            .foyer_service
            .add(Foyer::new("Foyer Partagé", 40))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let found = second.foyer_service.retrieve(id).await.unwrap();
        assert_eq!(found.nom.as_deref(), Some("Foyer Partagé"));
    }
}
