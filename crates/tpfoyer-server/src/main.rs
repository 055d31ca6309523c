use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use tpfoyer_server::adapters::{MemoryStore, MIGRATOR};
use tpfoyer_server::{AppConfig, AppState, StorageBackend};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🏠 TP Foyer API initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key)).map_err(anyhow::Error::from)?;

    let state = match config.storage {
        StorageBackend::Postgres => {
            if config.run_migrations {
                MIGRATOR
                    .run(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("✅ Database migrations completed");
            } else {
                tracing::warn!("⚠️  RUN_MIGRATIONS disabled - schema must already exist");
            }
            AppState::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("⚠️  STORAGE_BACKEND=memory - records are lost on restart");
            AppState::in_memory(Arc::new(MemoryStore::default()))
        }
    };

    let router = tpfoyer_server::app(state, &config);

    if config.swagger_ui {
        tracing::info!("📚 Swagger UI: /swagger-ui");
    }
    tracing::info!("✅ TP Foyer API ready");

    Ok(router.into())
}
