//! PostgreSQL implementation of CrudRepository<Foyer>

use async_trait::async_trait;
use sqlx::PgPool;

use tpfoyer::{CrudRepository, DomainError, Foyer};

use super::{advance_identity, begin, map_db_error};

/// PostgreSQL implementation of the Foyer repository
pub struct PgFoyerRepository {
    pool: PgPool,
}

impl PgFoyerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct FoyerRow {
    id_foyer: i64,
    nom_foyer: Option<String>,
    capacite_foyer: Option<i64>,
}

impl From<FoyerRow> for Foyer {
    fn from(row: FoyerRow) -> Self {
        Self {
            id: Some(row.id_foyer),
            nom: row.nom_foyer,
            capacite: row.capacite_foyer,
        }
    }
}

#[async_trait]
impl CrudRepository<Foyer> for PgFoyerRepository {
    async fn find_all(&self) -> Result<Vec<Foyer>, DomainError> {
        let rows = sqlx::query_as::<_, FoyerRow>(
            "SELECT id_foyer, nom_foyer, capacite_foyer FROM foyer ORDER BY id_foyer",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Foyer>, DomainError> {
        let row = sqlx::query_as::<_, FoyerRow>(
            "SELECT id_foyer, nom_foyer, capacite_foyer FROM foyer WHERE id_foyer = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, foyer: &Foyer) -> Result<Foyer, DomainError> {
        let row = match foyer.id {
            None => sqlx::query_as::<_, FoyerRow>(
                r#"
                INSERT INTO foyer (nom_foyer, capacite_foyer)
                VALUES ($1, $2)
                RETURNING id_foyer, nom_foyer, capacite_foyer
                "#,
            )
            .bind(&foyer.nom)
            .bind(foyer.capacite)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?,
            Some(id) => {
                let mut tx = begin(&self.pool).await?;
                let row = sqlx::query_as::<_, FoyerRow>(
                    r#"
                    INSERT INTO foyer (id_foyer, nom_foyer, capacite_foyer)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id_foyer) DO UPDATE
                    SET nom_foyer = EXCLUDED.nom_foyer, capacite_foyer = EXCLUDED.capacite_foyer
                    RETURNING id_foyer, nom_foyer, capacite_foyer
                    "#,
                )
                .bind(id)
                .bind(&foyer.nom)
                .bind(foyer.capacite)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
                advance_identity(&mut tx, "foyer", "id_foyer", id).await?;
                tx.commit().await.map_err(map_db_error)?;
                row
            }
        };

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM foyer WHERE id_foyer = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM foyer")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count as u64)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM foyer WHERE id_foyer = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists)
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM foyer")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
