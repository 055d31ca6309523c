//! PostgreSQL implementation of CrudRepository<Universite>
//!
//! The Foyer reference is the `foyer_id` foreign key; reads join `foyer` so
//! the embedded Foyer always reflects its current row.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use tpfoyer::{CrudRepository, DomainError, Foyer, Universite};

use super::{advance_identity, begin, map_db_error};

const SELECT_UNIVERSITE: &str = r#"
    SELECT u.id_universite, u.nom_universite, u.adresse,
           f.id_foyer, f.nom_foyer, f.capacite_foyer
    FROM universite u
    LEFT JOIN foyer f ON f.id_foyer = u.foyer_id
"#;

/// PostgreSQL implementation of the Universite repository
pub struct PgUniversiteRepository {
    pool: PgPool,
}

impl PgUniversiteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping (Universite joined with its Foyer)
#[derive(sqlx::FromRow)]
struct UniversiteRow {
    id_universite: i64,
    nom_universite: Option<String>,
    adresse: Option<String>,
    id_foyer: Option<i64>,
    nom_foyer: Option<String>,
    capacite_foyer: Option<i64>,
}

impl From<UniversiteRow> for Universite {
    fn from(row: UniversiteRow) -> Self {
        let foyer = row.id_foyer.map(|id| Foyer {
            id: Some(id),
            nom: row.nom_foyer,
            capacite: row.capacite_foyer,
        });

        Self {
            id: Some(row.id_universite),
            nom: row.nom_universite,
            adresse: row.adresse,
            foyer,
        }
    }
}

async fn fetch_joined(conn: &mut PgConnection, id: i64) -> Result<Option<Universite>, DomainError> {
    let sql = format!("{SELECT_UNIVERSITE} WHERE u.id_universite = $1");
    let row = sqlx::query_as::<_, UniversiteRow>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(map_db_error)?;

    Ok(row.map(Into::into))
}

#[async_trait]
impl CrudRepository<Universite> for PgUniversiteRepository {
    async fn find_all(&self) -> Result<Vec<Universite>, DomainError> {
        let sql = format!("{SELECT_UNIVERSITE} ORDER BY u.id_universite");
        let rows = sqlx::query_as::<_, UniversiteRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Universite>, DomainError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        fetch_joined(&mut conn, id).await
    }

    async fn save(&self, universite: &Universite) -> Result<Universite, DomainError> {
        if universite.foyer.is_some() && universite.foyer_id().is_none() {
            return Err(DomainError::Validation(
                "Foyer must be saved before a Universite can reference it".to_string(),
            ));
        }

        let mut tx = begin(&self.pool).await?;

        let id = match universite.id {
            None => sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO universite (nom_universite, adresse, foyer_id)
                VALUES ($1, $2, $3)
                RETURNING id_universite
                "#,
            )
            .bind(&universite.nom)
            .bind(&universite.adresse)
            .bind(universite.foyer_id())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?,
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO universite (id_universite, nom_universite, adresse, foyer_id)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id_universite) DO UPDATE
                    SET nom_universite = EXCLUDED.nom_universite,
                        adresse = EXCLUDED.adresse,
                        foyer_id = EXCLUDED.foyer_id
                    "#,
                )
                .bind(id)
                .bind(&universite.nom)
                .bind(&universite.adresse)
                .bind(universite.foyer_id())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
                advance_identity(&mut tx, "universite", "id_universite", id).await?;
                id
            }
        };

        let saved = fetch_joined(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::Repository(format!("Universite {} vanished during save", id)))?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM universite WHERE id_universite = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM universite")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count as u64)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM universite WHERE id_universite = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM universite")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
