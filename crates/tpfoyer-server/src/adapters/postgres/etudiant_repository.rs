//! PostgreSQL implementation of CrudRepository<Etudiant>

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use tpfoyer::{CrudRepository, DomainError, Etudiant};

use super::{advance_identity, begin, map_db_error};

/// PostgreSQL implementation of the Etudiant repository
pub struct PgEtudiantRepository {
    pool: PgPool,
}

impl PgEtudiantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct EtudiantRow {
    id_etudiant: i64,
    nom_etudiant: Option<String>,
    prenom_etudiant: Option<String>,
    cin_etudiant: Option<i64>,
    date_naissance: Option<NaiveDate>,
}

impl From<EtudiantRow> for Etudiant {
    fn from(row: EtudiantRow) -> Self {
        Self {
            id: Some(row.id_etudiant),
            nom: row.nom_etudiant,
            prenom: row.prenom_etudiant,
            cin: row.cin_etudiant,
            date_naissance: row.date_naissance,
        }
    }
}

#[async_trait]
impl CrudRepository<Etudiant> for PgEtudiantRepository {
    async fn find_all(&self) -> Result<Vec<Etudiant>, DomainError> {
        let rows = sqlx::query_as::<_, EtudiantRow>(
            "SELECT id_etudiant, nom_etudiant, prenom_etudiant, cin_etudiant, date_naissance \
             FROM etudiant ORDER BY id_etudiant",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Etudiant>, DomainError> {
        let row = sqlx::query_as::<_, EtudiantRow>(
            "SELECT id_etudiant, nom_etudiant, prenom_etudiant, cin_etudiant, date_naissance \
             FROM etudiant WHERE id_etudiant = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, etudiant: &Etudiant) -> Result<Etudiant, DomainError> {
        let row = match etudiant.id {
            None => sqlx::query_as::<_, EtudiantRow>(
                r#"
                INSERT INTO etudiant (nom_etudiant, prenom_etudiant, cin_etudiant, date_naissance)
                VALUES ($1, $2, $3, $4)
                RETURNING id_etudiant, nom_etudiant, prenom_etudiant, cin_etudiant, date_naissance
                "#,
            )
            .bind(&etudiant.nom)
            .bind(&etudiant.prenom)
            .bind(etudiant.cin)
            .bind(etudiant.date_naissance)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?,
            Some(id) => {
                let mut tx = begin(&self.pool).await?;
                let row = sqlx::query_as::<_, EtudiantRow>(
                    r#"
                    INSERT INTO etudiant (id_etudiant, nom_etudiant, prenom_etudiant, cin_etudiant, date_naissance)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id_etudiant) DO UPDATE
                    SET nom_etudiant = EXCLUDED.nom_etudiant,
                        prenom_etudiant = EXCLUDED.prenom_etudiant,
                        cin_etudiant = EXCLUDED.cin_etudiant,
                        date_naissance = EXCLUDED.date_naissance
                    RETURNING id_etudiant, nom_etudiant, prenom_etudiant, cin_etudiant, date_naissance
                    "#,
                )
                .bind(id)
                .bind(&etudiant.nom)
                .bind(&etudiant.prenom)
                .bind(etudiant.cin)
                .bind(etudiant.date_naissance)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
                advance_identity(&mut tx, "etudiant", "id_etudiant", id).await?;
                tx.commit().await.map_err(map_db_error)?;
                row
            }
        };

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM etudiant WHERE id_etudiant = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM etudiant")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count as u64)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM etudiant WHERE id_etudiant = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM etudiant")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
