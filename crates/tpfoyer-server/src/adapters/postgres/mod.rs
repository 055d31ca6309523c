//! PostgreSQL Repository Implementations

mod etudiant_repository;
mod foyer_repository;
mod universite_repository;

use sqlx::{PgConnection, Postgres, Transaction};
use tpfoyer::DomainError;

pub use etudiant_repository::PgEtudiantRepository;
pub use foyer_repository::PgFoyerRepository;
pub use universite_repository::PgUniversiteRepository;

/// Embedded schema migrations (`migrations/`)
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Map sqlx errors to domain errors.
///
/// Foreign key violations (23503) become `Validation` and unique violations
/// (23505) become `Conflict`, matching the in-memory adapter.
pub(crate) fn map_db_error(e: sqlx::Error) -> DomainError {
    if let Some(db) = e.as_database_error() {
        match db.code().as_deref() {
            Some("23503") => return DomainError::Validation(db.message().to_string()),
            Some("23505") => return DomainError::Conflict(db.message().to_string()),
            _ => {}
        }
    }
    DomainError::Repository(e.to_string())
}

/// Move the identity sequence of `table.column` past an explicitly written id.
///
/// The sequence only moves forward: ids already handed out, including ones
/// taken by uncommitted inserts, are never reissued.
pub(crate) async fn advance_identity(
    conn: &mut PgConnection,
    table: &'static str,
    column: &'static str,
    id: i64,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        SELECT setval(seq, GREATEST($1, COALESCE(pg_sequence_last_value(seq), 0)))
        FROM (SELECT pg_get_serial_sequence($2, $3)::regclass AS seq) s
        WHERE $1 > COALESCE(pg_sequence_last_value(seq), 0)
        "#,
    )
    .bind(id)
    .bind(table)
    .bind(column)
    .execute(conn)
    .await
    .map_err(map_db_error)?;
    Ok(())
}

pub(crate) async fn begin(pool: &sqlx::PgPool) -> Result<Transaction<'static, Postgres>, DomainError> {
    pool.begin().await.map_err(map_db_error)
}
