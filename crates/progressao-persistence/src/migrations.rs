//! Runner de las migraciones embebidas (`migrations/` de este crate).
//! Se ejecutan una sola vez al construir el pool.

use crate::error::PersistenceError;
use diesel::pg::PgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::debug;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn run_pending_migrations(conn: &mut PgConnection) -> Result<(), PersistenceError> {
    let applied = conn.run_pending_migrations(MIGRATIONS)
                      .map_err(|e| PersistenceError::Unknown(format!("migration error: {e}")))?;
    debug!("migrations applied={}", applied.len());
    Ok(())
}
