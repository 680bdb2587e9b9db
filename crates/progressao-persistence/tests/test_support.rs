#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use once_cell::sync::Lazy;
use progressao_persistence::config::DbConfig;
use progressao_persistence::pg::{build_pool, PgPool};

pub static TEST_POOL: Lazy<Option<PgPool>> = Lazy::new(|| {
    let cfg = match DbConfig::from_env() {
        Ok(Some(cfg)) => cfg,
        _ => return None,
    };
    match build_pool(&cfg.url, 1, 2) {
        Ok(p) => Some(p),
        Err(e) => {
            eprintln!("No se pudo construir pool de test: {e}");
            None
        }
    }
});

pub fn with_pool<F, R>(f: F) -> Option<R>
    where F: FnOnce(&PgPool) -> R
{
    TEST_POOL.as_ref().map(f)
}

/// Vacía la tabla para que cada test parta de un estado conocido.
pub fn truncate(pool: &PgPool) {
    let mut conn = pool.get().expect("conn");
    conn.batch_execute("TRUNCATE progressao RESTART IDENTITY;").expect("truncate");
}

/// Serializa los tests que comparten la tabla.
pub static DB_LOCK: Lazy<std::sync::Mutex<()>> = Lazy::new(|| std::sync::Mutex::new(()));
