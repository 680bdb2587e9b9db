//! API Progressões
//!
//! Crate raíz del servicio:
//! - `config`: configuración desde el entorno.
//! - `build_repository`: elige el almacén (Postgres o memoria).
//!
//! El binario `progressoes-api` (main.rs) arma el router de `progressao-api`
//! sobre el almacén elegido.

pub mod config;

use std::sync::Arc;

use progressao_core::{InMemoryProgressaoRepository, ProgressaoRepository};
use progressao_persistence::{build_pool, PersistenceError, PgProgressaoRepository, PoolProvider};

use crate::config::AppConfig;

/// Construye el almacén según la configuración.
///
/// Con `DATABASE_URL` crea el pool (y aplica migraciones); sin él usa el
/// almacén en memoria. Bloqueante: llamar fuera del runtime async.
pub fn build_repository(config: &AppConfig) -> Result<Arc<dyn ProgressaoRepository>, PersistenceError> {
    match &config.database {
        Some(db) => {
            let pool = build_pool(&db.url, db.min_connections, db.max_connections)?;
            Ok(Arc::new(PgProgressaoRepository::new(PoolProvider { pool })))
        }
        None => {
            tracing::warn!("DATABASE_URL no definido: usando almacén en memoria (los datos no persisten)");
            Ok(Arc::new(InMemoryProgressaoRepository::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn without_database_the_store_is_in_memory_and_empty() {
        let cfg = AppConfig { server: ServerConfig { host: "127.0.0.1".parse().unwrap(), port: 0 }, database: None };
        let repo = build_repository(&cfg).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.list_all().unwrap().is_empty());
    }
}
