//! progressao-persistence
//!
//! Implementación Postgres (Diesel) del contrato `ProgressaoRepository`.
//!
//! Módulos:
//! - `pg`: repositorio sobre Postgres y construcción del pool r2d2.
//! - `migrations`: runner embebido de migraciones Diesel.
//! - `config`: carga de configuración desde .env.
//! - `schema`: tabla Diesel `progressao`.

pub mod config;
pub mod error;
pub mod migrations;
pub mod pg;
pub mod schema;

pub use config::{init_dotenv, DbConfig};
pub use error::PersistenceError;
pub use pg::{build_pool, build_pool_from_env, ConnectionProvider, PgPool, PgProgressaoRepository, PoolProvider};
