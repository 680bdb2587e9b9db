//! Configuración central de la aplicación.
//! Lee variables de entorno (.env ya cargado por el binario) y expone una
//! estructura inmutable con las secciones de servidor y base de datos.
use std::env;
use std::net::IpAddr;

use progressao_persistence::{DbConfig, PersistenceError};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Filtro de logs por defecto si `RUST_LOG` no está definido.
pub const DEFAULT_LOG_FILTER: &str =
    "mappa_progressoes=debug,progressao_api=debug,progressao_core=debug,progressao_persistence=debug,tower_http=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PROGRESSOES_HOST inválido: {0:?}")]
    InvalidHost(String),
    #[error("PROGRESSOES_PORT inválido: {0:?}")]
    InvalidPort(String),
    #[error(transparent)]
    Database(#[from] PersistenceError),
}

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// `None` si no hay `DATABASE_URL`: se usa el almacén en memoria.
    pub database: Option<DbConfig>,
}

/// Dirección de escucha HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let raw_host = lookup("PROGRESSOES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = raw_host.trim().parse().map_err(|_| ConfigError::InvalidHost(raw_host.clone()))?;
        let port: u16 = match lookup("PROGRESSOES_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
        };
        let database = DbConfig::from_lookup(&lookup)?;
        Ok(Self { server: ServerConfig { host, port }, database })
    }
}
