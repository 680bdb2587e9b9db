//! Carga de configuración de conexión desde variables de entorno.
//! Usa convención `DATABASE_URL` y parámetros opcionales de pool.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::error::PersistenceError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_MIN_CONNECTIONS: u32 = 2;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
}

impl DbConfig {
    /// Lee la configuración; `Ok(None)` si `DATABASE_URL` no está definido.
    pub fn from_env() -> Result<Option<Self>, PersistenceError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, PersistenceError>
        where F: Fn(&str) -> Option<String>
    {
        let Some(url) = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()) else {
            return Ok(None);
        };
        let min_connections = parse_u32(&lookup, "DATABASE_MIN_CONNECTIONS", DEFAULT_MIN_CONNECTIONS)?;
        let max_connections = parse_u32(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        Ok(Some(Self { url, min_connections, max_connections }))
    }
}

fn parse_u32<F>(lookup: &F, key: &str, default: u32) -> Result<u32, PersistenceError>
    where F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim()
                        .parse()
                        .map_err(|e| PersistenceError::Config(format!("{key}={raw:?}: {e}"))),
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn missing_url_means_no_database() {
        assert_eq!(DbConfig::from_lookup(lookup(&[])).unwrap(), None);
        assert_eq!(DbConfig::from_lookup(lookup(&[("DATABASE_URL", " ")])).unwrap(), None);
    }

    #[test]
    fn defaults_apply_to_pool_sizes() {
        let cfg = DbConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/progressoes")])).unwrap()
                                                                                                        .unwrap();
        assert_eq!(cfg.min_connections, DEFAULT_MIN_CONNECTIONS);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn malformed_pool_size_is_a_config_error() {
        let err = DbConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("DATABASE_MAX_CONNECTIONS", "muitas")])).unwrap_err();
        assert!(matches!(err, PersistenceError::Config(_)));
    }
}
