//! Errores del almacén, independientes del backend.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    /// Ya existe una progresión con el mismo `texto`.
    #[error("unique violation: {0}")] UniqueViolation(String),
    /// El almacén rechazó los datos (check / not null).
    #[error("invalid data: {0}")] Validation(String),
    /// No se pudo obtener conexión o el backend no responde.
    #[error("store unavailable: {0}")] Unavailable(String),
    #[error("internal: {0}")] Internal(String),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool { matches!(self, Self::UniqueViolation(_)) }
}
