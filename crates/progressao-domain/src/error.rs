use thiserror::Error;

/// Error del dominio de progresiones.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("campo obligatorio ausente: {0}")]
    MissingField(&'static str),
    #[error("campo {field} excede {max} caracteres ({len})")]
    TooLong { field: &'static str, max: usize, len: usize },
}

impl DomainError {
    /// Nombre del campo que provocó el error (útil para logs).
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(f) => f,
            Self::TooLong { field, .. } => field,
        }
    }
}
