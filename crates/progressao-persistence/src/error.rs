//! Errores de persistencia.
//! Mapea errores de Diesel / conexión a variantes semánticas y, de ahí, a
//! `StoreError` del core.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use progressao_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("unique violation: {0}")]
    UniqueViolation(String),
    #[error("check violation: {0}")]
    CheckViolation(String),
    #[error("not null violation: {0}")]
    NotNullViolation(String),
    #[error("not found")]
    NotFound,
    #[error("serialization conflict")]
    SerializationConflict,
    #[error("transient IO / connection pool error: {0}")]
    TransientIo(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("unknown database error: {0}")]
    Unknown(String),
}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(kind, info) => match kind {
                DatabaseErrorKind::UniqueViolation => Self::UniqueViolation(info.message().to_string()),
                DatabaseErrorKind::CheckViolation => Self::CheckViolation(info.message().to_string()),
                DatabaseErrorKind::NotNullViolation => Self::NotNullViolation(info.message().to_string()),
                DatabaseErrorKind::SerializationFailure => Self::SerializationConflict,
                DatabaseErrorKind::ClosedConnection => Self::TransientIo(info.message().to_string()),
                other => Self::Unknown(format!("db error kind {:?}: {}", other, info.message())),
            },
            DieselError::BrokenTransactionManager => Self::TransientIo("broken transaction manager".into()),
            other => Self::Unknown(format!("unhandled diesel error: {other}")),
        }
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::UniqueViolation(m) => StoreError::UniqueViolation(m),
            PersistenceError::CheckViolation(m) | PersistenceError::NotNullViolation(m) => StoreError::Validation(m),
            PersistenceError::TransientIo(m) | PersistenceError::Config(m) => StoreError::Unavailable(m),
            other => StoreError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        assert!(matches!(PersistenceError::from(DieselError::NotFound), PersistenceError::NotFound));
    }

    fn db_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_string()))
    }

    #[test]
    fn database_error_kinds_map_to_variants() {
        let e = PersistenceError::from(db_error(DatabaseErrorKind::UniqueViolation, "dup"));
        assert!(matches!(e, PersistenceError::UniqueViolation(m) if m == "dup"));
        let e = PersistenceError::from(db_error(DatabaseErrorKind::NotNullViolation, "ramo"));
        assert!(matches!(e, PersistenceError::NotNullViolation(_)));
        let e = PersistenceError::from(db_error(DatabaseErrorKind::ClosedConnection, "gone"));
        assert!(matches!(e, PersistenceError::TransientIo(_)));
        // la tabla no tiene claves foráneas
        let e = PersistenceError::from(db_error(DatabaseErrorKind::ForeignKeyViolation, "fk"));
        assert!(matches!(e, PersistenceError::Unknown(_)), "got {e:?}");
    }

    #[test]
    fn persistence_errors_map_to_store_errors() {
        let e: StoreError = PersistenceError::UniqueViolation("dup".into()).into();
        assert_eq!(e, StoreError::UniqueViolation("dup".into()));
        let e: StoreError = PersistenceError::CheckViolation("blank".into()).into();
        assert_eq!(e, StoreError::Validation("blank".into()));
        let e: StoreError = PersistenceError::TransientIo("pool".into()).into();
        assert_eq!(e, StoreError::Unavailable("pool".into()));
        let e: StoreError = PersistenceError::SerializationConflict.into();
        assert_eq!(e, StoreError::Internal("serialization conflict".into()));
    }
}
