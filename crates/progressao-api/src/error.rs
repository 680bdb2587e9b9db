//! Errores de la capa HTTP y su conversión a respuesta `{message}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use progressao_core::StoreError;
use progressao_domain::DomainError;
use thiserror::Error;

use crate::schemas::ErrorSchema;

pub const MSG_JA_SALVA: &str = "Progressão já salva na base :/";
pub const MSG_NAO_SALVA: &str = "Não foi possível salvar novo item :/";
pub const MSG_NAO_ENCONTRADA: &str = "Progressão não encontrada na base :/";
pub const MSG_DADOS_INVALIDOS: &str = "Dados inválidos para a progressão :/";
pub const MSG_FALHA: &str = "Não foi possível concluir a operação :/";

#[derive(Debug, Error)]
pub enum ApiError {
    /// `texto` duplicado.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Cuerpo o query mal formados, o datos rechazados por el dominio/almacén.
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    /// Cualquier otro fallo. Responde 400, igual que el servicio original.
    #[error("unexpected: {detail}")]
    Unexpected { message: &'static str, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unexpected { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Mensaje fijo para el cliente; el detalle solo va al log.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Conflict(_) => MSG_JA_SALVA,
            Self::Validation(_) => MSG_DADOS_INVALIDOS,
            Self::NotFound => MSG_NAO_ENCONTRADA,
            Self::Unexpected { message, .. } => *message,
        }
    }

    /// Sustituye el mensaje de un `Unexpected`; las demás variantes no cambian.
    pub fn unexpected_message(self, message: &'static str) -> Self {
        match self {
            Self::Unexpected { detail, .. } => Self::Unexpected { message, detail },
            other => other,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(d) => Self::Conflict(d),
            StoreError::Validation(d) => Self::Validation(d),
            StoreError::Unavailable(d) | StoreError::Internal(d) => Self::Unexpected { message: MSG_FALHA, detail: d },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorSchema { message: self.message().to_string() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status_codes() {
        assert_eq!(ApiError::from(StoreError::UniqueViolation("x".into())).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(StoreError::Validation("x".into())).status(), StatusCode::BAD_REQUEST);
        let e = ApiError::from(StoreError::Unavailable("pool".into()));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), MSG_FALHA);
    }

    #[test]
    fn validation_and_unexpected_keep_distinct_messages() {
        let v = ApiError::from(DomainError::MissingField("ramo"));
        let u = ApiError::from(StoreError::Internal("boom".into())).unexpected_message(MSG_NAO_SALVA);
        assert_eq!(v.status(), u.status());
        assert_ne!(v.message(), u.message());
        assert_eq!(u.message(), MSG_NAO_SALVA);
    }

    #[test]
    fn unexpected_message_leaves_other_variants_alone() {
        assert_eq!(ApiError::NotFound.unexpected_message(MSG_NAO_SALVA).message(), MSG_NAO_ENCONTRADA);
    }
}
