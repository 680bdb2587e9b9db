// progressao-domain library entry point
pub mod error;
pub mod progressao;
pub use error::DomainError;
pub use progressao::{NovaProgressao, Progressao, ETAPA_MAX_CHARS, RAMOS_CONHECIDOS, RAMO_MAX_CHARS, TEXTO_MAX_CHARS};
