//! progressao-core: contrato de almacenamiento de progresiones.
//!
//! - `repo`: trait `ProgressaoRepository` y la implementación en memoria.
//! - `errors`: `StoreError`, errores semánticos comunes a todos los backends.
pub mod errors;
pub mod repo;

pub use errors::StoreError;
pub use repo::{InMemoryProgressaoRepository, ProgressaoRepository};
