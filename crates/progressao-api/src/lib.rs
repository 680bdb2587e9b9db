//! progressao-api
//!
//! Capa HTTP del servicio de progresiones (axum).
//!
//! - `schemas`: formas de entrada/salida y su serialización.
//! - `extract`: extractor del cuerpo de creación (JSON o formulario).
//! - `handlers`: rutas `/` y `/progressao`.
//! - `docs`: documento OpenAPI y páginas de documentación.
//! - `error`: `ApiError` y su conversión a respuesta.

pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod schemas;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Router completo del servicio.
pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(handlers::home))
                 .route("/progressao",
                        get(handlers::get_progressao).post(handlers::add_progressao)
                                                     .delete(handlers::del_progressao))
                 .merge(docs::routes())
                 .layer(TraceLayer::new_for_http())
                 .layer(CorsLayer::permissive())
                 .layer(from_fn(middleware::request_id))
                 .with_state(state)
}
