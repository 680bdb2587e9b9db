use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Asigna un id a cada petición, lo adjunta al span de logs y lo devuelve en `x-request-id`.
pub async fn request_id(req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();
    let span = tracing::debug_span!("request", request_id = %id);
    let mut resp = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        resp.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    resp
}
