use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

use crate::error::ApiError;
use crate::schemas::ProgressaoSchema;

/// Cuerpo de `POST /progressao`: acepta `application/x-www-form-urlencoded`
/// y, en cualquier otro caso, JSON.
pub struct ProgressaoPayload(pub ProgressaoSchema);

fn is_form(req: &Request) -> bool {
    req.headers()
       .get(CONTENT_TYPE)
       .and_then(|v| v.to_str().ok())
       .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S> FromRequest<S> for ProgressaoPayload where S: Send + Sync
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(schema) = Form::<ProgressaoSchema>::from_request(req, state).await
                                                                               .map_err(|e| ApiError::Validation(e.body_text()))?;
            Ok(Self(schema))
        } else {
            let Json(schema) = Json::<ProgressaoSchema>::from_request(req, state).await
                                                                               .map_err(|e| ApiError::Validation(e.body_text()))?;
            Ok(Self(schema))
        }
    }
}
