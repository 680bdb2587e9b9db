//! Handlers HTTP. Cada petición: recibida → validada → ejecutada → respondida,
//! en un único intento.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use progressao_core::{ProgressaoRepository, StoreError};
use tracing::{debug, warn};

use crate::error::{ApiError, MSG_NAO_SALVA};
use crate::extract::ProgressaoPayload;
use crate::schemas::{ListagemProgressoesSchema, ProgressaoBuscaSchema, ProgressaoDelSchema, ProgressaoViewSchema};
use crate::state::AppState;

pub const MSG_REMOVIDA: &str = "Progressão removida";

/// Ejecuta una operación síncrona del almacén fuera del runtime async.
async fn with_repo<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
    where T: Send + 'static,
          F: FnOnce(&dyn ProgressaoRepository) -> Result<T, StoreError> + Send + 'static
{
    let repo = state.repo.clone();
    tokio::task::spawn_blocking(move || f(repo.as_ref())).await
                                                         .map_err(|e| ApiError::Unexpected { message: crate::error::MSG_FALHA,
                                                                                             detail: format!("blocking task: {e}") })?
                                                         .map_err(ApiError::from)
}

fn busca_id(query: Result<Query<ProgressaoBuscaSchema>, QueryRejection>) -> Result<Option<i32>, ApiError> {
    let Query(busca) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    Ok(busca.id)
}

/// `GET /`: redirige a la selección de documentación.
pub async fn home() -> Response {
    (StatusCode::FOUND, [(LOCATION, "/openapi")]).into_response()
}

/// `POST /progressao`: agrega una progresión nueva.
pub async fn add_progressao(State(state): State<AppState>, payload: Result<ProgressaoPayload, ApiError>) -> Result<Json<ProgressaoViewSchema>, ApiError> {
    let ProgressaoPayload(form) = payload.inspect_err(|e| warn!("add_progressao:rejected err={e}"))?;
    let label = format!("'{}' - '{}'", form.cod_mapa, form.texto);
    debug!("Adicionando nova progressão: {label}");
    let nova = form.into_nova().map_err(|e| {
                                   warn!("Erro ao adicionar progressão {label}: campo {} - {e}", e.field());
                                   ApiError::from(e)
                               })?;
    match with_repo(&state, move |repo| repo.create(nova)).await {
        Ok(p) => {
            debug!("Adicionada progressão: {label} id={}", p.id);
            Ok(Json(ProgressaoViewSchema::from(&p)))
        }
        Err(e) => {
            warn!("Erro ao adicionar progressão {label}: {e}");
            Err(e.unexpected_message(MSG_NAO_SALVA))
        }
    }
}

/// `GET /progressao[?id=N]`: sin `id` lista todas; con `id` devuelve una.
pub async fn get_progressao(State(state): State<AppState>, query: Result<Query<ProgressaoBuscaSchema>, QueryRejection>) -> Result<Response, ApiError> {
    match busca_id(query)? {
        None => {
            debug!("Coletando progressões");
            let progressoes = with_repo(&state, |repo| repo.list_all()).await
                                                                        .inspect_err(|e| warn!("Erro ao listar progressões: {e}"))?;
            debug!("{} progressões encontradas", progressoes.len());
            Ok(Json(ListagemProgressoesSchema::from_progressoes(&progressoes)).into_response())
        }
        Some(id) => {
            debug!("Coletando dados sobre progressão #{id}");
            let found = with_repo(&state, move |repo| repo.find_by_id(id)).await
                                                                           .inspect_err(|e| warn!("Erro ao buscar progressão #{id}: {e}"))?;
            match found {
                Some(p) => {
                    debug!("Progressão encontrada: {p}");
                    Ok(Json(ProgressaoViewSchema::from(&p)).into_response())
                }
                None => {
                    warn!("Erro ao buscar progressão #{id}: não encontrada");
                    Err(ApiError::NotFound)
                }
            }
        }
    }
}

/// `DELETE /progressao?id=N`: elimina una progresión.
pub async fn del_progressao(State(state): State<AppState>, query: Result<Query<ProgressaoBuscaSchema>, QueryRejection>) -> Result<Json<ProgressaoDelSchema>, ApiError> {
    let id = busca_id(query)?.ok_or_else(|| {
                                  warn!("Erro ao deletar progressão: id ausente");
                                  ApiError::Validation("missing query parameter `id`".into())
                              })?;
    debug!("Deletando dados sobre progressão #{id}");
    let removed = with_repo(&state, move |repo| repo.delete_by_id(id)).await
                                                                       .inspect_err(|e| warn!("Erro ao deletar progressão #{id}: {e}"))?;
    if removed == 0 {
        warn!("Erro ao deletar progressão #{id}: não encontrada");
        return Err(ApiError::NotFound);
    }
    debug!("Deletada progressão #{id}");
    Ok(Json(ProgressaoDelSchema { message: MSG_REMOVIDA.to_string(), id }))
}
