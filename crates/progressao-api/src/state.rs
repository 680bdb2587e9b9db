use std::sync::Arc;

use progressao_core::ProgressaoRepository;

/// Estado compartido por todos los handlers: solo el handle del almacén.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ProgressaoRepository>,
}

impl AppState {
    pub fn new<R: ProgressaoRepository>(repo: R) -> Self {
        Self { repo: Arc::new(repo) }
    }

    pub fn from_arc(repo: Arc<dyn ProgressaoRepository>) -> Self {
        Self { repo }
    }
}
