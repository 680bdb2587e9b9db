use chrono::Utc;
use indexmap::IndexMap;
use log::{debug, warn};
use parking_lot::RwLock;

use progressao_domain::{NovaProgressao, Progressao};

use crate::errors::StoreError;

/// Almacenamiento de progresiones.
///
/// El almacén es el único dueño de la identidad (`id`) y de la unicidad de
/// `texto`; los llamadores nunca asignan ids.
pub trait ProgressaoRepository: Send + Sync + 'static {
    /// Persiste una progresión nueva y la devuelve con su `id` asignado.
    /// Falla con `StoreError::UniqueViolation` si el `texto` ya existe.
    fn create(&self, nova: NovaProgressao) -> Result<Progressao, StoreError>;
    /// Todas las progresiones en orden ascendente de `id`.
    fn list_all(&self) -> Result<Vec<Progressao>, StoreError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Progressao>, StoreError>;
    /// Elimina la progresión `id`; devuelve cuántas filas se borraron (0 o 1).
    fn delete_by_id(&self, id: i32) -> Result<usize, StoreError>;
    fn count(&self) -> Result<i64, StoreError>;
}

#[derive(Default)]
struct Inner {
    rows: IndexMap<i32, Progressao>,
    last_id: i32,
}

/// Implementación en memoria, con la misma semántica de unicidad que la tabla.
///
/// Los ids no se reutilizan tras un borrado (igual que una secuencia SERIAL).
#[derive(Default)]
pub struct InMemoryProgressaoRepository {
    inner: RwLock<Inner>,
}

impl InMemoryProgressaoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressaoRepository for InMemoryProgressaoRepository {
    fn create(&self, nova: NovaProgressao) -> Result<Progressao, StoreError> {
        debug!("create:start cod_mapa={} texto={:?}", nova.cod_mapa(), nova.texto());
        let mut inner = self.inner.write();
        if inner.rows.values().any(|p| p.texto == nova.texto()) {
            warn!("create:conflict texto={:?}", nova.texto());
            return Err(StoreError::UniqueViolation(format!("texto {:?} already exists", nova.texto())));
        }
        let Some(id) = inner.last_id.checked_add(1) else {
            warn!("create:error ids esgotados last_id={}", inner.last_id);
            return Err(StoreError::Internal("id sequence exhausted".into()));
        };
        inner.last_id = id;
        let data_insercao = nova.data_insercao().unwrap_or_else(Utc::now);
        let progressao = nova.into_progressao(id, data_insercao);
        inner.rows.insert(id, progressao.clone());
        debug!("create:done id={id}");
        Ok(progressao)
    }

    fn list_all(&self) -> Result<Vec<Progressao>, StoreError> {
        let rows: Vec<Progressao> = self.inner.read().rows.values().cloned().collect();
        debug!("list_all:done count={}", rows.len());
        Ok(rows)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Progressao>, StoreError> {
        Ok(self.inner.read().rows.get(&id).cloned())
    }

    fn delete_by_id(&self, id: i32) -> Result<usize, StoreError> {
        // shift_remove conserva el orden de inserción del resto
        let removed = self.inner.write().rows.shift_remove(&id).is_some();
        debug!("delete_by_id:done id={id} removed={removed}");
        Ok(usize::from(removed))
    }

    fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().rows.len() as i64)
    }
}
