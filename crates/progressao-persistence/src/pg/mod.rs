//! Implementación Postgres (Diesel) de `ProgressaoRepository`.
//!
//! - Una conexión del pool r2d2 por operación; se devuelve al pool al salir
//!   del scope (éxito o error).
//! - La unicidad de `texto` la garantiza la tabla (`UNIQUE`); la violación
//!   llega como `StoreError::UniqueViolation`, nunca como pánico.
//! - Sin reintentos: cada operación es un único intento.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use log::{debug, warn};

use progressao_core::{ProgressaoRepository, StoreError};
use progressao_domain::{NovaProgressao, Progressao};

use crate::error::PersistenceError;
use crate::migrations::run_pending_migrations;
use crate::schema::progressao;

/// Alias de tipo para el pool r2d2 de conexiones Postgres.
pub type PgPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type PgPooledConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Proveedor abstracto de conexiones.
///
/// Contrato:
/// - Debe devolver una conexión válida o `PersistenceError::TransientIo`.
pub trait ConnectionProvider: Send + Sync + 'static {
    fn connection(&self) -> Result<PgPooledConnection, PersistenceError>;
}

/// Implementación concreta de `ConnectionProvider` respaldada por un `PgPool`.
pub struct PoolProvider {
    pub pool: PgPool,
}
impl ConnectionProvider for PoolProvider {
    fn connection(&self) -> Result<PgPooledConnection, PersistenceError> {
        self.pool
            .get()
            .map_err(|e| PersistenceError::TransientIo(format!("pool error: {e}")))
    }
}

/// Fila mapeada de la tabla `progressao`.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = progressao)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProgressaoRow {
    pub pk_progressao: i32,
    pub cod_mapa: i32,
    pub texto: String,
    pub ramo: String,
    pub etapa: String,
    pub data_insercao: DateTime<Utc>,
}

impl From<ProgressaoRow> for Progressao {
    fn from(row: ProgressaoRow) -> Self {
        Progressao { id: row.pk_progressao,
                     cod_mapa: row.cod_mapa,
                     texto: row.texto,
                     ramo: row.ramo,
                     etapa: row.etapa,
                     data_insercao: row.data_insercao }
    }
}

/// Estructura para inserción en `progressao`.
///
/// `data_insercao = None` inserta `DEFAULT` (now() en la base).
#[derive(Insertable, Debug)]
#[diesel(table_name = progressao)]
pub struct NewProgressaoRow<'a> {
    pub cod_mapa: i32,
    pub texto: &'a str,
    pub ramo: &'a str,
    pub etapa: &'a str,
    pub data_insercao: Option<DateTime<Utc>>,
}

impl<'a> From<&'a NovaProgressao> for NewProgressaoRow<'a> {
    fn from(nova: &'a NovaProgressao) -> Self {
        NewProgressaoRow { cod_mapa: nova.cod_mapa(),
                           texto: nova.texto(),
                           ramo: nova.ramo(),
                           etapa: nova.etapa(),
                           data_insercao: nova.data_insercao() }
    }
}

/// Convierte un error de Diesel en `StoreError`, dejando rastro en el log.
fn store_error(op: &str, err: impl Into<PersistenceError>) -> StoreError {
    let err = err.into();
    warn!("{op}:error err={err}");
    StoreError::from(err)
}

/// Implementación Postgres de `ProgressaoRepository`.
pub struct PgProgressaoRepository<P: ConnectionProvider> {
    pub provider: P,
}

impl<P: ConnectionProvider> PgProgressaoRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    fn connection(&self, op: &str) -> Result<PgPooledConnection, StoreError> {
        self.provider.connection().map_err(|e| store_error(op, e))
    }
}

impl<P: ConnectionProvider> ProgressaoRepository for PgProgressaoRepository<P> {
    fn create(&self, nova: NovaProgressao) -> Result<Progressao, StoreError> {
        debug!("create:start cod_mapa={} texto={:?}", nova.cod_mapa(), nova.texto());
        let mut conn = self.connection("create")?;
        let row: ProgressaoRow = diesel::insert_into(progressao::table).values(NewProgressaoRow::from(&nova))
                                                                        .returning(ProgressaoRow::as_returning())
                                                                        .get_result(&mut conn)
                                                                        .map_err(|e| store_error("create", e))?;
        debug!("create:done id={}", row.pk_progressao);
        Ok(row.into())
    }

    fn list_all(&self) -> Result<Vec<Progressao>, StoreError> {
        debug!("list_all:start");
        let mut conn = self.connection("list_all")?;
        let rows: Vec<ProgressaoRow> = progressao::table.order(progressao::pk_progressao.asc())
                                                        .select(ProgressaoRow::as_select())
                                                        .load(&mut conn)
                                                        .map_err(|e| store_error("list_all", e))?;
        debug!("list_all:done count={}", rows.len());
        Ok(rows.into_iter().map(Progressao::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Progressao>, StoreError> {
        debug!("find_by_id:start id={id}");
        let mut conn = self.connection("find_by_id")?;
        let row = progressao::table.find(id)
                                   .select(ProgressaoRow::as_select())
                                   .first(&mut conn)
                                   .optional()
                                   .map_err(|e| store_error("find_by_id", e))?;
        debug!("find_by_id:done id={id} found={}", row.is_some());
        Ok(row.map(Progressao::from))
    }

    fn delete_by_id(&self, id: i32) -> Result<usize, StoreError> {
        debug!("delete_by_id:start id={id}");
        let mut conn = self.connection("delete_by_id")?;
        let removed = diesel::delete(progressao::table.find(id)).execute(&mut conn)
                                                                .map_err(|e| store_error("delete_by_id", e))?;
        debug!("delete_by_id:done id={id} removed={removed}");
        Ok(removed)
    }

    fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.connection("count")?;
        progressao::table.count()
                         .get_result(&mut conn)
                         .map_err(|e| store_error("count", e))
    }
}

/// Construye un pool Postgres r2d2 a partir de URL.
///
/// Comportamiento:
/// - Tamaños 0 se elevan a 1; si `min_size > max_size`, usa `min_size = max_size`.
/// - Ejecuta las migraciones pendientes con la primera conexión.
/// - Devuelve `PersistenceError::TransientIo` ante errores del pool/manager.
pub fn build_pool(database_url: &str, min_size: u32, max_size: u32) -> Result<PgPool, PersistenceError> {
    let validated_min = min_size.max(1);
    let validated_max = max_size.max(1);
    if validated_min > validated_max {
        warn!("min_size > max_size ({validated_min} > {validated_max}), ajustando min=max");
    }
    let final_min = validated_min.min(validated_max);
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().min_idle(Some(final_min))
                                    .max_size(validated_max)
                                    .build(manager)
                                    .map_err(|e| PersistenceError::TransientIo(format!("pool build: {e}")))?;
    {
        let mut conn = pool.get()
                           .map_err(|e| PersistenceError::TransientIo(format!("pool get for migrations: {e}")))?;
        run_pending_migrations(&mut conn)?;
    }
    debug!("pool ready min_idle={final_min} max_size={validated_max}");
    Ok(pool)
}

/// Carga `.env`, lee `DbConfig` y construye un pool ya migrado.
/// `Ok(None)` si no hay `DATABASE_URL`.
pub fn build_pool_from_env() -> Result<Option<PgPool>, PersistenceError> {
    crate::config::init_dotenv();
    match crate::config::DbConfig::from_env()? {
        Some(cfg) => build_pool(&cfg.url, cfg.min_connections, cfg.max_connections).map(Some),
        None => Ok(None),
    }
}
