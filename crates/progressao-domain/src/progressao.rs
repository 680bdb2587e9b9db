use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Longitud máxima (en caracteres) de la descripción.
pub const TEXTO_MAX_CHARS: usize = 350;
/// Longitud máxima (en caracteres) del ramo.
pub const RAMO_MAX_CHARS: usize = 20;
/// Longitud máxima (en caracteres) de la etapa.
pub const ETAPA_MAX_CHARS: usize = 20;

/// Ramos conocidos del programa. Solo documentación; no se valida contra esta lista.
pub const RAMOS_CONHECIDOS: [&str; 4] = ["Lobinho", "Escoteiro", "Sênior", "Pioneiro"];

/// Progresión ya persistida: tiene identidad (`id`) y fecha de inserción.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progressao {
    pub id: i32,
    pub cod_mapa: i32,
    pub texto: String,
    pub ramo: String,
    pub etapa: String,
    pub data_insercao: DateTime<Utc>,
}

impl Progressao {
    /// Dos progresiones describen lo mismo si coinciden en los cuatro campos de negocio.
    pub fn same_content(&self, nova: &NovaProgressao) -> bool {
        self.cod_mapa == nova.cod_mapa() && self.texto == nova.texto() && self.ramo == nova.ramo() && self.etapa == nova.etapa()
    }
}

impl fmt::Display for Progressao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} <{}: {}>", self.id, self.cod_mapa, self.texto)
    }
}

/// Progresión validada, aún sin identidad.
///
/// Solo se construye mediante [`NovaProgressao::new`], que garantiza:
/// - `texto`, `ramo` y `etapa` presentes y no vacíos (tras `trim`).
/// - Longitudes dentro de los límites de la tabla.
///
/// Los valores se guardan sin los espacios exteriores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovaProgressao {
    cod_mapa: i32,
    texto: String,
    ramo: String,
    etapa: String,
    data_insercao: Option<DateTime<Utc>>,
}

impl NovaProgressao {
    pub fn new(cod_mapa: i32, texto: &str, ramo: &str, etapa: &str) -> Result<Self, DomainError> {
        Ok(NovaProgressao {
            cod_mapa,
            texto: required("texto", texto, TEXTO_MAX_CHARS)?,
            ramo: required("ramo", ramo, RAMO_MAX_CHARS)?,
            etapa: required("etapa", etapa, ETAPA_MAX_CHARS)?,
            data_insercao: None,
        })
    }

    /// Fija explícitamente la fecha de inserción; si no se llama, la asigna el almacén.
    pub fn with_data_insercao(mut self, data_insercao: DateTime<Utc>) -> Self {
        self.data_insercao = Some(data_insercao);
        self
    }

    pub fn cod_mapa(&self) -> i32 { self.cod_mapa }
    pub fn texto(&self) -> &str { &self.texto }
    pub fn ramo(&self) -> &str { &self.ramo }
    pub fn etapa(&self) -> &str { &self.etapa }
    pub fn data_insercao(&self) -> Option<DateTime<Utc>> { self.data_insercao }

    /// Materializa la progresión con la identidad asignada por el almacén.
    pub fn into_progressao(self, id: i32, data_insercao: DateTime<Utc>) -> Progressao {
        Progressao {
            id,
            cod_mapa: self.cod_mapa,
            texto: self.texto,
            ramo: self.ramo,
            etapa: self.etapa,
            data_insercao,
        }
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    let len = trimmed.chars().count();
    if len > max {
        return Err(DomainError::TooLong { field, max, len });
    }
    Ok(trimmed.to_string())
}
