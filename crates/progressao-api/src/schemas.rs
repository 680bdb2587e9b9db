//! Formas de entrada y salida de la API. Sin efectos secundarios.

use progressao_domain::{DomainError, NovaProgressao, Progressao};
use serde::{Deserialize, Serialize};

/// Cuerpo de creación de una progresión.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressaoSchema {
    pub cod_mapa: i32,
    pub texto: String,
    pub ramo: String,
    pub etapa: String,
}

impl ProgressaoSchema {
    pub fn into_nova(self) -> Result<NovaProgressao, DomainError> {
        NovaProgressao::new(self.cod_mapa, &self.texto, &self.ramo, &self.etapa)
    }
}

/// Query de búsqueda y borrado: la clave canónica es el id numérico.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressaoBuscaSchema {
    pub id: Option<i32>,
}

/// Vista de una progresión (sin la fecha de inserción).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressaoViewSchema {
    pub id: i32,
    pub cod_mapa: i32,
    pub texto: String,
    pub ramo: String,
    pub etapa: String,
}

impl From<&Progressao> for ProgressaoViewSchema {
    fn from(p: &Progressao) -> Self {
        Self { id: p.id, cod_mapa: p.cod_mapa, texto: p.texto.clone(), ramo: p.ramo.clone(), etapa: p.etapa.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListagemProgressoesSchema {
    pub progressoes: Vec<ProgressaoViewSchema>,
}

impl ListagemProgressoesSchema {
    pub fn from_progressoes(progressoes: &[Progressao]) -> Self {
        Self { progressoes: progressoes.iter().map(ProgressaoViewSchema::from).collect() }
    }
}

/// Confirmación de borrado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressaoDelSchema {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSchema {
    pub message: String,
}
