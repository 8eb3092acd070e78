//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error del núcleo. Ningún fallo es fatal:
//! un fallo de lectura deja la colección afectada vacía y un fallo de
//! mutación deja el estado local intacto; la capa de presentación muestra
//! un indicador genérico y sigue interactiva.

use thiserror::Error;

/// Errores principales del núcleo
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External API error ({status}): {message}")]
    ExternalApi { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Construir un error de API externa a partir de un status de respuesta
    pub fn external(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        AppError::ExternalApi {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Verificar si el error proviene de una lectura remota fallida
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::Http(_) | AppError::ExternalApi { .. } | AppError::MalformedResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
