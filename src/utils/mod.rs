//! Utilidades del sistema
//!
//! Este módulo contiene errores, helpers de formato para presentación
//! y validación de payloads.

pub mod errors;
pub mod format;
pub mod validation;

pub use errors::AppError;
