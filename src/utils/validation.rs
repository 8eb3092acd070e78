//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar datos de entrada
//! antes de enviarlos al servicio de persistencia.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Matrícula: bloques alfanuméricos separados por guión o espacio
    static ref PLATE_REGEX: Regex = Regex::new(r"^[A-Z0-9]{1,4}([- ][A-Z0-9]{1,4}){0,2}$").unwrap();
}

/// Validar que un string no esté vacío tras recortar espacios
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar el formato de una matrícula (se normaliza a mayúsculas antes)
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    let normalized = value.trim().to_uppercase();
    if !PLATE_REGEX.is_match(&normalized) {
        let mut error = ValidationError::new("plate_format");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_plate() {
        assert!(validate_plate("ABC-123").is_ok());
        assert!(validate_plate("abc-123").is_ok());
        assert!(validate_plate("1234 BCD").is_ok());
        assert!(validate_plate("###").is_err());
        assert!(validate_plate("").is_err());
    }
}
