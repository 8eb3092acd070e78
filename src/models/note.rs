//! Modelo de Note
//!
//! Notas de mecánico adjuntas a una orden de reparación. Append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Etiqueta de autor por defecto cuando el registro no trae una
pub const DEFAULT_NOTE_AUTHOR: &str = "Mechanic";

/// Nota de mecánico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub author: Option<String>,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Autor a mostrar, con etiqueta genérica por defecto
    pub fn author_label(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_NOTE_AUTHOR)
    }
}

/// Request para añadir una nota a una orden
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

impl CreateNoteRequest {
    /// Construir el request recortando espacios; None si queda vacío
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_rejects_blank() {
        assert!(CreateNoteRequest::from_input("   ").is_none());
        let req = CreateNoteRequest::from_input("  cambio de pastillas  ").unwrap();
        assert_eq!(req.text, "cambio de pastillas");
    }

    #[test]
    fn test_author_label_default() {
        let note = Note {
            id: 1,
            author: None,
            text: "listo".to_string(),
            created_at: None,
        };
        assert_eq!(note.author_label(), "Mechanic");
    }
}
