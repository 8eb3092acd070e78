//! Helpers de formato para presentación
//!
//! Este módulo contiene los valores de relleno que la capa de presentación
//! muestra cuando un join no resuelve o un campo llega vacío: "–" para
//! fechas/campos ausentes y "Unknown" para cuentas sin resolver.

use chrono::{DateTime, Utc};

/// Relleno para valores ausentes
pub const PLACEHOLDER: &str = "–";

/// Etiqueta para cuentas sin resolver
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Formatear una fecha para mostrar (dd/mm/aaaa); "–" si falta
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Formatear una fecha con hora (dd/mm/aaaa hh:mm); "–" si falta
pub fn format_datetime(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y %H:%M").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Texto a mostrar para un campo libre; "–" si queda vacío tras recortar
pub fn display_text(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formatear un coste en euros con dos decimales
pub fn format_cost(cost: f64) -> String {
    format!("{:.2} €", cost)
}
