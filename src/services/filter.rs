//! Capa de consulta y filtrado
//!
//! Vistas filtradas sobre colecciones enriquecidas: búsqueda de texto libre
//! por subcadena (case-insensitive, sin anclar, sin tokenizar ni rankear)
//! sobre un conjunto fijo de campos derivados, más un filtro exacto de
//! estado combinado en AND. El orden de salida es el de entrada.

use crate::services::enrichment::{EnrichedOrder, EnrichedVehicle};

/// Filtro secundario de estado; `"ALL"` significa sin filtro
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Parsear el valor del selector de la pantalla
    pub fn parse(value: &str) -> Self {
        if value == "ALL" {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Campos de texto derivados sobre los que busca el filtro de órdenes:
/// email y nombre del propietario resuelto, matrícula, marca, modelo,
/// estado y descripción.
fn order_haystack(entry: &EnrichedOrder) -> Vec<String> {
    let mut fields = owner_fields(entry.owner.as_ref());
    if let Some(vehicle) = entry.vehicle.as_ref() {
        fields.push(vehicle.plate.to_lowercase());
        fields.push(vehicle.brand.to_lowercase());
        fields.push(vehicle.model.to_lowercase());
    }
    fields.push(entry.order.status.to_lowercase());
    fields.push(entry.order.description.to_lowercase());
    fields
}

fn vehicle_haystack(entry: &EnrichedVehicle) -> Vec<String> {
    let mut fields = owner_fields(entry.owner.as_ref());
    fields.push(entry.vehicle.plate.to_lowercase());
    fields.push(entry.vehicle.brand.to_lowercase());
    fields.push(entry.vehicle.model.to_lowercase());
    fields.push(entry.vehicle.status.to_lowercase());
    fields
}

fn owner_fields(owner: Option<&crate::models::Account>) -> Vec<String> {
    match owner {
        Some(account) => vec![
            account.email.to_lowercase(),
            account.display_name().to_lowercase(),
        ],
        None => Vec::new(),
    }
}

fn matches_query(haystack: &[String], query: &str) -> bool {
    haystack.iter().any(|field| field.contains(query))
}

/// Filtrar órdenes enriquecidas. Query vacía devuelve la colección entera
/// (el filtro de estado sigue aplicando).
pub fn filter_orders(
    entries: &[EnrichedOrder],
    query: &str,
    status: &StatusFilter,
) -> Vec<EnrichedOrder> {
    let q = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            let matches_search = q.is_empty() || matches_query(&order_haystack(entry), &q);
            matches_search && status.matches(&entry.order.status)
        })
        .cloned()
        .collect()
}

/// Filtrar vehículos enriquecidos por texto libre
pub fn filter_vehicles(entries: &[EnrichedVehicle], query: &str) -> Vec<EnrichedVehicle> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| matches_query(&vehicle_haystack(entry), &q))
        .cloned()
        .collect()
}
