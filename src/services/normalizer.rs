//! Normalizador de campos
//!
//! Las fuentes de datos no garantizan un formato de wire único: la matrícula
//! llega como `plateNumber`, `plate`, `licensePlate` o `plate_number`, y la
//! referencia al propietario como `customerId` o anidada en `customer.id`.
//! Este módulo resuelve cada campo canónico con una lista ordenada de claves
//! candidatas. Todas las funciones son puras y totales: un registro
//! malformado produce valores por defecto, nunca un error.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::models::{Account, Note, RepairOrder, Vehicle};

/// Claves candidatas para la matrícula, en orden de precedencia
pub const PLATE_KEYS: &[&str] = &["plateNumber", "plate", "licensePlate", "plate_number"];

/// Claves candidatas para el estado
pub const STATUS_KEYS: &[&str] = &["status", "state", "carStatus"];

/// Claves candidatas para la marca
pub const BRAND_KEYS: &[&str] = &["brand", "make"];

/// Claves candidatas para el customer-id del propietario
pub const CUSTOMER_ID_KEYS: &[&str] = &["customerId", "customer.id"];

/// Claves candidatas para el user-id del propietario
pub const USER_ID_KEYS: &[&str] = &["userId", "user.id"];

/// Claves candidatas para el vehículo referenciado por una orden
pub const ORDER_VEHICLE_ID_KEYS: &[&str] = &["car.id", "carId"];

/// Resolver la primera clave candidata presente con valor no nulo.
/// Una clave con punto (`customer.id`) busca un nivel de anidamiento.
pub fn pick<'a>(record: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    for key in candidates {
        let value = match key.split_once('.') {
            Some((outer, inner)) => record.get(outer).and_then(|v| v.get(inner)),
            None => record.get(key),
        };
        if let Some(v) = value {
            if !v.is_null() {
                return Some(v);
            }
        }
    }
    None
}

/// Campo de texto canónico; `""` si ninguna candidata resuelve
pub fn pick_str(record: &Value, candidates: &[&str]) -> String {
    match pick(record, candidates) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Campo numérico opcional (id, año); acepta números y strings numéricos
pub fn pick_i64(record: &Value, candidates: &[&str]) -> Option<i64> {
    match pick(record, candidates)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerción de coste: absente o no numérico → 0.0
pub fn coerce_cost(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parsear un timestamp de wire: RFC3339 o fecha suelta `YYYY-MM-DD`
pub fn parse_datetime(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let text = value?.as_str()?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Vehículo canónico desde un registro crudo
pub fn normalize_vehicle(raw: &Value) -> Vehicle {
    Vehicle {
        id: pick_i64(raw, &["id"]).unwrap_or(0),
        brand: pick_str(raw, BRAND_KEYS),
        model: pick_str(raw, &["model"]),
        year: pick_i64(raw, &["year"]).and_then(|y| i32::try_from(y).ok()),
        plate: pick_str(raw, PLATE_KEYS),
        status: pick_str(raw, STATUS_KEYS),
        customer_id: pick_i64(raw, CUSTOMER_ID_KEYS),
        user_id: pick_i64(raw, USER_ID_KEYS),
    }
}

/// Cuenta canónica desde un registro del endpoint de usuarios
pub fn normalize_account(raw: &Value) -> Account {
    Account {
        id: pick_i64(raw, &["id"]).unwrap_or(0),
        customer_id: pick_i64(raw, &["customerId", "customer_id"]),
        email: pick_str(raw, &["email"]),
        name: compose_name(raw),
        username: pick(raw, &["username"])
            .and_then(Value::as_str)
            .map(str::to_string),
        roles: pick(raw, &["roles", "authorities"])
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Nombre a mostrar: `firstName` + `lastName` cuando existen, si no `name`
fn compose_name(raw: &Value) -> Option<String> {
    let first = pick_str(raw, &["firstName", "first_name"]);
    let last = pick_str(raw, &["lastName", "last_name"]);
    let full = format!("{} {}", first, last).trim().to_string();
    if !full.is_empty() {
        return Some(full);
    }
    pick(raw, &["name"])
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Orden de reparación canónica desde un registro crudo
pub fn normalize_order(raw: &Value) -> RepairOrder {
    let embedded_vehicle = raw
        .get("car")
        .filter(|car| car.is_object())
        .map(normalize_vehicle);

    RepairOrder {
        id: pick_i64(raw, &["id"]).unwrap_or(0),
        vehicle_id: pick_i64(raw, ORDER_VEHICLE_ID_KEYS),
        embedded_vehicle,
        description: pick_str(raw, &["description"]),
        cost: coerce_cost(pick(raw, &["cost"])),
        status: pick_str(raw, STATUS_KEYS),
        creation_date: parse_datetime(pick(raw, &["creationDate", "createdAt", "creation_date"])),
        closing_date: parse_datetime(pick(raw, &["closingDate", "closedAt", "closing_date"])),
        raw: raw.clone(),
    }
}

/// Nota canónica desde un registro crudo
pub fn normalize_note(raw: &Value) -> Note {
    Note {
        id: pick_i64(raw, &["id"]).unwrap_or(0),
        author: pick(raw, &["author"])
            .and_then(Value::as_str)
            .map(str::to_string),
        text: pick_str(raw, &["text"]),
        created_at: parse_datetime(pick(raw, &["createdAt", "creationDate", "created_at"])),
    }
}
