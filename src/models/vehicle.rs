//! Modelo de Vehicle
//!
//! Este módulo contiene la forma canónica de un vehículo y los requests
//! de creación/actualización. Los registros crudos usan nombres de campo
//! variables (`plateNumber`, `plate`, `licensePlate`, `plate_number`);
//! la forma canónica siempre usa `plate`.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

/// Vehículo canónico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    /// Matrícula canónica
    pub plate: String,
    /// Estado de texto libre ("ACTIVE", "IN_SERVICE", ...)
    pub status: String,
    /// Referencia al propietario vía customer-id, cuando el registro la trae
    pub customer_id: Option<i64>,
    /// Referencia al propietario vía user-id, cuando el registro la trae
    pub user_id: Option<i64>,
}

/// Request para registrar un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(
        length(min = 2, max = 20),
        custom = "crate::utils::validation::validate_plate"
    )]
    pub plate: String,
}

impl CreateVehicleRequest {
    /// Payload de wire: el servicio de persistencia espera `plateNumber`,
    /// así que el campo `plate` se renombra al serializar.
    pub fn to_wire_payload(&self) -> serde_json::Value {
        json!({
            "brand": self.brand,
            "model": self.model,
            "year": self.year,
            "plateNumber": self.plate,
        })
    }
}
