//! Modelo de RepairOrder
//!
//! Este módulo contiene la orden de reparación canónica, el enum de estados
//! del ciclo de vida y los payloads de creación/actualización.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Estado de una orden de reparación - secuencia fija del ciclo de vida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    InProgress,
    ReadyForPickup,
    Closed,
}

/// Secuencia ordenada de estados, usada para proyectar el timeline
pub const STATUS_SEQUENCE: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::InProgress,
    OrderStatus::ReadyForPickup,
    OrderStatus::Closed,
];

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::ReadyForPickup => "READY_FOR_PICKUP",
            OrderStatus::Closed => "CLOSED",
        }
    }

    /// Parsear un estado de wire; un valor desconocido devuelve None
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(OrderStatus::Pending),
            "IN_PROGRESS" => Some(OrderStatus::InProgress),
            "READY_FOR_PICKUP" => Some(OrderStatus::ReadyForPickup),
            "CLOSED" => Some(OrderStatus::Closed),
            _ => None,
        }
    }

    /// Estado inicial de toda orden
    pub fn initial() -> Self {
        OrderStatus::Pending
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Closed)
    }
}

/// Orden de reparación canónica
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairOrder {
    pub id: i64,
    /// Id del vehículo referenciado (`car.id` o `carId` en el wire)
    pub vehicle_id: Option<i64>,
    /// Copia embebida del vehículo, si el registro la trae
    pub embedded_vehicle: Option<super::Vehicle>,
    /// Texto libre usado como "tipo de reparación"
    pub description: String,
    /// Coste; 0 cuando falta o no es numérico
    pub cost: f64,
    /// Estado de wire; se interpreta con `OrderStatus::parse`
    pub status: String,
    pub creation_date: Option<DateTime<Utc>>,
    pub closing_date: Option<DateTime<Utc>>,
    /// Registro crudo original, conservado para updates de payload completo
    #[serde(skip)]
    pub raw: Value,
}

impl RepairOrder {
    /// Payload completo de actualización: el registro original con el
    /// estado y el coste propuestos mergeados encima.
    pub fn merged_update_payload(&self, status: &str, cost: f64) -> Value {
        let mut payload = self.raw.clone();
        if !payload.is_object() {
            payload = serde_json::json!({ "id": self.id });
        }
        payload["status"] = Value::from(status);
        payload["cost"] = Value::from(cost);
        payload
    }
}

/// Cambio planificado sobre una orden (estado y/o coste)
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub order_id: i64,
    pub status: String,
    pub cost: f64,
    /// Payload completo a enviar al servicio de persistencia
    pub payload: Value,
}

/// Request para crear una orden contra un vehículo propio
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(
        length(min = 3, max = 500),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_roundtrip() {
        for status in STATUS_SEQUENCE {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("WAITING_FOR_PARTS"), None);
        assert!(OrderStatus::Closed.is_terminal());
        assert_eq!(OrderStatus::initial(), OrderStatus::Pending);
    }

    #[test]
    fn test_merged_update_payload_keeps_original_fields() {
        let order = RepairOrder {
            id: 4,
            vehicle_id: Some(5),
            embedded_vehicle: None,
            description: "Oil change".to_string(),
            cost: 0.0,
            status: "PENDING".to_string(),
            creation_date: None,
            closing_date: None,
            raw: json!({ "id": 4, "carId": 5, "description": "Oil change", "status": "PENDING", "cost": 0 }),
        };

        let payload = order.merged_update_payload("IN_PROGRESS", 120.5);
        assert_eq!(payload["status"], "IN_PROGRESS");
        assert_eq!(payload["cost"], 120.5);
        assert_eq!(payload["carId"], 5);
        assert_eq!(payload["description"], "Oil change");
    }
}
