//! Enriquecedor de registros
//!
//! Une cada vehículo u orden con su cuenta propietaria usando los índices de
//! referencia cruzada. Orden de fallback: (1) customer-id en el índice de
//! customer-ids; (2) user-id en el índice de ids primarios; (3) sin resolver.
//! Para las órdenes primero se resuelve el vehículo — el indexado por id
//! gana sobre la copia embebida — y la cuenta se resuelve desde el vehículo
//! resuelto. Proyección pura: ningún efecto, un registro nuevo por entrada.

use serde::Serialize;
use tracing::debug;

use crate::models::{Account, RepairOrder, Vehicle};
use crate::services::account_index::{AccountIndex, VehicleIndex};

/// Vehículo con su propietario resuelto
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedVehicle {
    pub vehicle: Vehicle,
    pub owner: Option<Account>,
}

/// Orden con su vehículo y propietario resueltos
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedOrder {
    pub order: RepairOrder,
    pub vehicle: Option<Vehicle>,
    pub owner: Option<Account>,
}

/// Resolver la cuenta propietaria de un vehículo
fn resolve_owner(vehicle: &Vehicle, accounts: &AccountIndex) -> Option<Account> {
    if let Some(customer_id) = vehicle.customer_id {
        if let Some(account) = accounts.by_customer_id(customer_id) {
            return Some(account.clone());
        }
    }

    if let Some(user_id) = vehicle.user_id {
        if let Some(account) = accounts.by_account_id(user_id) {
            debug!(
                vehicle_id = vehicle.id,
                user_id, "propietario resuelto por user-id (fallback)"
            );
            return Some(account.clone());
        }
    }

    None
}

/// Enriquecer un vehículo con su propietario
pub fn enrich_vehicle(vehicle: &Vehicle, accounts: &AccountIndex) -> EnrichedVehicle {
    EnrichedVehicle {
        owner: resolve_owner(vehicle, accounts),
        vehicle: vehicle.clone(),
    }
}

/// Enriquecer una colección de vehículos, preservando el orden de entrada
pub fn enrich_vehicles(vehicles: &[Vehicle], accounts: &AccountIndex) -> Vec<EnrichedVehicle> {
    vehicles
        .iter()
        .map(|v| enrich_vehicle(v, accounts))
        .collect()
}

/// Enriquecer una orden: vehículo primero (indexado sobre embebido),
/// después la cuenta desde el vehículo resuelto.
pub fn enrich_order(
    order: &RepairOrder,
    vehicles: &VehicleIndex,
    accounts: &AccountIndex,
) -> EnrichedOrder {
    let vehicle = order
        .vehicle_id
        .and_then(|id| vehicles.by_id(id).cloned())
        .or_else(|| order.embedded_vehicle.clone());

    // Si el vehículo indexado no trae campos de propietario, la copia
    // embebida todavía puede resolver la cuenta
    let owner = vehicle
        .as_ref()
        .and_then(|v| resolve_owner(v, accounts))
        .or_else(|| {
            order
                .embedded_vehicle
                .as_ref()
                .and_then(|v| resolve_owner(v, accounts))
        });

    EnrichedOrder {
        order: order.clone(),
        vehicle,
        owner,
    }
}

/// Enriquecer una colección de órdenes, preservando el orden de entrada
pub fn enrich_orders(
    orders: &[RepairOrder],
    vehicles: &VehicleIndex,
    accounts: &AccountIndex,
) -> Vec<EnrichedOrder> {
    orders
        .iter()
        .map(|o| enrich_order(o, vehicles, accounts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalizer::{normalize_order, normalize_vehicle};
    use serde_json::json;

    fn account(id: i64, customer_id: Option<i64>) -> Account {
        Account {
            id,
            customer_id,
            email: format!("user{}@taller.es", id),
            name: None,
            username: None,
            roles: vec![],
        }
    }

    #[test]
    fn test_order_resolves_account_through_indexed_vehicle() {
        let vehicle = normalize_vehicle(&json!({ "id": 5, "customerId": 9 }));
        let vehicles = VehicleIndex::build(std::slice::from_ref(&vehicle));
        let accounts = AccountIndex::build(&[account(1, Some(9))]);

        let order = normalize_order(&json!({ "id": 3, "carId": 5 }));
        let enriched = enrich_order(&order, &vehicles, &accounts);

        assert_eq!(enriched.vehicle.as_ref().unwrap().id, 5);
        assert_eq!(enriched.owner.as_ref().unwrap().id, 1);
    }

    #[test]
    fn test_indexed_vehicle_wins_over_embedded_copy() {
        // La copia embebida trae datos viejos; el índice tiene el registro fresco
        let fresh = normalize_vehicle(&json!({ "id": 5, "plate": "NEW-999", "customerId": 9 }));
        let vehicles = VehicleIndex::build(std::slice::from_ref(&fresh));
        let accounts = AccountIndex::build(&[account(1, Some(9))]);

        let order = normalize_order(&json!({
            "id": 3,
            "car": { "id": 5, "plate": "OLD-111" }
        }));
        let enriched = enrich_order(&order, &vehicles, &accounts);

        assert_eq!(enriched.vehicle.as_ref().unwrap().plate, "NEW-999");
    }

    #[test]
    fn test_embedded_vehicle_fallback_when_not_indexed() {
        let vehicles = VehicleIndex::default();
        let accounts = AccountIndex::build(&[account(1, Some(9))]);

        let order = normalize_order(&json!({
            "id": 3,
            "car": { "id": 5, "plate": "DEF-456", "customerId": 9 }
        }));
        let enriched = enrich_order(&order, &vehicles, &accounts);

        assert_eq!(enriched.vehicle.as_ref().unwrap().plate, "DEF-456");
        assert_eq!(enriched.owner.as_ref().unwrap().id, 1);
    }

    #[test]
    fn test_embedded_owner_fields_rescue_account_resolution() {
        // El registro fresco no trae propietario; la copia embebida sí
        let fresh = normalize_vehicle(&json!({ "id": 5, "plate": "NEW-999" }));
        let vehicles = VehicleIndex::build(std::slice::from_ref(&fresh));
        let accounts = AccountIndex::build(&[account(1, Some(9))]);

        let order = normalize_order(&json!({
            "id": 3,
            "car": { "id": 5, "customerId": 9 }
        }));
        let enriched = enrich_order(&order, &vehicles, &accounts);

        assert_eq!(enriched.vehicle.as_ref().unwrap().plate, "NEW-999");
        assert_eq!(enriched.owner.as_ref().unwrap().id, 1);
    }

    #[test]
    fn test_user_id_fallback_when_customer_id_misses() {
        let vehicle = normalize_vehicle(&json!({ "id": 5, "customerId": 77, "userId": 2 }));
        let accounts = AccountIndex::build(&[account(2, None)]);

        let enriched = enrich_vehicle(&vehicle, &accounts);
        assert_eq!(enriched.owner.as_ref().unwrap().id, 2);
    }

    #[test]
    fn test_unresolved_join_leaves_owner_unset() {
        let vehicle = normalize_vehicle(&json!({ "id": 5 }));
        let enriched = enrich_vehicle(&vehicle, &AccountIndex::default());
        assert!(enriched.owner.is_none());

        let order = normalize_order(&json!({ "id": 3 }));
        let enriched = enrich_order(&order, &VehicleIndex::default(), &AccountIndex::default());
        assert!(enriched.vehicle.is_none());
        assert!(enriched.owner.is_none());
    }

    #[test]
    fn test_collection_enrichment_preserves_order() {
        let vehicles: Vec<_> = [5, 3, 8]
            .iter()
            .map(|id| normalize_vehicle(&json!({ "id": id })))
            .collect();
        let enriched = enrich_vehicles(&vehicles, &AccountIndex::default());
        let ids: Vec<_> = enriched.iter().map(|e| e.vehicle.id).collect();
        assert_eq!(ids, vec![5, 3, 8]);
    }
}
