//! Servicio de reconciliación
//!
//! Una pasada de reconciliación = fetches concurrentes de las colecciones
//! necesarias (fan-out), join todo-o-nada (si falla una lectura, falla la
//! pasada entera — no hay reconciliación parcial), y después normalizar →
//! indexar → enriquecer. Modelo de consistencia "refetch-and-replace":
//! tras cualquier mutación el llamador vuelve a ejecutar la pasada en vez
//! de parchear una cache.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::clients::WorkshopApi;
use crate::models::{Account, CreateNoteRequest, Note, RepairOrder, SessionContext, Vehicle};
use crate::services::account_index::{vehicle_count_by_owner, AccountIndex, VehicleIndex};
use crate::services::enrichment::{enrich_orders, enrich_vehicles, EnrichedOrder, EnrichedVehicle};
use crate::services::lifecycle::{timeline, TimelineStep};
use crate::services::normalizer::{
    self, normalize_account, normalize_note, normalize_order, normalize_vehicle, PLATE_KEYS,
};
use crate::utils::errors::Result;
use crate::utils::format::UNKNOWN_LABEL;

/// Resumen de cliente para la pantalla de gestión de clientes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub account: Account,
    pub vehicle_count: usize,
}

/// Vista del dashboard de un cliente: sus vehículos y sus órdenes
#[derive(Debug, Clone, Serialize)]
pub struct ClientDashboard {
    pub vehicles: Vec<Vehicle>,
    pub orders: Vec<EnrichedOrder>,
}

/// Vista de detalle de una orden
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetailView {
    pub order: RepairOrder,
    pub customer_name: String,
    pub customer_email: String,
    pub plate: String,
    pub timeline: Vec<TimelineStep>,
    pub notes: Vec<Note>,
}

/// Servicio que ejecuta las pasadas de reconciliación
pub struct ReconciliationService {
    api: Arc<dyn WorkshopApi>,
}

impl ReconciliationService {
    pub fn new(api: Arc<dyn WorkshopApi>) -> Self {
        Self { api }
    }

    /// Pasada de la pantalla de órdenes (staff): órdenes + vehículos +
    /// cuentas, unidos en dos niveles (orden → vehículo → cuenta).
    pub async fn admin_orders_view(&self, session: &SessionContext) -> Result<Vec<EnrichedOrder>> {
        let (raw_orders, raw_vehicles, raw_accounts) = tokio::try_join!(
            self.api.list_all_orders(session),
            self.api.list_all_vehicles(session),
            self.api.list_accounts(session),
        )
        .map_err(|e| {
            error!("❌ Error cargando la vista de órdenes: {}", e);
            e
        })?;

        let orders: Vec<_> = raw_orders.iter().map(normalize_order).collect();
        let vehicles: Vec<_> = raw_vehicles.iter().map(normalize_vehicle).collect();
        let accounts: Vec<_> = raw_accounts.iter().map(normalize_account).collect();

        let enriched = enrich_orders(
            &orders,
            &VehicleIndex::build(&vehicles),
            &AccountIndex::build(&accounts),
        );

        info!(
            orders = enriched.len(),
            vehicles = vehicles.len(),
            accounts = accounts.len(),
            "🔧 Pasada de reconciliación de órdenes completada"
        );
        Ok(enriched)
    }

    /// Pasada de la pantalla de vehículos (staff): vehículos + cuentas
    pub async fn admin_vehicles_view(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<EnrichedVehicle>> {
        let (raw_vehicles, raw_accounts) = tokio::try_join!(
            self.api.list_all_vehicles(session),
            self.api.list_accounts(session),
        )
        .map_err(|e| {
            error!("❌ Error cargando la vista de vehículos: {}", e);
            e
        })?;

        let vehicles: Vec<_> = raw_vehicles.iter().map(normalize_vehicle).collect();
        let accounts: Vec<_> = raw_accounts.iter().map(normalize_account).collect();

        Ok(enrich_vehicles(&vehicles, &AccountIndex::build(&accounts)))
    }

    /// Pasada de la pantalla de clientes (staff): solo cuentas con rol de
    /// cliente, con el número de vehículos de cada una.
    pub async fn admin_clients_view(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ClientSummary>> {
        let (raw_accounts, raw_vehicles) = tokio::try_join!(
            self.api.list_accounts(session),
            self.api.list_all_vehicles(session),
        )
        .map_err(|e| {
            error!("❌ Error cargando la vista de clientes: {}", e);
            e
        })?;

        let vehicles: Vec<_> = raw_vehicles.iter().map(normalize_vehicle).collect();
        let counts = vehicle_count_by_owner(&vehicles);

        Ok(raw_accounts
            .iter()
            .map(normalize_account)
            .filter(Account::is_customer)
            .map(|account| {
                let owner_key = account.customer_id.unwrap_or(account.id);
                ClientSummary {
                    vehicle_count: counts.get(&owner_key).copied().unwrap_or(0),
                    account,
                }
            })
            .collect())
    }

    /// Dashboard del cliente autenticado: sus vehículos y sus órdenes,
    /// con las órdenes unidas a los vehículos propios.
    pub async fn client_dashboard(&self, session: &SessionContext) -> Result<ClientDashboard> {
        let (raw_vehicles, raw_orders) = tokio::try_join!(
            self.api.list_my_vehicles(session),
            self.api.list_my_orders(session),
        )
        .map_err(|e| {
            error!("❌ Error cargando el dashboard del cliente: {}", e);
            e
        })?;

        let vehicles: Vec<_> = raw_vehicles.iter().map(normalize_vehicle).collect();
        let orders: Vec<_> = raw_orders.iter().map(normalize_order).collect();

        let enriched = enrich_orders(
            &orders,
            &VehicleIndex::build(&vehicles),
            &AccountIndex::default(),
        );

        Ok(ClientDashboard {
            vehicles,
            orders: enriched,
        })
    }

    /// Detalle de una orden: el registro de detalle y sus notas, en
    /// paralelo. Un fallo en las notas degrada a lista vacía; un fallo en
    /// la orden hace fallar la pasada.
    pub async fn order_detail(
        &self,
        session: &SessionContext,
        order_id: i64,
    ) -> Result<OrderDetailView> {
        let (raw_detail, notes_result) = futures::join!(
            self.api.get_order_details(session, order_id),
            self.api.get_order_notes(session, order_id),
        );

        let raw_detail = raw_detail.map_err(|e| {
            error!(order_id, "❌ Error cargando el detalle de la orden: {}", e);
            e
        })?;

        let notes = match notes_result {
            Ok(raw_notes) => raw_notes.iter().map(normalize_note).collect(),
            Err(e) => {
                warn!(order_id, "Notas no disponibles, se muestra lista vacía: {}", e);
                Vec::new()
            }
        };

        let order = normalize_order(&raw_detail);
        let customer_name = detail_label(&raw_detail, &["customerName", "customer_name"]);
        let customer_email = detail_label(&raw_detail, &["customerEmail", "customer_email"]);
        let plate = normalizer::pick_str(&raw_detail, PLATE_KEYS);

        Ok(OrderDetailView {
            customer_name,
            customer_email,
            plate,
            timeline: timeline(&order.status),
            notes,
            order,
        })
    }

    /// Añadir una nota de mecánico. Entrada en blanco = no-op sin llamada
    /// remota; devuelve la nota creada cuando el servicio la persiste.
    pub async fn add_note(
        &self,
        session: &SessionContext,
        order_id: i64,
        input: &str,
    ) -> Result<Option<Note>> {
        let request = match CreateNoteRequest::from_input(input) {
            Some(request) => request,
            None => return Ok(None),
        };

        match self.api.add_order_note(session, order_id, &request).await {
            Ok(raw) => Ok(Some(normalize_note(&raw))),
            Err(e) => {
                error!(order_id, "❌ Error añadiendo nota: {}", e);
                Err(e)
            }
        }
    }

    /// Borrar una orden; el llamador relanza la pasada tras el borrado
    pub async fn delete_order(&self, session: &SessionContext, order_id: i64) -> Result<()> {
        self.api.delete_order(session, order_id).await.map_err(|e| {
            error!(order_id, "❌ Error borrando orden: {}", e);
            e
        })
    }

    /// Borrar un vehículo
    pub async fn delete_vehicle(&self, session: &SessionContext, vehicle_id: i64) -> Result<()> {
        self.api
            .delete_vehicle(session, vehicle_id)
            .await
            .map_err(|e| {
                error!(vehicle_id, "❌ Error borrando vehículo: {}", e);
                e
            })
    }

    /// Borrar una cuenta de cliente
    pub async fn delete_account(&self, session: &SessionContext, account_id: i64) -> Result<()> {
        self.api
            .delete_account(session, account_id)
            .await
            .map_err(|e| {
                error!(account_id, "❌ Error borrando cuenta: {}", e);
                e
            })
    }
}

/// Campo aplanado del endpoint de detalle; "Unknown" cuando falta
fn detail_label(raw: &serde_json::Value, keys: &[&str]) -> String {
    let value = normalizer::pick_str(raw, keys);
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}
