//! Controlador del ciclo de vida de órdenes
//!
//! Secuencia estricta de estados: PENDING → IN_PROGRESS → READY_FOR_PICKUP
//! → CLOSED, sin saltos ni transición hacia atrás en esta capa. El
//! controlador proyecta el timeline de progreso y aplica la guardia de
//! no-op antes de persistir: sin cambio real, no hay llamada remota.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::clients::WorkshopApi;
use crate::models::repair_order::STATUS_SEQUENCE;
use crate::models::{OrderUpdate, RepairOrder, SessionContext};
use crate::services::normalizer::{self, coerce_cost};
use crate::utils::errors::Result;

/// Índice cero-basado de un estado dentro de la secuencia del ciclo de vida.
/// Un estado desconocido o vacío mapea a 0 (PENDING).
pub fn status_index(status: &str) -> usize {
    STATUS_SEQUENCE
        .iter()
        .position(|s| s.as_str() == status)
        .unwrap_or(0)
}

/// Paso del timeline de progreso
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStep {
    pub status: &'static str,
    pub completed: bool,
}

/// Proyectar el timeline: todo paso hasta el índice actual inclusive
/// queda marcado como completado.
pub fn timeline(status: &str) -> Vec<TimelineStep> {
    let current = status_index(status);
    STATUS_SEQUENCE
        .iter()
        .enumerate()
        .map(|(i, s)| TimelineStep {
            status: s.as_str(),
            completed: i <= current,
        })
        .collect()
}

/// Calcular el cambio a persistir. El coste propuesto llega como JSON crudo
/// (entrada de formulario) y se coerciona a número antes de comparar; si ni
/// el estado ni el coste difieren de lo persistido devuelve None — guardia
/// de no-op, no un error.
pub fn plan_update(
    order: &RepairOrder,
    proposed_status: &str,
    proposed_cost: &Value,
) -> Option<OrderUpdate> {
    let new_cost = coerce_cost(Some(proposed_cost));
    let unchanged = proposed_status == order.status && new_cost == order.cost;
    if unchanged {
        return None;
    }

    Some(OrderUpdate {
        order_id: order.id,
        status: proposed_status.to_string(),
        cost: new_cost,
        payload: order.merged_update_payload(proposed_status, new_cost),
    })
}

/// Controlador que media las mutaciones de estado de órdenes
pub struct LifecycleController {
    api: Arc<dyn WorkshopApi>,
}

impl LifecycleController {
    pub fn new(api: Arc<dyn WorkshopApi>) -> Self {
        Self { api }
    }

    /// Aplicar un cambio de estado/coste. Sin cambio real no se emite
    /// ninguna llamada y se devuelve None. Con cambio, una única llamada
    /// combinada con el payload completo; si falla, el cambio propuesto se
    /// descarta y el error se propaga para el aviso genérico.
    pub async fn apply_update(
        &self,
        session: &SessionContext,
        order: &RepairOrder,
        proposed_status: &str,
        proposed_cost: &Value,
    ) -> Result<Option<RepairOrder>> {
        let update = match plan_update(order, proposed_status, proposed_cost) {
            Some(update) => update,
            None => {
                info!(order_id = order.id, "sin cambios, no se persiste");
                return Ok(None);
            }
        };

        match self
            .api
            .update_order(session, update.order_id, &update.payload)
            .await
        {
            Ok(raw) => {
                info!(
                    order_id = update.order_id,
                    status = %update.status,
                    "✅ Orden actualizada"
                );
                Ok(Some(normalizer::normalize_order(&raw)))
            }
            Err(e) => {
                error!(order_id = update.order_id, "❌ Error actualizando orden: {}", e);
                Err(e)
            }
        }
    }

    /// Cerrar una orden (transición directa al estado terminal)
    pub async fn close_order(
        &self,
        session: &SessionContext,
        order_id: i64,
    ) -> Result<RepairOrder> {
        let raw = self.api.close_order(session, order_id).await?;
        info!(order_id, "✅ Orden cerrada");
        Ok(normalizer::normalize_order(&raw))
    }
}
