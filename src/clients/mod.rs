//! Clientes hacia servicios externos
//!
//! Este módulo define el contrato `WorkshopApi` con las operaciones remotas
//! del servicio de persistencia del taller, y su implementación HTTP.
//! Las respuestas de lectura son JSON crudo (`serde_json::Value`): el núcleo
//! no asume un formato de wire único, la normalización vive en los servicios.

pub mod http_client;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::{CreateNoteRequest, CreateOrderRequest, CreateVehicleRequest, SessionContext};
use crate::utils::errors::Result;

pub use http_client::HttpWorkshopClient;

/// Operaciones remotas del servicio de persistencia
#[async_trait]
pub trait WorkshopApi: Send + Sync {
    /// Vehículos del llamador autenticado
    async fn list_my_vehicles(&self, session: &SessionContext) -> Result<Vec<Value>>;

    /// Todos los vehículos (staff)
    async fn list_all_vehicles(&self, session: &SessionContext) -> Result<Vec<Value>>;

    /// Todas las cuentas (staff)
    async fn list_accounts(&self, session: &SessionContext) -> Result<Vec<Value>>;

    /// Órdenes del llamador autenticado
    async fn list_my_orders(&self, session: &SessionContext) -> Result<Vec<Value>>;

    /// Todas las órdenes (staff)
    async fn list_all_orders(&self, session: &SessionContext) -> Result<Vec<Value>>;

    /// Orden por id
    async fn get_order(&self, session: &SessionContext, order_id: i64) -> Result<Value>;

    /// Detalle de orden con campos aplanados (customerName, plateNumber, ...)
    async fn get_order_details(&self, session: &SessionContext, order_id: i64) -> Result<Value>;

    /// Órdenes de un vehículo concreto
    async fn list_orders_by_vehicle(
        &self,
        session: &SessionContext,
        vehicle_id: i64,
    ) -> Result<Vec<Value>>;

    /// Notas de una orden
    async fn get_order_notes(&self, session: &SessionContext, order_id: i64) -> Result<Vec<Value>>;

    /// Añadir una nota a una orden; devuelve la nota creada
    async fn add_order_note(
        &self,
        session: &SessionContext,
        order_id: i64,
        note: &CreateNoteRequest,
    ) -> Result<Value>;

    /// Actualizar una orden con su payload completo
    async fn update_order(
        &self,
        session: &SessionContext,
        order_id: i64,
        payload: &Value,
    ) -> Result<Value>;

    /// Cerrar una orden
    async fn close_order(&self, session: &SessionContext, order_id: i64) -> Result<Value>;

    /// Registrar un vehículo
    async fn create_vehicle(
        &self,
        session: &SessionContext,
        request: &CreateVehicleRequest,
    ) -> Result<Value>;

    /// Crear una orden contra un vehículo propio
    async fn create_order(
        &self,
        session: &SessionContext,
        vehicle_id: i64,
        request: &CreateOrderRequest,
    ) -> Result<Value>;

    /// Actualizar el estado de un vehículo
    async fn update_vehicle_status(
        &self,
        session: &SessionContext,
        vehicle_id: i64,
        status: &str,
    ) -> Result<Value>;

    /// Borrar un vehículo
    async fn delete_vehicle(&self, session: &SessionContext, vehicle_id: i64) -> Result<()>;

    /// Borrar una orden
    async fn delete_order(&self, session: &SessionContext, order_id: i64) -> Result<()>;

    /// Borrar una cuenta
    async fn delete_account(&self, session: &SessionContext, account_id: i64) -> Result<()>;
}
