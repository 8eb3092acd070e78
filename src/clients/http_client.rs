//! Cliente HTTP del servicio de persistencia
//!
//! Este módulo contiene la implementación reqwest de `WorkshopApi`.
//! El token de sesión se pasa explícitamente en cada llamada; no hay
//! estado de autenticación ambiental.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::error;
use validator::Validate;

use crate::clients::WorkshopApi;
use crate::config::EnvironmentConfig;
use crate::models::{CreateNoteRequest, CreateOrderRequest, CreateVehicleRequest, SessionContext};
use crate::utils::errors::{AppError, Result};

/// Cliente HTTP hacia el servicio de persistencia del taller
pub struct HttpWorkshopClient {
    client: Client,
    base_url: String,
}

impl HttpWorkshopClient {
    /// Crear un nuevo cliente con la URL base y timeout de la configuración
    pub fn new(config: &EnvironmentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str, session: &SessionContext) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method, &url)
            .header("Accept", "application/json");

        if let Some(token) = session.token.as_deref() {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    /// Enviar la petición y decodificar el cuerpo JSON; un status no-2xx
    /// se convierte en `AppError::ExternalApi`.
    async fn send_json(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Respuesta de error del servicio de persistencia: {} {}", status, body);
            return Err(AppError::external(status, body));
        }

        Ok(response.json().await?)
    }

    /// Igual que `send_json` pero exige una lista en la respuesta
    async fn send_json_list(&self, builder: RequestBuilder) -> Result<Vec<Value>> {
        match self.send_json(builder).await? {
            Value::Array(items) => Ok(items),
            other => Err(AppError::MalformedResponse(format!(
                "se esperaba una lista, llegó {}",
                type_label(&other)
            ))),
        }
    }

    /// Enviar sin esperar payload estructurado (deletes)
    async fn send_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Respuesta de error del servicio de persistencia: {} {}", status, body);
            return Err(AppError::external(status, body));
        }

        Ok(())
    }
}

fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl WorkshopApi for HttpWorkshopClient {
    async fn list_my_vehicles(&self, session: &SessionContext) -> Result<Vec<Value>> {
        self.send_json_list(self.request(Method::GET, "/cars/my", session))
            .await
    }

    async fn list_all_vehicles(&self, session: &SessionContext) -> Result<Vec<Value>> {
        self.send_json_list(self.request(Method::GET, "/cars", session))
            .await
    }

    async fn list_accounts(&self, session: &SessionContext) -> Result<Vec<Value>> {
        self.send_json_list(self.request(Method::GET, "/users", session))
            .await
    }

    async fn list_my_orders(&self, session: &SessionContext) -> Result<Vec<Value>> {
        self.send_json_list(self.request(Method::GET, "/repair-orders/my", session))
            .await
    }

    async fn list_all_orders(&self, session: &SessionContext) -> Result<Vec<Value>> {
        self.send_json_list(self.request(Method::GET, "/repair-orders", session))
            .await
    }

    async fn get_order(&self, session: &SessionContext, order_id: i64) -> Result<Value> {
        self.send_json(self.request(Method::GET, &format!("/repair-orders/{}", order_id), session))
            .await
    }

    async fn get_order_details(&self, session: &SessionContext, order_id: i64) -> Result<Value> {
        self.send_json(self.request(
            Method::GET,
            &format!("/repair-orders/{}/details", order_id),
            session,
        ))
        .await
    }

    async fn list_orders_by_vehicle(
        &self,
        session: &SessionContext,
        vehicle_id: i64,
    ) -> Result<Vec<Value>> {
        self.send_json_list(self.request(
            Method::GET,
            &format!("/repair-orders/car/{}", vehicle_id),
            session,
        ))
        .await
    }

    async fn get_order_notes(&self, session: &SessionContext, order_id: i64) -> Result<Vec<Value>> {
        self.send_json_list(self.request(
            Method::GET,
            &format!("/repair-orders/{}/notes", order_id),
            session,
        ))
        .await
    }

    async fn add_order_note(
        &self,
        session: &SessionContext,
        order_id: i64,
        note: &CreateNoteRequest,
    ) -> Result<Value> {
        note.validate()?;
        self.send_json(
            self.request(
                Method::POST,
                &format!("/repair-orders/{}/notes", order_id),
                session,
            )
            .json(note),
        )
        .await
    }

    async fn update_order(
        &self,
        session: &SessionContext,
        order_id: i64,
        payload: &Value,
    ) -> Result<Value> {
        self.send_json(
            self.request(Method::PUT, &format!("/repair-orders/{}", order_id), session)
                .json(payload),
        )
        .await
    }

    async fn close_order(&self, session: &SessionContext, order_id: i64) -> Result<Value> {
        self.send_json(self.request(
            Method::PUT,
            &format!("/repair-orders/{}/close", order_id),
            session,
        ))
        .await
    }

    async fn create_vehicle(
        &self,
        session: &SessionContext,
        request: &CreateVehicleRequest,
    ) -> Result<Value> {
        request.validate()?;
        self.send_json(
            self.request(Method::POST, "/cars", session)
                .json(&request.to_wire_payload()),
        )
        .await
    }

    async fn create_order(
        &self,
        session: &SessionContext,
        vehicle_id: i64,
        request: &CreateOrderRequest,
    ) -> Result<Value> {
        request.validate()?;
        self.send_json(
            self.request(
                Method::POST,
                &format!("/repair-orders/car/{}", vehicle_id),
                session,
            )
            .json(request),
        )
        .await
    }

    async fn update_vehicle_status(
        &self,
        session: &SessionContext,
        vehicle_id: i64,
        status: &str,
    ) -> Result<Value> {
        self.send_json(
            self.request(Method::PUT, &format!("/cars/{}/status", vehicle_id), session)
                .json(&serde_json::json!({ "status": status })),
        )
        .await
    }

    async fn delete_vehicle(&self, session: &SessionContext, vehicle_id: i64) -> Result<()> {
        self.send_no_content(self.request(Method::DELETE, &format!("/cars/{}", vehicle_id), session))
            .await
    }

    async fn delete_order(&self, session: &SessionContext, order_id: i64) -> Result<()> {
        self.send_no_content(self.request(
            Method::DELETE,
            &format!("/repair-orders/{}", order_id),
            session,
        ))
        .await
    }

    async fn delete_account(&self, session: &SessionContext, account_id: i64) -> Result<()> {
        self.send_no_content(self.request(Method::DELETE, &format!("/users/{}", account_id), session))
            .await
    }
}
