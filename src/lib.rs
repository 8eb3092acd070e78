//! Núcleo de reconciliación del taller
//!
//! Este crate contiene la lógica compartida de reconciliación de registros
//! (vehículos, cuentas, órdenes de reparación) y el ciclo de vida de las
//! órdenes. La capa de presentación consume las vistas enriquecidas que
//! producen los servicios; la persistencia vive en un servicio REST externo
//! consumido a través de `clients::WorkshopApi`.

pub mod clients;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use clients::WorkshopApi;
pub use models::session::SessionContext;
pub use utils::errors::AppError;

use anyhow::Result;
use tracing::info;

/// Inicializar entorno y logging para un binario consumidor:
/// carga `.env` y configura el subscriber de tracing.
pub fn init() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| anyhow::anyhow!("error inicializando tracing: {}", e))?;

    info!("🔧 Núcleo del taller inicializado");
    Ok(())
}
