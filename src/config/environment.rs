//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y las variables
//! necesarias para hablar con el servicio de persistencia del taller.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// URL base del servicio de persistencia (REST)
    pub api_base_url: String,
    /// Timeout de las peticiones HTTP, en segundos
    pub http_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            api_base_url: env::var("WORKSHOP_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            http_timeout_secs: env::var("WORKSHOP_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
