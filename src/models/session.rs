//! Contexto de sesión explícito
//!
//! Este módulo reemplaza el almacenamiento ambiental de token/roles por un
//! objeto de sesión que se pasa explícitamente al cliente HTTP. El token lo
//! emite el colaborador de autenticación externo; aquí solo se decodifica el
//! segmento de payload del JWT para extraer los roles (sin verificar firma,
//! eso es responsabilidad del servidor).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

use crate::models::account::{ROLE_ADMIN, ROLE_CUSTOMER};

/// Sesión autenticada (o anónima) del llamador
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub token: Option<String>,
    pub roles: Vec<String>,
}

impl SessionContext {
    /// Sesión sin credenciales
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Construir la sesión a partir de un token JWT, extrayendo los roles
    /// del payload. El claim puede llamarse `roles`, `authorities` o `role`,
    /// y puede ser lista o valor suelto.
    pub fn from_token(token: &str) -> Self {
        let roles = decode_roles(token);
        Self {
            token: Some(token.to_string()),
            roles,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }

    pub fn is_customer(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_CUSTOMER)
    }

    /// Cerrar sesión: limpia token y roles
    pub fn clear(&mut self) {
        self.token = None;
        self.roles.clear();
    }
}

/// Decodificar los roles del segmento de payload de un JWT.
/// Total: cualquier token malformado produce una lista vacía.
fn decode_roles(token: &str) -> Vec<String> {
    let payload_segment = match token.split('.').nth(1) {
        Some(segment) => segment,
        None => return Vec::new(),
    };

    let bytes = match URL_SAFE_NO_PAD.decode(payload_segment) {
        Ok(bytes) => bytes,
        Err(_) => return Vec::new(),
    };

    let payload: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    let claim = payload
        .get("roles")
        .or_else(|| payload.get("authorities"))
        .or_else(|| payload.get("role"));

    match claim {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(role)) => vec![role.clone()],
        _ => Vec::new(),
    }
}
