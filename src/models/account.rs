//! Modelo de Account
//!
//! Este módulo contiene la forma canónica de una cuenta (cliente o staff)
//! tal como la devuelve el endpoint de usuarios del servicio de persistencia.

use serde::{Deserialize, Serialize};

/// Rol que marca a una cuenta como cliente del taller
pub const ROLE_CUSTOMER: &str = "ROLE_USER";

/// Rol de staff/administración
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Cuenta canónica (cliente o usuario del sistema)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    /// Identificador secundario usado como clave de join desde vehículos/órdenes.
    /// Único dentro de la colección cuando está presente.
    pub customer_id: Option<i64>,
    pub email: String,
    pub name: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Account {
    /// Verificar si la cuenta tiene rol de cliente
    pub fn is_customer(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_CUSTOMER)
    }

    /// Verificar si la cuenta tiene rol de staff
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }

    /// Nombre a mostrar: name → username → parte local del email → "Account #<id>"
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
        if let Some(username) = self.username.as_deref() {
            if !username.is_empty() {
                return username.to_string();
            }
        }
        if let Some(local) = self.email.split('@').next() {
            if !local.is_empty() {
                return local.to_string();
            }
        }
        format!("Account #{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: 7,
            customer_id: Some(9),
            email: "ana@taller.es".to_string(),
            name: None,
            username: None,
            roles: vec![ROLE_CUSTOMER.to_string()],
        }
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let mut a = account();
        a.name = Some("Ana García".to_string());
        assert_eq!(a.display_name(), "Ana García");

        a.name = Some("   ".to_string());
        a.username = Some("anag".to_string());
        assert_eq!(a.display_name(), "anag");

        a.username = None;
        assert_eq!(a.display_name(), "ana");

        a.email = String::new();
        assert_eq!(a.display_name(), "Account #7");
    }

    #[test]
    fn test_role_checks() {
        let a = account();
        assert!(a.is_customer());
        assert!(!a.is_admin());
    }
}
