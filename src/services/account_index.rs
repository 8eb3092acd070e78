//! Índices de referencia cruzada
//!
//! Este módulo construye los índices de lookup que permiten unir órdenes y
//! vehículos con sus cuentas propietarias sin una foreign key garantizada.
//! Construcción O(n), lookup O(1). Política de colisión: last-write-wins,
//! nunca un error.

use std::collections::HashMap;

use crate::models::{Account, Vehicle};

/// Índices de cuentas: por customer-id y por id primario
#[derive(Debug, Default, Clone)]
pub struct AccountIndex {
    by_customer_id: HashMap<i64, Account>,
    by_account_id: HashMap<i64, Account>,
}

impl AccountIndex {
    /// Construir ambos índices en una pasada.
    /// Un customer-id duplicado se sobreescribe con la cuenta posterior en
    /// orden de iteración. Todo id presente se indexa, incluido el 0: la
    /// exclusión por truthiness del id 0 era un bug latente, no comportamiento
    /// buscado.
    pub fn build(accounts: &[Account]) -> Self {
        let mut index = AccountIndex::default();
        for account in accounts {
            if let Some(customer_id) = account.customer_id {
                index.by_customer_id.insert(customer_id, account.clone());
            }
            index.by_account_id.insert(account.id, account.clone());
        }
        index
    }

    pub fn by_customer_id(&self, customer_id: i64) -> Option<&Account> {
        self.by_customer_id.get(&customer_id)
    }

    pub fn by_account_id(&self, account_id: i64) -> Option<&Account> {
        self.by_account_id.get(&account_id)
    }

    pub fn len(&self) -> usize {
        self.by_account_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_account_id.is_empty()
    }
}

/// Índice de vehículos por id
#[derive(Debug, Default, Clone)]
pub struct VehicleIndex {
    by_id: HashMap<i64, Vehicle>,
}

impl VehicleIndex {
    pub fn build(vehicles: &[Vehicle]) -> Self {
        let mut by_id = HashMap::with_capacity(vehicles.len());
        for vehicle in vehicles {
            by_id.insert(vehicle.id, vehicle.clone());
        }
        Self { by_id }
    }

    pub fn by_id(&self, vehicle_id: i64) -> Option<&Vehicle> {
        self.by_id.get(&vehicle_id)
    }
}

/// Vehículos por propietario resuelto (customer-id o, en su defecto,
/// user-id). Usado por la pantalla de clientes para contar vehículos.
pub fn vehicle_count_by_owner(vehicles: &[Vehicle]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for vehicle in vehicles {
        let owner = match vehicle.customer_id.or(vehicle.user_id) {
            Some(id) => id,
            None => continue,
        };
        *counts.entry(owner).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_build_indexes_both_keys() {
        let accounts = vec![account(1, Some(9)), account(2, None)];
        let index = AccountIndex::build(&accounts);

        assert_eq!(index.by_customer_id(9).unwrap().id, 1);
        assert!(index.by_customer_id(2).is_none());
        assert_eq!(index.by_account_id(2).unwrap().id, 2);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_duplicate_customer_id_last_write_wins() {
        let accounts = vec![account(1, Some(9)), account(2, Some(9))];
        let index = AccountIndex::build(&accounts);

        assert_eq!(index.by_customer_id(9).unwrap().id, 2);
    }

    #[test]
    fn test_account_id_zero_is_indexed() {
        let accounts = vec![account(0, None)];
        let index = AccountIndex::build(&accounts);

        assert_eq!(index.by_account_id(0).unwrap().id, 0);
    }

    #[test]
    fn test_vehicle_count_by_owner() {
        let vehicle = |id, customer_id, user_id| Vehicle {
            id,
            brand: String::new(),
            model: String::new(),
            year: None,
            plate: String::new(),
            status: String::new(),
            customer_id,
            user_id,
        };

        let vehicles = vec![
            vehicle(1, Some(9), None),
            vehicle(2, Some(9), None),
            vehicle(3, None, Some(4)),
            vehicle(4, None, None),
        ];

        let counts = vehicle_count_by_owner(&vehicles);
        assert_eq!(counts.get(&9), Some(&2));
        assert_eq!(counts.get(&4), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
