//! Modelos del sistema
//!
//! Este módulo contiene las formas canónicas de los registros del taller.
//! Los registros llegan del servicio de persistencia con nombres de campo
//! variables; el normalizador (`services::normalizer`) produce estas formas.

pub mod account;
pub mod note;
pub mod repair_order;
pub mod session;
pub mod vehicle;

pub use account::Account;
pub use note::{CreateNoteRequest, Note};
pub use repair_order::{CreateOrderRequest, OrderStatus, OrderUpdate, RepairOrder};
pub use session::SessionContext;
pub use vehicle::{CreateVehicleRequest, Vehicle};
