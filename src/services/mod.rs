//! Services module
//!
//! Este módulo contiene la lógica de reconciliación y ciclo de vida:
//! normalización de campos, índices de referencia cruzada, enriquecimiento,
//! filtrado y las pasadas completas contra el servicio de persistencia.

pub mod account_index;
pub mod enrichment;
pub mod filter;
pub mod lifecycle;
pub mod normalizer;
pub mod reconciliation;

pub use account_index::{AccountIndex, VehicleIndex};
pub use enrichment::{EnrichedOrder, EnrichedVehicle};
pub use filter::StatusFilter;
pub use lifecycle::LifecycleController;
pub use reconciliation::ReconciliationService;
