//! Servicios de negocio

pub mod reconciliation;

pub use reconciliation::ReconciliationService;
