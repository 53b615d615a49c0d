//! Modelos de dominio
//!
//! Structs que mapean a las tablas PostgreSQL más los DTOs de request.

pub mod customer;
pub mod order;
pub mod route;
pub mod vehicle;
