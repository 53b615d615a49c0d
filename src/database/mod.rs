//! Módulo de base de datos
//!
//! Maneja la conexión al pool de PostgreSQL y la aplicación del schema.

pub mod connection;

pub use connection::{connect_with_retries, init_schema};
