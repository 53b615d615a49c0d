//! Configuración del proyecto
//!
//! Variables de entorno y valores por defecto aptos para docker-compose.

pub mod environment;

pub use environment::EnvironmentConfig;
