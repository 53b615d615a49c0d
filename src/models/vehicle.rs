//! Modelo de Vehicle
//!
//! Mapea a la tabla `vehicles`. Sin máquina de estados: CRUD puro.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Vehículo persistido.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub start_lat: f64,
    pub start_lon: f64,
}

/// Payload de creación y de reemplazo completo (PUT).
#[derive(Debug, Deserialize, Validate)]
pub struct VehiclePayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 0))]
    pub capacity: i32,

    #[validate(range(min = -90.0, max = 90.0))]
    pub start_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub start_lon: f64,
}
