//! Modelo de Order
//!
//! Invariante de estado: `status = "routed"` ⇔ `route_id` apunta a una ruta
//! existente; `status = "pending"` ⇔ `route_id` es NULL. La transición la
//! gobierna exclusivamente la reconciliación (ver `services::reconciliation`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use validator::Validate;

use super::customer::default_time_windows;

pub const ORDER_STATUS_PENDING: &str = "pending";
pub const ORDER_STATUS_ROUTED: &str = "routed";

/// Pedido persistido. `customer_name` está desnormalizado a propósito: el
/// frontend lista pedidos sin join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub lat: f64,
    pub lon: f64,
    pub demand: i32,
    pub time_windows: JsonValue,
    pub service_duration: i32,
    pub status: String,
    pub route_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Payload de creación; el estado siempre se fuerza a `pending` en el insert,
/// no viene del cliente.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub customer_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub customer_name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub demand: i32,

    #[serde(default = "default_time_windows")]
    pub time_windows: JsonValue,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub service_duration: i32,
}

/// Filtros del listado de pedidos. Cadena vacía y cero equivalen a "sin
/// filtro", igual que en la API original.
#[derive(Debug, Default, Deserialize)]
pub struct OrderFilters {
    pub status: Option<String>,
    pub route_id: Option<i32>,
}
