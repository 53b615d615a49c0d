//! Modelo de Customer
//!
//! Las ventanas horarias se guardan como JSONB opaco: el schema solo exige
//! JSON bien formado, el optimizador externo es quien las interpreta.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use validator::Validate;

/// Cliente persistido.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub demand: i32,
    pub time_windows: JsonValue,
    pub service_duration: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

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

pub(crate) fn default_time_windows() -> JsonValue {
    JsonValue::Array(Vec::new())
}
