//! Modelo de Route
//!
//! `solution_json` es el documento de solución del optimizador: JSON anidado
//! arbitrario que persiste intacto. Este sistema solo lo inspecciona para
//! extraer `order_id` (ver `services::reconciliation`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

pub const ROUTE_STATUS_DRAFT: &str = "draft";
pub const ROUTE_STATUS_CONFIRMED: &str = "confirmed";

/// Ruta persistida. `status` admite valores definidos por el worker además de
/// `draft`/`confirmed`, por eso queda como String plano.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: i32,
    pub solution_json: JsonValue,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRouteRequest {
    #[serde(default = "empty_solution")]
    pub solution_json: JsonValue,
    pub status: Option<String>,
}

/// Update parcial: los campos ausentes conservan el valor de la fila actual.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRouteRequest {
    pub solution_json: Option<JsonValue>,
    pub status: Option<String>,
}

fn empty_solution() -> JsonValue {
    JsonValue::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_to_empty_solution() {
        let req: CreateRouteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.solution_json, serde_json::json!({}));
        assert!(req.status.is_none());
    }

    #[test]
    fn update_request_keeps_absent_fields_as_none() {
        let req: UpdateRouteRequest =
            serde_json::from_str(r#"{"status": "confirmed"}"#).unwrap();
        assert!(req.solution_json.is_none());
        assert_eq!(req.status.as_deref(), Some(ROUTE_STATUS_CONFIRMED));
    }
}
