//! Routers HTTP
//!
//! Capa fina de marshaling request/response: parseo de ids y payloads,
//! mapeo a status codes. La lógica vive en repositorios y servicios.

pub mod customer_routes;
pub mod order_routes;
pub mod route_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo de la API bajo `/api`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/orders", order_routes::create_order_router())
        .nest("/api/routes", route_routes::create_route_router())
}

/// Parseo manual del id de path para que un id malformado responda 400 con
/// el body `{"error": ...}` del contrato, no el rechazo plano de axum.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest("invalid id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_garbage_zero_and_negatives() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("").is_err());
    }
}
