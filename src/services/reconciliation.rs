//! Reconciliación pedido-ruta
//!
//! Cada update de ruta re-sincroniza los pedidos con los `order_id` que
//! nombra el documento de solución. El documento es del worker y puede traer
//! campos extra (distancias, ETAs, metadatos de vehículo); aquí solo se mira
//! la forma `{vehicles: [{route: [{order_id}, ...]}, ...]}`. Un documento que
//! no encaje en esa forma no es un error: la reconciliación se omite y el
//! update de ruta sigue valiendo.
//!
//! Limitación documentada: la fila de ruta y la reasignación de pedidos van
//! en dos transacciones separadas. Si la reasignación falla, la ruta ya quedó
//! persistida; el fallo se reporta al caller sin deshacer la ruta.

use serde_json::Value as JsonValue;
use sqlx::PgPool;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::repositories::OrderRepository;
use crate::utils::errors::AppError;

pub struct ReconciliationService {
    orders: OrderRepository,
}

impl ReconciliationService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Sincronizar los pedidos de `route_id` con el documento de solución.
    /// Documento ininterpretable → skip con warning, no error.
    pub async fn reconcile(&self, route_id: i32, solution: &JsonValue) -> Result<(), AppError> {
        let Some(order_ids) = extract_order_ids(solution) else {
            warn!(
                "documento de solución de la ruta {} sin clave 'vehicles' interpretable; \
                 se omite la sincronización de pedidos",
                route_id
            );
            return Ok(());
        };

        debug!(
            "reconciliando ruta {}: {} pedidos en el documento",
            route_id,
            order_ids.len()
        );
        self.orders.reassign_to_route(route_id, &order_ids).await
    }
}

/// Extraer los `order_id` del documento de solución. Devuelve `None` si el
/// documento no tiene un array `vehicles` (forma no interpretable); devuelve
/// `Some(vec![])` si lo tiene pero no nombra ningún pedido, lo que desasigna
/// todos los pedidos de la ruta. Se descartan duplicados y los ids cero,
/// negativos, ausentes o fuera del rango de i32, conservando el orden de
/// primera aparición.
pub fn extract_order_ids(solution: &JsonValue) -> Option<Vec<i32>> {
    let vehicles = solution.get("vehicles")?.as_array()?;

    let mut seen = HashSet::new();
    let mut order_ids = Vec::new();

    for vehicle in vehicles {
        let Some(steps) = vehicle.get("route").and_then(JsonValue::as_array) else {
            continue;
        };
        for step in steps {
            let Some(id) = step.get("order_id").and_then(JsonValue::as_i64) else {
                continue;
            };
            // Un id que no cabe en i32 no puede referir a una fila SERIAL;
            // truncarlo reasignaría un pedido ajeno
            let Ok(id) = i32::try_from(id) else {
                continue;
            };
            if id > 0 && seen.insert(id) {
                order_ids.push(id);
            }
        }
    }

    Some(order_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_ids_across_vehicles() {
        let solution = json!({
            "vehicles": [
                {"route": [{"order_id": 5}, {"order_id": 7}]},
                {"route": [{"order_id": 9}]}
            ]
        });
        assert_eq!(extract_order_ids(&solution), Some(vec![5, 7, 9]));
    }

    #[test]
    fn ignores_worker_specific_fields() {
        let solution = json!({
            "total_distance": 1234.5,
            "vehicles": [{
                "vehicle_id": 2,
                "capacity_used": 8,
                "route": [
                    {"order_id": 3, "eta": "08:15", "distance": 4.2},
                    {"location": [1.0, 2.0]}
                ]
            }]
        });
        assert_eq!(extract_order_ids(&solution), Some(vec![3]));
    }

    #[test]
    fn drops_duplicates_and_zero_ids() {
        let solution = json!({
            "vehicles": [
                {"route": [{"order_id": 4}, {"order_id": 0}, {"order_id": 4}]},
                {"route": [{"order_id": 6}, {"order_id": 4}]}
            ]
        });
        assert_eq!(extract_order_ids(&solution), Some(vec![4, 6]));
    }

    #[test]
    fn drops_ids_that_do_not_fit_in_i32() {
        // 2^32 + 1 truncado a i32 daría 1: debe descartarse, no plegarse
        // sobre un id existente
        let solution = json!({
            "vehicles": [{"route": [
                {"order_id": 4294967297i64},
                {"order_id": i64::from(i32::MAX) + 1},
                {"order_id": -4294967295i64},
                {"order_id": 8}
            ]}]
        });
        assert_eq!(extract_order_ids(&solution), Some(vec![8]));
    }

    #[test]
    fn missing_vehicles_key_is_not_interpretable() {
        assert_eq!(extract_order_ids(&json!({"routes": []})), None);
        assert_eq!(extract_order_ids(&json!({})), None);
        assert_eq!(extract_order_ids(&json!(null)), None);
        assert_eq!(extract_order_ids(&json!("texto")), None);
    }

    #[test]
    fn non_array_vehicles_is_not_interpretable() {
        assert_eq!(extract_order_ids(&json!({"vehicles": {"route": []}})), None);
    }

    #[test]
    fn empty_vehicles_yields_empty_assignment() {
        // Caso distinto al malformado: desasigna todos los pedidos
        assert_eq!(extract_order_ids(&json!({"vehicles": []})), Some(vec![]));
    }

    #[test]
    fn vehicle_without_route_array_is_skipped() {
        let solution = json!({
            "vehicles": [
                {"idle": true},
                {"route": [{"order_id": 11}]}
            ]
        });
        assert_eq!(extract_order_ids(&solution), Some(vec![11]));
    }
}
