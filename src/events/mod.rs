//! Eventos hacia el worker de optimización
//!
//! La API solo publica; el consumo corre del lado del worker externo. Todos
//! los disparadores escriben al mismo tópico con un payload `RouteEvent`
//! cuyos campos ausentes se omiten del JSON.

pub mod publisher;

pub use publisher::EventPublisher;

use anyhow::Result;
use serde::Serialize;

pub const ACTION_REPROCESS: &str = "reprocess";

/// Operaciones de publicación. `EventPublisher` las implementa sobre Redis
/// Streams; los tests las implementan con un grabador en memoria para poder
/// observar qué se publica sin broker.
#[async_trait::async_trait]
pub trait PublishOperations: Send + Sync {
    /// Publicar el evento en el tópico; devuelve el id asignado por el broker.
    async fn publish(&self, topic: &str, event: &RouteEvent) -> Result<String>;
}

/// Payload de evento de ruta: `{route_id?, status?, action?}`. Solo se
/// serializa: este servicio publica, nunca consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl RouteEvent {
    /// Una ruta pasó a estado `confirmed`.
    pub fn route_confirmed(route_id: i32) -> Self {
        Self {
            route_id: Some(route_id),
            status: Some(crate::models::route::ROUTE_STATUS_CONFIRMED.to_string()),
            action: None,
        }
    }

    /// Pedir re-optimización de una ruta concreta.
    pub fn reprocess_route(route_id: i32) -> Self {
        Self {
            route_id: Some(route_id),
            status: None,
            action: Some(ACTION_REPROCESS.to_string()),
        }
    }

    /// Pedir optimización global: sin route_id significa "todos los pedidos
    /// pendientes".
    pub fn reprocess_all() -> Self {
        Self {
            route_id: None,
            status: None,
            action: Some(ACTION_REPROCESS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn confirmed_event_serializes_route_id_and_status_only() {
        let event = RouteEvent::route_confirmed(7);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"route_id": 7, "status": "confirmed"}));
    }

    #[test]
    fn reprocess_route_event_carries_route_id_and_action() {
        let event = RouteEvent::reprocess_route(3);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"route_id": 3, "action": "reprocess"}));
    }

    #[test]
    fn global_reprocess_event_has_action_only() {
        let event = RouteEvent::reprocess_all();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"action": "reprocess"}));
    }
}
