//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum: el pool de
//! PostgreSQL, la configuración y el handle del publisher de eventos. El
//! publisher entra como trait object para poder sustituirlo en tests, y es
//! opcional: si el broker no estaba disponible al arranque el servicio sigue
//! operando sin notificaciones.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::events::PublishOperations;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub publisher: Option<Arc<dyn PublishOperations>>,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: EnvironmentConfig,
        publisher: Option<Arc<dyn PublishOperations>>,
    ) -> Self {
        Self {
            pool,
            config,
            publisher,
        }
    }
}
