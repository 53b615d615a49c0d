//! Publisher de eventos sobre Redis Streams
//!
//! Cada tópico es un stream. Aprovisionamiento: `XGROUP CREATE ... MKSTREAM`
//! crea stream y grupo de consumo del worker en un paso; `BUSYGROUP` de una
//! creación concurrente cuenta como éxito. La publicación (`XADD`) es síncrona
//! y devuelve el id de entrada asignado por el broker.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use redis::{aio::ConnectionManager, AsyncCommands};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{PublishOperations, RouteEvent};

/// Grupo de consumo que el worker de optimización usa para leer el stream.
const CONSUMER_GROUP: &str = "optimizer";

/// Cliente de publicación con connection manager compartido. Clonable y
/// seguro para uso concurrente; el único estado propio es la caché de tópicos
/// ya aprovisionados, que es seguro repetir.
#[derive(Clone)]
pub struct EventPublisher {
    manager: ConnectionManager,
    ensured_topics: Arc<RwLock<HashSet<String>>>,
}

impl EventPublisher {
    /// Conectar al broker y verificar la conexión con un PING.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        info!("conectando al broker de eventos: {}", redis_url);

        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        Ok(Self {
            manager,
            ensured_topics: Arc::new(RwLock::new(HashSet::new())),
        })
    }

    /// Garantizar que el tópico existe. La caché evita repetir el XGROUP en
    /// cada publicación; repetirlo sería igualmente correcto.
    async fn ensure_topic(&self, topic: &str) -> Result<()> {
        {
            let ensured = self.ensured_topics.read().await;
            if ensured.contains(topic) {
                return Ok(());
            }
        }

        let mut conn = self.manager.clone();
        let created: redis::RedisResult<()> =
            conn.xgroup_create_mkstream(topic, CONSUMER_GROUP, "$").await;

        match created {
            Ok(()) => debug!("tópico {} aprovisionado", topic),
            // Otro publisher lo creó primero
            Err(e) if e.to_string().contains("BUSYGROUP") => {
                debug!("tópico {} ya existía", topic)
            }
            Err(e) => return Err(anyhow!("failed to create topic {}: {}", topic, e)),
        }

        self.ensured_topics.write().await.insert(topic.to_string());
        Ok(())
    }

    /// Publicar un payload JSON en el tópico y esperar la confirmación del
    /// broker. Devuelve el id de mensaje asignado.
    pub async fn publish<T: Serialize>(&self, topic: &str, payload: &T) -> Result<String> {
        self.ensure_topic(topic).await?;

        let body = serde_json::to_string(payload)
            .map_err(|e| anyhow!("failed to serialize event payload: {}", e))?;

        let mut conn = self.manager.clone();
        let message_id: String = conn
            .xadd(topic, "*", &[("payload", body.as_str())])
            .await
            .map_err(|e| anyhow!("failed to publish message to {}: {}", topic, e))?;

        info!("evento publicado en {}: id={}", topic, message_id);
        Ok(message_id)
    }
}

#[async_trait::async_trait]
impl PublishOperations for EventPublisher {
    async fn publish(&self, topic: &str, event: &RouteEvent) -> Result<String> {
        EventPublisher::publish(self, topic, event).await
    }
}
