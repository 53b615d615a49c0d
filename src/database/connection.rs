//! Conexión a PostgreSQL
//!
//! El arranque reintenta la conexión de forma acotada (el contenedor de
//! postgres suele tardar más que el servicio en estar listo); es el único
//! punto del sistema con retry automático.

use std::time::Duration;

use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use tracing::{info, warn};

const CONNECT_ATTEMPTS: u32 = 10;
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);
const MAX_POOL_CONNECTIONS: u32 = 10;

/// Crear el pool de conexiones, reintentando hasta diez veces cada dos
/// segundos antes de rendirse.
pub async fn connect_with_retries(database_url: &str) -> Result<PgPool> {
    let mut attempt = 1;
    loop {
        match PgPoolOptions::new()
            .max_connections(MAX_POOL_CONNECTIONS)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("conexión a PostgreSQL establecida");
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(
                    "fallo de conexión a la base de datos (intento {}/{}): {}",
                    attempt, CONNECT_ATTEMPTS, e
                );
                attempt += 1;
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Aplicar el schema estático. Las sentencias son idempotentes
/// (CREATE ... IF NOT EXISTS); el caller decide si un fallo es fatal.
pub async fn init_schema(pool: &PgPool, schema_path: &str) -> Result<()> {
    let sql = tokio::fs::read_to_string(schema_path).await?;
    // Ejecución multi-sentencia via protocolo simple
    pool.execute(sql.as_str()).await?;
    info!("schema aplicado desde {}", schema_path);
    Ok(())
}
