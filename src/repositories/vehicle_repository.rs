use sqlx::PgPool;

use crate::models::vehicle::{Vehicle, VehiclePayload};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &VehiclePayload) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (name, capacity, start_lat, start_lon)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(payload.capacity)
        .bind(payload.start_lat)
        .bind(payload.start_lon)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn get(&self, id: i32) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Reemplazo completo de la fila (PUT).
    pub async fn update(&self, id: i32, payload: &VehiclePayload) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, capacity = $3, start_lat = $4, start_lon = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(payload.capacity)
        .bind(payload.start_lat)
        .bind(payload.start_lon)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
