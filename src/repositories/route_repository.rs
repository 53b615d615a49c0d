use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::models::route::Route;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, solution: &JsonValue, status: &str) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (solution_json, status)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(solution)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn get(&self, id: i32) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(route)
    }

    /// Solo las 10 rutas más recientes; el histórico completo no se expone.
    pub async fn list(&self) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes ORDER BY created_at DESC LIMIT 10",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn update(
        &self,
        id: i32,
        solution: &JsonValue,
        status: &str,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            UPDATE routes
            SET solution_json = $2, status = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(solution)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }
}
