use sqlx::PgPool;

use crate::models::customer::{CreateCustomerRequest, Customer};
use crate::utils::errors::AppError;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, lat, lon, demand, time_windows, service_duration)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(request.lat)
        .bind(request.lon)
        .bind(request.demand)
        .bind(&request.time_windows)
        .bind(request.service_duration)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(customers)
    }
}
