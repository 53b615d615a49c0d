use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::order::{CreateOrderRequest, Order, OrderFilters, ORDER_STATUS_PENDING};
use crate::utils::errors::AppError;

const ORDER_COLUMNS: &str = "id, customer_id, customer_name, lat, lon, demand, time_windows, \
                             service_duration, status, route_id, created_at";

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un pedido; el estado siempre nace en `pending`.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders
                (customer_id, customer_name, lat, lon, demand, time_windows, service_duration, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(request.customer_id)
        .bind(&request.customer_name)
        .bind(request.lat)
        .bind(request.lon)
        .bind(request.demand)
        .bind(&request.time_windows)
        .bind(request.service_duration)
        .bind(ORDER_STATUS_PENDING)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    /// Alta en lote como unidad atómica: si un insert falla, no se persiste
    /// ninguna fila.
    pub async fn create_batch(
        &self,
        requests: &[CreateOrderRequest],
    ) -> Result<Vec<Order>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(requests.len());

        for request in requests {
            let order = sqlx::query_as::<_, Order>(
                r#"
                INSERT INTO orders
                    (customer_id, customer_name, lat, lon, demand, time_windows, service_duration, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
                "#,
            )
            .bind(request.customer_id)
            .bind(&request.customer_name)
            .bind(request.lat)
            .bind(request.lon)
            .bind(request.demand)
            .bind(&request.time_windows)
            .bind(request.service_duration)
            .bind(ORDER_STATUS_PENDING)
            .fetch_one(&mut *tx)
            .await?;
            created.push(order);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Listado con filtros opcionales: `status` vacío y `route_id` cero
    /// equivalen a "sin filtro". Siempre ordenado del más reciente al más
    /// antiguo.
    pub async fn list(&self, filters: &OrderFilters) -> Result<Vec<Order>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM orders WHERE 1=1",
            ORDER_COLUMNS
        ));

        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND status = ").push_bind(status);
        }
        if let Some(route_id) = filters.route_id.filter(|id| *id != 0) {
            query.push(" AND route_id = ").push_bind(route_id);
        }
        query.push(" ORDER BY created_at DESC");

        let orders = query
            .build_query_as::<Order>()
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    /// Reasignación transaccional de pedidos a una ruta: primero se
    /// desasignan todos los pedidos de la ruta (vuelven a `pending`/NULL),
    /// después se asignan exactamente los ids recibidos. Todo o nada; la
    /// operación es idempotente para una misma lista de ids.
    pub async fn reassign_to_route(
        &self,
        route_id: i32,
        order_ids: &[i32],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE orders SET status = 'pending', route_id = NULL WHERE route_id = $1")
            .bind(route_id)
            .execute(&mut *tx)
            .await?;

        if !order_ids.is_empty() {
            sqlx::query("UPDATE orders SET status = 'routed', route_id = $1 WHERE id = ANY($2)")
                .bind(route_id)
                .bind(order_ids)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
