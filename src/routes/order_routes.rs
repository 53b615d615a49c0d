//! Endpoints de pedidos

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::models::order::{CreateOrderRequest, Order, OrderFilters};
use crate::repositories::OrderRepository;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/batch", post(create_order_batch))
}

async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    request.validate()?;
    let order = OrderRepository::new(state.pool.clone())
        .create(&request)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Alta en lote, todo-o-nada. Lote vacío se rechaza antes de tocar la base.
async fn create_order_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CreateOrderRequest>>,
) -> AppResult<(StatusCode, Json<Vec<Order>>)> {
    if requests.is_empty() {
        return Err(AppError::BadRequest("empty batch".to_string()));
    }
    for request in &requests {
        request.validate()?;
    }

    let orders = OrderRepository::new(state.pool.clone())
        .create_batch(&requests)
        .await?;
    Ok((StatusCode::CREATED, Json(orders)))
}

async fn list_orders(
    State(state): State<AppState>,
    Query(filters): Query<OrderFilters>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool.clone())
        .list(&filters)
        .await?;
    Ok(Json(orders))
}
