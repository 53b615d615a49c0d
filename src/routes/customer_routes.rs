//! Endpoints de clientes

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use validator::Validate;

use crate::models::customer::{CreateCustomerRequest, Customer};
use crate::repositories::CustomerRepository;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_customer_router() -> Router<AppState> {
    Router::new().route("/", get(list_customers).post(create_customer))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    request.validate()?;
    let customer = CustomerRepository::new(state.pool.clone())
        .create(&request)
        .await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(state.pool.clone()).list().await?;
    Ok(Json(customers))
}
