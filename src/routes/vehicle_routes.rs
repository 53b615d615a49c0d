//! Endpoints de vehículos

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use super::parse_id;
use crate::models::vehicle::{Vehicle, VehiclePayload};
use crate::repositories::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", get(get_vehicle).put(update_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<VehiclePayload>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    payload.validate()?;
    let vehicle = VehicleRepository::new(state.pool.clone())
        .create(&payload)
        .await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = VehicleRepository::new(state.pool.clone()).list().await?;
    Ok(Json(vehicles))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vehicle>> {
    let id = parse_id(&id)?;
    let vehicle = VehicleRepository::new(state.pool.clone()).get(id).await?;
    Ok(Json(vehicle))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<VehiclePayload>,
) -> AppResult<Json<Vehicle>> {
    let id = parse_id(&id)?;
    payload.validate()?;
    let vehicle = VehicleRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?;
    Ok(Json(vehicle))
}
