//! Persistence gateway
//!
//! Un repositorio por entidad sobre el pool compartido. Los repositorios no
//! reintentan: todo fallo sube al caller como `AppError::Database`.

pub mod customer_repository;
pub mod order_repository;
pub mod route_repository;
pub mod vehicle_repository;

pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use route_repository::RouteRepository;
pub use vehicle_repository::VehicleRepository;
