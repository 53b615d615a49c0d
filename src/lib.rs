//! Back-office logístico: CRUD de vehículos, clientes, pedidos y rutas,
//! reconciliación pedido-ruta y publicación de eventos hacia el worker de
//! optimización externo.

pub mod config;
pub mod database;
pub mod events;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
