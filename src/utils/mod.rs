//! Utilidades transversales

pub mod errors;
