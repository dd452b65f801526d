//! Núcleo de inventario de asientos y ledger de reservas
//!
//! El crate expone dos servicios: el [`services::VehicleRegistry`], dueño
//! del catálogo y del conteo de asientos, y el [`services::BookingLedger`],
//! que coordina reservas y cancelaciones contra el registry. La capa de
//! presentación (GUI, CLI o HTTP) es un colaborador externo que consume
//! esta API a través de [`AppState`].

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
