//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el
//! registro de vehículos y el ledger de reservas que coordina las
//! mutaciones de asientos a través del registry.

pub mod booking_service;
pub mod vehicle_service;

pub use booking_service::*;
pub use vehicle_service::*;
