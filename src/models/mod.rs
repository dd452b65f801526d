//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del catálogo de
//! vehículos y del ledger de reservas.

pub mod booking;
pub mod vehicle;

pub use booking::*;
pub use vehicle::*;
