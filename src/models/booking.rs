//! Modelo de Booking
//!
//! Registros del ledger de reservas. `total_cost` es un snapshot del
//! precio al momento de confirmar, no se recalcula después.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_empty;

/// Registro de una reserva confirmada
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    pub passenger_name: String,
    pub vehicle_id: u32,
    pub seats_booked: u32,
    pub total_cost: Decimal,
    pub booked_at: DateTime<Utc>,
}

/// Request para reservar asientos
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(custom = "validate_not_empty")]
    pub passenger_name: String,

    pub vehicle_id: u32,

    #[validate(range(min = 1))]
    pub seats: u32,
}
