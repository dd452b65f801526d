//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para las
//! operaciones del registry. El único campo mutable es `booked_count`;
//! el resto del catálogo es inmutable después de la creación.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_not_empty, validate_price};

/// Vehicle principal del catálogo
///
/// Invariante: `0 <= booked_count <= capacity` en todo momento observable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: u32,
    pub has_climate_control: bool,
    pub capacity: u32,
    pub origin: String,
    pub destination: String,
    pub booked_count: u32,
    pub price_per_seat: Decimal,
    pub safety_rating: u8,
    /// Referencia opaca a la imagen; la resuelve el colaborador de display
    pub image_reference: String,
}

impl Vehicle {
    /// Asientos disponibles derivados del invariante de capacidad
    pub fn available_seats(&self) -> u32 {
        self.capacity - self.booked_count
    }
}

/// Request para registrar un nuevo vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub id: u32,

    pub has_climate_control: bool,

    #[validate(range(min = 1))]
    pub capacity: u32,

    #[validate(custom = "validate_not_empty")]
    pub origin: String,

    #[validate(custom = "validate_not_empty")]
    pub destination: String,

    #[validate(custom = "validate_price")]
    pub price_per_seat: Decimal,

    #[validate(range(min = 1, max = 5))]
    pub safety_rating: u8,

    pub image_reference: String,
}

/// Response de vehículo para listados - incluye disponibilidad calculada
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: u32,
    pub has_climate_control: bool,
    pub origin: String,
    pub destination: String,
    pub capacity: u32,
    pub available_seats: u32,
    pub price_per_seat: String,
    pub safety_rating: u8,
    pub image_reference: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            has_climate_control: vehicle.has_climate_control,
            available_seats: vehicle.available_seats(),
            origin: vehicle.origin,
            destination: vehicle.destination,
            capacity: vehicle.capacity,
            price_per_seat: vehicle.price_per_seat.to_string(),
            safety_rating: vehicle.safety_rating,
            image_reference: vehicle.image_reference,
        }
    }
}
