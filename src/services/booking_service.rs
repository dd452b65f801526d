//! Servicio de ledger de reservas
//!
//! El ledger coordina las transacciones de reserva y cancelación y
//! mantiene el historial. Nunca muta `booked_count` directamente: toda
//! mutación de asientos pasa por el registry.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use validator::Validate;

use crate::models::booking::{BookingRecord, BookingRequest};
use crate::services::vehicle_service::VehicleRegistry;
use crate::utils::errors::{capacity_error, AppResult};

/// Ledger de reservas contra el registro de vehículos
pub struct BookingLedger {
    registry: Arc<VehicleRegistry>,
    bookings: RwLock<Vec<BookingRecord>>,
}

impl BookingLedger {
    pub fn new(registry: Arc<VehicleRegistry>) -> Self {
        Self {
            registry,
            bookings: RwLock::new(Vec::new()),
        }
    }

    /// Reservar asientos y registrar la transacción
    ///
    /// Operación en dos fases: reservar en el registry y luego anotar el
    /// registro. El append a la lista no puede fallar, así que una reserva
    /// exitosa siempre queda registrada. Si la capacidad no alcanza no se
    /// muta nada y se reporta `CapacityExceeded`.
    pub async fn book(&self, request: BookingRequest) -> AppResult<BookingRecord> {
        request.validate()?;

        // NotFound se reporta aquí, antes de tocar conteos
        let vehicle = self.registry.get(request.vehicle_id).await?;

        if !self
            .registry
            .try_reserve_seats(request.vehicle_id, request.seats)
            .await?
        {
            return Err(capacity_error(request.vehicle_id, request.seats));
        }

        // snapshot del precio al confirmar; el precio es inmutable, cambios
        // posteriores no alteran reservas pasadas
        let total_cost = Decimal::from(request.seats) * vehicle.price_per_seat;
        let record = BookingRecord {
            passenger_name: request.passenger_name.trim().to_string(),
            vehicle_id: request.vehicle_id,
            seats_booked: request.seats,
            total_cost,
            booked_at: Utc::now(),
        };

        self.bookings.write().await.push(record.clone());

        log::info!(
            "✅ Reserva confirmada para {}: {} asientos en vehículo {}, total {}",
            record.passenger_name,
            record.seats_booked,
            record.vehicle_id,
            record.total_cost
        );

        Ok(record)
    }

    /// Cancelar una reserva por (vehículo, asientos)
    ///
    /// Los asientos se liberan siempre; después se elimina el primer
    /// registro cuyo `(vehicle_id, seats_booked)` coincida. El modelo no
    /// tiene id de reserva, así que el match es best-effort: el booleano
    /// informa si se eliminó algún registro.
    pub async fn cancel(&self, vehicle_id: u32, seats: u32) -> AppResult<bool> {
        self.registry.release_seats(vehicle_id, seats).await?;

        let mut bookings = self.bookings.write().await;
        let matched = bookings
            .iter()
            .position(|b| b.vehicle_id == vehicle_id && b.seats_booked == seats);

        match matched {
            Some(index) => {
                let record = bookings.remove(index);
                log::info!(
                    "✅ Reserva cancelada para {}: {} asientos en vehículo {}",
                    record.passenger_name,
                    record.seats_booked,
                    record.vehicle_id
                );
                Ok(true)
            }
            None => {
                log::warn!(
                    "⚠️ Cancelación en vehículo {} sin registro que coincida con {} asientos",
                    vehicle_id,
                    seats
                );
                Ok(false)
            }
        }
    }

    /// Historial de reservas en orden de inserción
    pub async fn list_bookings(&self) -> Vec<BookingRecord> {
        self.bookings.read().await.clone()
    }
}
