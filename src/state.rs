//! Shared application state
//!
//! Este módulo define el par registry/ledger que se construye una vez y
//! se inyecta en la capa de presentación. No hay estado global ambiente:
//! todo acceso pasa por este struct.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::booking_service::BookingLedger;
use crate::services::vehicle_service::VehicleRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub registry: Arc<VehicleRegistry>,
    pub ledger: Arc<BookingLedger>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let registry = Arc::new(VehicleRegistry::new());
        let ledger = Arc::new(BookingLedger::new(registry.clone()));
        Self {
            config,
            registry,
            ledger,
        }
    }
}
