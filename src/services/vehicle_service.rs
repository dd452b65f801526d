//! Servicio de registro de vehículos
//!
//! El registry es el dueño del catálogo y la única autoridad que muta
//! `booked_count`. Todas las operaciones de asientos se serializan bajo
//! el write lock del catálogo, así dos reservas concurrentes sobre el
//! mismo vehículo nunca exceden la capacidad.

use std::collections::HashMap;

use tokio::sync::RwLock;
use validator::Validate;

use crate::models::vehicle::{CreateVehicleRequest, Vehicle};
use crate::utils::errors::{
    duplicate_error, invalid_argument_error, not_found_error, AppResult,
};

/// Catálogo interno: mapa por id más el orden de inserción para listados estables
#[derive(Default)]
struct VehicleCatalog {
    by_id: HashMap<u32, Vehicle>,
    insertion_order: Vec<u32>,
}

/// Registro de vehículos con conteo de asientos reservados
pub struct VehicleRegistry {
    catalog: RwLock<VehicleCatalog>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(VehicleCatalog::default()),
        }
    }

    /// Registrar un nuevo vehículo en el catálogo
    ///
    /// El vehículo empieza con `booked_count = 0`. Falla con `DuplicateId`
    /// si el id ya existe y con `Validation` si el request es inválido.
    pub async fn add_vehicle(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        let mut catalog = self.catalog.write().await;
        if catalog.by_id.contains_key(&request.id) {
            return Err(duplicate_error("Vehicle", request.id));
        }

        let vehicle = Vehicle {
            id: request.id,
            has_climate_control: request.has_climate_control,
            capacity: request.capacity,
            origin: request.origin.trim().to_string(),
            destination: request.destination.trim().to_string(),
            booked_count: 0,
            price_per_seat: request.price_per_seat,
            safety_rating: request.safety_rating,
            image_reference: request.image_reference,
        };

        catalog.insertion_order.push(vehicle.id);
        catalog.by_id.insert(vehicle.id, vehicle.clone());

        log::info!(
            "✅ Vehículo {} registrado: {} -> {}, {} asientos",
            vehicle.id,
            vehicle.origin,
            vehicle.destination,
            vehicle.capacity
        );

        Ok(vehicle)
    }

    /// Intentar reservar asientos de forma atómica
    ///
    /// Devuelve `Ok(true)` si la reserva cupo y el conteo fue incrementado,
    /// `Ok(false)` si excedería la capacidad (sin mutar nada). El par
    /// check-and-increment ocurre bajo el write lock, indivisible para
    /// llamadores concurrentes.
    pub async fn try_reserve_seats(&self, id: u32, seats: u32) -> AppResult<bool> {
        if seats == 0 {
            return Err(invalid_argument_error("seats must be greater than zero"));
        }

        let mut catalog = self.catalog.write().await;
        let vehicle = catalog
            .by_id
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        let fits = vehicle
            .booked_count
            .checked_add(seats)
            .map_or(false, |total| total <= vehicle.capacity);

        if fits {
            vehicle.booked_count += seats;
            log::info!(
                "✅ {} asientos reservados en vehículo {} ({} disponibles)",
                seats,
                id,
                vehicle.available_seats()
            );
            Ok(true)
        } else {
            log::warn!(
                "❌ Reserva de {} asientos rechazada en vehículo {} ({} disponibles)",
                seats,
                id,
                vehicle.available_seats()
            );
            Ok(false)
        }
    }

    /// Liberar asientos reservados
    ///
    /// El decremento se recorta en cero: liberar más asientos de los
    /// reservados se tolera y nunca deja el conteo negativo.
    pub async fn release_seats(&self, id: u32, seats: u32) -> AppResult<()> {
        let mut catalog = self.catalog.write().await;
        let vehicle = catalog
            .by_id
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        vehicle.booked_count = vehicle.booked_count.saturating_sub(seats);
        log::info!(
            "✅ {} asientos liberados en vehículo {} ({} disponibles)",
            seats,
            id,
            vehicle.available_seats()
        );
        Ok(())
    }

    /// Obtener un vehículo por id
    pub async fn get(&self, id: u32) -> AppResult<Vehicle> {
        let catalog = self.catalog.read().await;
        catalog
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    /// Listar el catálogo en orden de inserción
    pub async fn list(&self) -> Vec<Vehicle> {
        let catalog = self.catalog.read().await;
        catalog
            .insertion_order
            .iter()
            .filter_map(|id| catalog.by_id.get(id))
            .cloned()
            .collect()
    }

    /// Asientos disponibles de un vehículo
    pub async fn available_seats(&self, id: u32) -> AppResult<u32> {
        Ok(self.get(id).await?.available_seats())
    }
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use rust_decimal::Decimal;

    fn demo_request(id: u32) -> CreateVehicleRequest {
        CreateVehicleRequest {
            id,
            has_climate_control: true,
            capacity: 40,
            origin: "Delhi".to_string(),
            destination: "Jaipur".to_string(),
            price_per_seat: Decimal::from(450),
            safety_rating: 5,
            image_reference: "images/bus1.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_vehicle_starts_with_zero_booked() {
        let registry = VehicleRegistry::new();
        let vehicle = registry.add_vehicle(demo_request(101)).await.unwrap();

        assert_eq!(vehicle.booked_count, 0);
        assert_eq!(vehicle.available_seats(), 40);
        assert_eq!(registry.available_seats(101).await.unwrap(), 40);
    }

    #[tokio::test]
    async fn test_add_vehicle_duplicate_id() {
        let registry = VehicleRegistry::new();
        registry.add_vehicle(demo_request(101)).await.unwrap();

        let result = registry.add_vehicle(demo_request(101)).await;
        assert!(matches!(result, Err(AppError::DuplicateId(_))));

        // el catálogo sigue con exactamente un vehículo con ese id
        assert_eq!(registry.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_add_vehicle_rejects_invalid_input() {
        let registry = VehicleRegistry::new();

        let mut request = demo_request(101);
        request.capacity = 0;
        assert!(matches!(
            registry.add_vehicle(request).await,
            Err(AppError::Validation(_))
        ));

        let mut request = demo_request(102);
        request.safety_rating = 6;
        assert!(matches!(
            registry.add_vehicle(request).await,
            Err(AppError::Validation(_))
        ));

        let mut request = demo_request(103);
        request.origin = "   ".to_string();
        assert!(matches!(
            registry.add_vehicle(request).await,
            Err(AppError::Validation(_))
        ));

        let mut request = demo_request(104);
        request.price_per_seat = Decimal::from(-50);
        assert!(matches!(
            registry.add_vehicle(request).await,
            Err(AppError::Validation(_))
        ));

        assert!(registry.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_reserve_until_full_then_reject() {
        let registry = VehicleRegistry::new();
        registry.add_vehicle(demo_request(101)).await.unwrap();

        assert!(registry.try_reserve_seats(101, 40).await.unwrap());
        assert_eq!(registry.available_seats(101).await.unwrap(), 0);

        // un asiento más no cabe y no debe mutar nada
        assert!(!registry.try_reserve_seats(101, 1).await.unwrap());
        assert_eq!(registry.get(101).await.unwrap().booked_count, 40);
    }

    #[tokio::test]
    async fn test_reserve_zero_seats_is_invalid() {
        let registry = VehicleRegistry::new();
        registry.add_vehicle(demo_request(101)).await.unwrap();

        let result = registry.try_reserve_seats(101, 0).await;
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
        assert_eq!(registry.get(101).await.unwrap().booked_count, 0);
    }

    #[tokio::test]
    async fn test_reserve_unknown_vehicle() {
        let registry = VehicleRegistry::new();
        let result = registry.try_reserve_seats(999, 2).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_release_clamps_at_zero() {
        let registry = VehicleRegistry::new();
        registry.add_vehicle(demo_request(101)).await.unwrap();
        registry.try_reserve_seats(101, 5).await.unwrap();

        // liberar más de lo reservado recorta en cero, nunca negativo
        registry.release_seats(101, 10).await.unwrap();
        assert_eq!(registry.get(101).await.unwrap().booked_count, 0);
        assert_eq!(registry.available_seats(101).await.unwrap(), 40);
    }

    #[tokio::test]
    async fn test_release_unknown_vehicle() {
        let registry = VehicleRegistry::new();
        let result = registry.release_seats(999, 1).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let registry = VehicleRegistry::new();
        for id in [104, 101, 103] {
            registry.add_vehicle(demo_request(id)).await.unwrap();
        }

        let ids: Vec<u32> = registry.list().await.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![104, 101, 103]);
    }
}
