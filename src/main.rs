use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use tracing::info;

use bus_booking::config::environment::EnvironmentConfig;
use bus_booking::models::vehicle::{CreateVehicleRequest, VehicleResponse};
use bus_booking::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Bus Booking System - inventario de asientos");
    info!("==============================================");

    let config = EnvironmentConfig::default();
    info!("🔧 Entorno: {}", config.environment);

    let state = AppState::new(config);

    if state.config.seed_demo_fleet {
        seed_demo_fleet(&state).await?;
    }

    info!("🚍 Catálogo inicial:");
    for vehicle in state.registry.list().await {
        let response = VehicleResponse::from(vehicle);
        info!("   {}", serde_json::to_string(&response)?);
    }

    info!("✅ Registry y ledger listos para el colaborador de presentación");
    Ok(())
}

/// Flota de demostración registrada a través de la API pública
async fn seed_demo_fleet(state: &AppState) -> Result<()> {
    let fleet = vec![
        CreateVehicleRequest {
            id: 101,
            has_climate_control: true,
            capacity: 40,
            origin: "Delhi".to_string(),
            destination: "Jaipur".to_string(),
            price_per_seat: Decimal::from(450),
            safety_rating: 5,
            image_reference: "images/bus1.jpg".to_string(),
        },
        CreateVehicleRequest {
            id: 102,
            has_climate_control: false,
            capacity: 35,
            origin: "Delhi".to_string(),
            destination: "Agra".to_string(),
            price_per_seat: Decimal::from(350),
            safety_rating: 4,
            image_reference: "images/bus2.jpg".to_string(),
        },
        CreateVehicleRequest {
            id: 103,
            has_climate_control: true,
            capacity: 45,
            origin: "Jaipur".to_string(),
            destination: "Udaipur".to_string(),
            price_per_seat: Decimal::from(500),
            safety_rating: 3,
            image_reference: "images/bus3.jpg".to_string(),
        },
        CreateVehicleRequest {
            id: 104,
            has_climate_control: true,
            capacity: 35,
            origin: "Delhi".to_string(),
            destination: "Manali".to_string(),
            price_per_seat: Decimal::from(1000),
            safety_rating: 5,
            image_reference: "images/bus4.jpg".to_string(),
        },
    ];

    for request in fleet {
        state.registry.add_vehicle(request).await?;
    }

    Ok(())
}
