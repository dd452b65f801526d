//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema.
//! Cada operación del registry y del ledger reporta su fallo como un
//! valor tipado; la capa de presentación decide cómo mostrarlo.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: u32) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de id duplicado
pub fn duplicate_error(resource: &str, id: u32) -> AppError {
    AppError::DuplicateId(format!("{} with id '{}' already exists", resource, id))
}

/// Función helper para crear errores de capacidad excedida
pub fn capacity_error(vehicle_id: u32, requested: u32) -> AppError {
    AppError::CapacityExceeded(format!(
        "Cannot reserve {} seats on vehicle '{}'",
        requested, vehicle_id
    ))
}

/// Función helper para crear errores de argumento inválido
pub fn invalid_argument_error(message: &str) -> AppError {
    AppError::InvalidArgument(message.to_string())
}
