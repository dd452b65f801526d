//! Utilidades de validación
//!
//! Funciones helper de validación compartidas por los request models.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un precio no sea negativo
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        let mut error = ValidationError::new("price");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
