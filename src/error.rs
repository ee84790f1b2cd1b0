use thiserror::Error;

/// Raised when an order falls outside the accepted domain.
///
/// Values are reported back to the caller as given; nothing is clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("weight_kg must not be negative (got {0})")]
    NegativeWeight(f64),
    #[error("distance_km must not be negative (got {0})")]
    NegativeDistance(f64),
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("order id {id} is outside the accepted range {min}..={max}")]
    IdOutOfRange { id: i64, min: i64, max: i64 },
    #[error("order id range {min}..={max} is empty")]
    EmptyIdRange { min: u32, max: u32 },
}
