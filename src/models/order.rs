use serde::Serialize;

use crate::error::ValidationError;
use crate::models::transport::TransportVariant;

pub type OrderId = u32;

/// Checks a caller-supplied id against the range `OrderId` can hold.
pub fn parse_order_id(raw: i64) -> Result<OrderId, ValidationError> {
    OrderId::try_from(raw).map_err(|_| ValidationError::IdOutOfRange {
        id: raw,
        min: 0,
        max: OrderId::MAX as i64,
    })
}

/// Attributes of a single order. Validated on construction and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderDetails {
    id: OrderId,
    weight_kg: f64,
    distance_km: f64,
    urgent: bool,
}

impl OrderDetails {
    pub fn new(
        id: OrderId,
        weight_kg: f64,
        distance_km: f64,
        urgent: bool,
    ) -> Result<Self, ValidationError> {
        if !weight_kg.is_finite() {
            return Err(ValidationError::NotFinite { field: "weight_kg" });
        }
        if !distance_km.is_finite() {
            return Err(ValidationError::NotFinite { field: "distance_km" });
        }
        if weight_kg < 0.0 {
            return Err(ValidationError::NegativeWeight(weight_kg));
        }
        if distance_km < 0.0 {
            return Err(ValidationError::NegativeDistance(distance_km));
        }

        Ok(Self {
            id,
            weight_kg,
            distance_km,
            urgent,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn urgent(&self) -> bool {
        self.urgent
    }
}

/// A processed order as kept in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub details: OrderDetails,
    pub transport: TransportVariant,
}

impl OrderRecord {
    pub fn new(details: OrderDetails, transport: TransportVariant) -> Self {
        Self {
            id: details.id(),
            details,
            transport,
        }
    }
}
