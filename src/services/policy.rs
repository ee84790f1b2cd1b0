use crate::models::order::OrderDetails;
use crate::models::transport::{Air, Ship, TransportVariant, Truck};

pub const AIR_MAX_WEIGHT_KG: f64 = 20.0;
pub const AIR_MIN_DISTANCE_KM: f64 = 500.0;
pub const SHIP_MIN_DISTANCE_KM: f64 = 2000.0;
pub const SHIP_MIN_WEIGHT_KG: f64 = 1000.0;
pub const TRUCK_HEAVY_THRESHOLD_KG: f64 = 200.0;

const ROUTE_BASE_MINUTES: f64 = 30.0;
const ROUTE_KM_PER_MINUTE: f64 = 50.0;
const URGENT_ROUTE_FACTOR: f64 = 0.8;

/// Rule-based transport selection. Stateless; rules are checked in order and
/// the first match wins.
pub struct TransportPolicy;

impl TransportPolicy {
    pub fn select(details: &OrderDetails) -> TransportVariant {
        if Self::qualifies_for_air(details) {
            tracing::debug!(order_id = details.id(), "air rule matched");
            return Air::new(true).into();
        }

        if Self::qualifies_for_ship(details) {
            tracing::debug!(order_id = details.id(), "ship rule matched");
            return Ship::new(
                reserve_port_slot(details),
                estimate_customs_clearance(details),
            )
            .into();
        }

        tracing::debug!(order_id = details.id(), "falling back to truck");
        Truck::new(
            plan_route_minutes(details),
            details.weight_kg() > TRUCK_HEAVY_THRESHOLD_KG,
        )
        .into()
    }

    fn qualifies_for_air(details: &OrderDetails) -> bool {
        details.urgent()
            && details.weight_kg() < AIR_MAX_WEIGHT_KG
            && details.distance_km() > AIR_MIN_DISTANCE_KM
    }

    fn qualifies_for_ship(details: &OrderDetails) -> bool {
        details.distance_km() > SHIP_MIN_DISTANCE_KM || details.weight_kg() > SHIP_MIN_WEIGHT_KG
    }
}

fn plan_route_minutes(details: &OrderDetails) -> f64 {
    let minutes = ROUTE_BASE_MINUTES + details.distance_km() / ROUTE_KM_PER_MINUTE;
    if details.urgent() {
        minutes * URGENT_ROUTE_FACTOR
    } else {
        minutes
    }
}

// Placeholder until port slot booking exists.
fn reserve_port_slot(_details: &OrderDetails) -> bool {
    true
}

// Placeholder until customs estimation exists.
fn estimate_customs_clearance(_details: &OrderDetails) -> u32 {
    2
}
