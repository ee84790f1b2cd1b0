//! Transport modes and their ETA calculators.
//!
//! Each mode is its own immutable value type implementing [`Transport`].
//! [`TransportVariant`] is the closed set the policy picks from; adding a mode
//! means a new type, a `Transport` impl and one more enum arm.

use serde::Serialize;
use std::fmt;

/// Estimated transit time in whole days plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Eta {
    pub days: u32,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Truck,
    Ship,
    Air,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Truck => "truck",
            TransportMode::Ship => "ship",
            TransportMode::Air => "air",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities shared by every transport mode.
pub trait Transport {
    fn mode(&self) -> TransportMode;

    fn eta(&self) -> Eta;

    /// Short label naming the mode and its key parameter. Display only.
    fn describe(&self) -> String;
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Truck {
    route_minutes: f64,
    heavy_load: bool,
}

impl Truck {
    pub fn new(route_minutes: f64, heavy_load: bool) -> Self {
        Self {
            route_minutes,
            heavy_load,
        }
    }

    pub fn route_minutes(&self) -> f64 {
        self.route_minutes
    }

    pub fn heavy_load(&self) -> bool {
        self.heavy_load
    }
}

impl Transport for Truck {
    fn mode(&self) -> TransportMode {
        TransportMode::Truck
    }

    fn eta(&self) -> Eta {
        // float-to-int casts saturate; the sums must too
        let planning_days = (self.route_minutes / 60.0).floor() as u32;
        let days = 1_u32
            .saturating_add(planning_days)
            .saturating_add(u32::from(self.heavy_load));
        Eta {
            days,
            label: format!("Truck: {} days", days),
        }
    }

    fn describe(&self) -> String {
        format!("Truck (Route: {}m)", self.route_minutes.trunc() as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ship {
    port_reserved: bool,
    clearance_days: u32,
}

impl Ship {
    /// Days added when no port slot could be reserved.
    pub const UNRESERVED_PENALTY_DAYS: u32 = 3;
    pub const BASE_DAYS: u32 = 10;

    pub fn new(port_reserved: bool, clearance_days: u32) -> Self {
        Self {
            port_reserved,
            clearance_days,
        }
    }

    pub fn port_reserved(&self) -> bool {
        self.port_reserved
    }

    pub fn clearance_days(&self) -> u32 {
        self.clearance_days
    }
}

impl Transport for Ship {
    fn mode(&self) -> TransportMode {
        TransportMode::Ship
    }

    fn eta(&self) -> Eta {
        let mut days = Self::BASE_DAYS.saturating_add(self.clearance_days);
        if !self.port_reserved {
            days = days.saturating_add(Self::UNRESERVED_PENALTY_DAYS);
        }
        Eta {
            days,
            label: format!("Ship: {} days", days),
        }
    }

    fn describe(&self) -> String {
        format!("Ship (Reserved: {})", yes_no(self.port_reserved))
    }
}

/// Air freight.
///
/// NOTE: the policy only picks air for urgent orders and always sets
/// `express`, so the two-day non-express ETA is never produced by
/// [`crate::services::policy::TransportPolicy::select`]. Kept as-is until the
/// intended non-express rule is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Air {
    express: bool,
}

impl Air {
    pub fn new(express: bool) -> Self {
        Self { express }
    }

    pub fn express(&self) -> bool {
        self.express
    }
}

impl Transport for Air {
    fn mode(&self) -> TransportMode {
        TransportMode::Air
    }

    fn eta(&self) -> Eta {
        if self.express {
            Eta {
                days: 1,
                label: "Air: 1 day (Express)".to_string(),
            }
        } else {
            Eta {
                days: 2,
                label: "Air: 2 days".to_string(),
            }
        }
    }

    fn describe(&self) -> String {
        format!("Air (Express: {})", yes_no(self.express))
    }
}

/// The transport chosen for an order. Always exactly one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TransportVariant {
    Truck(Truck),
    Ship(Ship),
    Air(Air),
}

impl TransportVariant {
    fn as_transport(&self) -> &dyn Transport {
        match self {
            TransportVariant::Truck(truck) => truck,
            TransportVariant::Ship(ship) => ship,
            TransportVariant::Air(air) => air,
        }
    }
}

impl Transport for TransportVariant {
    fn mode(&self) -> TransportMode {
        self.as_transport().mode()
    }

    fn eta(&self) -> Eta {
        self.as_transport().eta()
    }

    fn describe(&self) -> String {
        self.as_transport().describe()
    }
}

impl fmt::Display for TransportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Truck> for TransportVariant {
    fn from(truck: Truck) -> Self {
        TransportVariant::Truck(truck)
    }
}

impl From<Ship> for TransportVariant {
    fn from(ship: Ship) -> Self {
        TransportVariant::Ship(ship)
    }
}

impl From<Air> for TransportVariant {
    fn from(air: Air) -> Self {
        TransportVariant::Air(air)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_eta_counts_whole_hours_of_planning() {
        assert_eq!(Truck::new(36.0, false).eta().days, 1);
        assert_eq!(Truck::new(59.9, false).eta().days, 1);
        assert_eq!(Truck::new(60.0, false).eta().days, 2);
        assert_eq!(Truck::new(70.0, false).eta().days, 2);
    }

    #[test]
    fn test_eta_saturates_on_extreme_parameters() {
        assert_eq!(Truck::new(1e12, true).eta().days, u32::MAX);
        assert_eq!(Truck::new(f64::INFINITY, false).eta().days, u32::MAX);
        assert_eq!(Ship::new(false, u32::MAX).eta().days, u32::MAX);
        assert_eq!(Ship::new(true, u32::MAX - 5).eta().days, u32::MAX);
    }

    #[test]
    fn test_truck_heavy_load_adds_a_day() {
        let eta = Truck::new(32.0, true).eta();
        assert_eq!(eta.days, 2);
        assert_eq!(eta.label, "Truck: 2 days");
    }

    #[test]
    fn test_ship_penalty_without_reservation() {
        assert_eq!(Ship::new(true, 2).eta().days, 12);
        assert_eq!(Ship::new(false, 2).eta().days, 15);
        assert_eq!(Ship::new(false, 2).eta().label, "Ship: 15 days");
    }

    #[test]
    fn test_air_non_express_branch_still_computes() {
        assert_eq!(Air::new(true).eta().days, 1);
        assert_eq!(Air::new(true).eta().label, "Air: 1 day (Express)");
        assert_eq!(Air::new(false).eta().days, 2);
        assert_eq!(Air::new(false).eta().label, "Air: 2 days");
    }

    #[test]
    fn test_describe_labels() {
        assert_eq!(Truck::new(36.8, false).describe(), "Truck (Route: 36m)");
        assert_eq!(Ship::new(true, 2).describe(), "Ship (Reserved: Yes)");
        assert_eq!(Air::new(false).describe(), "Air (Express: No)");
    }

    #[test]
    fn test_variant_delegates_to_mode() {
        let variant = TransportVariant::from(Ship::new(true, 2));
        assert_eq!(variant.mode(), TransportMode::Ship);
        assert_eq!(variant.eta(), Ship::new(true, 2).eta());
        assert_eq!(variant.to_string(), "Ship (Reserved: Yes)");
    }

    #[test]
    fn test_variant_serializes_with_mode_tag() {
        let value = serde_json::to_value(TransportVariant::from(Air::new(true))).unwrap();
        assert_eq!(value, serde_json::json!({ "mode": "air", "express": true }));
    }
}
