//! Transport selection and order ledger.
//!
//! An order's weight, distance and urgency decide whether it travels by truck,
//! ship or air. Every processed order is kept in an append-only ledger owned by
//! the [`services::OrderDesk`], which is also what the HTTP layer talks to.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod telemetry;

pub use error::ValidationError;
pub use models::order::{OrderDetails, OrderRecord};
pub use models::transport::{Air, Eta, Ship, Transport, TransportMode, TransportVariant, Truck};
pub use services::ledger::OrderLedger;
pub use services::policy::TransportPolicy;
pub use services::{AppState, OrderDesk};
