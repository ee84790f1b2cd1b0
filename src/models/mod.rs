pub mod order;
pub mod transport;
