//! TSP Topic Manager - Type System
//!
//! - `tsp`: Tempo Song Protocol field layout and advertisement view

pub mod tsp;

pub use tsp::{TspAdvertisement, TspField, TSP_PROTOCOL_ADDRESS};
