//! TSP Topic Manager
//!
//! Overlay-network topic manager for the Tempo Song Protocol: admits
//! transaction outputs that carry signed TSP advertisements.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod pushdrop;
pub mod topic;
pub mod types;
