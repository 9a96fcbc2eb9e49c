//! Core: configuration and the session state root

pub mod config;
pub mod state;

pub use config::{Config, StockPolicy};
pub use state::PortalState;
