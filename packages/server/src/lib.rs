//! Chat session broadcaster library.
//!
//! The core keeps the roster of joined participants and relays join, leave and
//! message events to every subscriber. A WebSocket adapter exposes it over the
//! legacy `Join` / `Leave` / `Message` contract.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::{run, serve};
