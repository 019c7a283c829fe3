//! Terminal chat client.
//!
//! Speaks the join / leave / message contract over WebSocket and renders the
//! session as a timestamped chat log with a roster.

pub mod command;
pub mod config;
pub mod error;
pub mod runner;
pub mod view;

// Re-export entry points
pub use config::ClientConfig;
pub use error::ClientError;
pub use runner::run_client;
