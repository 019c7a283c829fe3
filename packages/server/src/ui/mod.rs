//! WebSocket / HTTP adapter for the session broadcaster.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{run, serve};
