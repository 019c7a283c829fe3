//! Data transfer objects for the HTTP and WebSocket adapters.

pub mod http;
pub mod websocket;
