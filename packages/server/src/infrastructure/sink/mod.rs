//! EventSink implementations.

pub mod channel;

pub use channel::ChannelEventSink;
