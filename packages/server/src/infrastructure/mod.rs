//! Infrastructure layer: concrete broadcaster, event sinks and wire DTOs.

pub mod broadcaster;
pub mod dto;
pub mod sink;
