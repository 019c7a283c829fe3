//! Delivery seam between the session and the transport.

use super::{error::DeliveryError, event::SessionEvent};

/// Delivery sink for one subscriber.
///
/// Called while the session lock is held, so implementations must not block:
/// hand the event off (e.g. to a channel) and return.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    /// Hand one event to the subscriber.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` when the subscriber is unreachable. The session
    /// then drops the subscriber as an implicit leave.
    fn deliver(&self, event: &SessionEvent) -> Result<(), DeliveryError>;
}
