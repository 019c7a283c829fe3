//! Server state shared by the handlers.

use std::sync::Arc;

use crate::domain::SessionBroadcaster;

/// Shared application state
pub struct AppState {
    /// The one session broadcaster of this server
    pub broadcaster: Arc<dyn SessionBroadcaster>,
}
