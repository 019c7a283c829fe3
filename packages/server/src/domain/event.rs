//! Events relayed by the session to its subscribers.

use serde::{Deserialize, Serialize};

use super::value_object::ParticipantName;

/// A session event, immutable once raised.
///
/// Events about one participant always reach a given subscriber in the order
/// they were raised: `Joined`, then any `Said`, then `Left`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SessionEvent {
    /// A participant joined (or was already present when the subscriber joined)
    Joined { name: ParticipantName },
    /// A participant left, explicitly or because its connection was lost
    Left { name: ParticipantName },
    /// A participant said something; `text` may be empty
    Said { name: ParticipantName, text: String },
}
