//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::ParticipantName;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// ParticipantName too long error
    #[error("ParticipantName cannot exceed {max} characters (got {actual})")]
    ParticipantNameTooLong { max: usize, actual: usize },
}

/// Join rejected because the name is already an active participant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("participant '{0}' has already joined the session")]
pub struct DuplicateName(pub ParticipantName);

/// Leave or say referenced a name that is not an active participant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("participant '{0}' is not in the session")]
pub struct NotFound(pub ParticipantName);

/// Errors reported by an event sink that could not take an event
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The receiving side of the subscriber's channel is gone
    #[error("subscriber channel is closed")]
    ChannelClosed,
}
