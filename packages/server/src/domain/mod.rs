//! Domain layer for the chat session.
//!
//! This module contains the session broadcaster's business rules, independent
//! of data transfer objects (DTOs) and of any transport.

pub mod broadcaster;
pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod sink;
pub mod value_object;

pub use broadcaster::SessionBroadcaster;
pub use entity::{Participant, Session, SessionConfig, SubscriptionHandle};
pub use error::{DeliveryError, DuplicateName, NotFound, ValueObjectError};
pub use event::SessionEvent;
pub use factory::SubscriberIdFactory;
pub use sink::EventSink;
pub use value_object::{ParticipantName, SubscriberId};
