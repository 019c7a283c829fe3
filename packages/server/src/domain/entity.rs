//! Core domain models for the chat session.

use std::{collections::VecDeque, fmt, sync::Arc};

use super::{
    error::{DuplicateName, NotFound},
    event::SessionEvent,
    factory::SubscriberIdFactory,
    sink::EventSink,
    value_object::{ParticipantName, SubscriberId},
};

/// Session behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Whether a participant receives its own `Said` events (default: true)
    pub echo_to_sender: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            echo_to_sender: true,
        }
    }
}

/// Handle for a subscriber registered by `Session::join`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionHandle {
    /// Subscriber identifier, used to report a disconnect
    pub id: SubscriberId,
    /// The participant the subscriber belongs to
    pub name: ParticipantName,
}

/// Represents a participant in the session together with its subscriber
pub struct Participant {
    /// Participant display name
    pub name: ParticipantName,
    subscriber_id: SubscriberId,
    sink: Arc<dyn EventSink>,
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("subscriber_id", &self.subscriber_id)
            .finish_non_exhaustive()
    }
}

/// The chat session: an insertion-ordered roster where every participant owns
/// exactly one subscriber.
///
/// All methods take `&mut self`; callers serialize access with a single lock so
/// that roster checks, mutations and fan-out happen atomically.
#[derive(Debug, Default)]
pub struct Session {
    participants: Vec<Participant>,
    config: SessionConfig,
    evicted: Vec<ParticipantName>,
}

impl Session {
    /// Create an empty session
    pub fn new(config: SessionConfig) -> Self {
        Self {
            participants: Vec::new(),
            config,
            evicted: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Add a participant.
    ///
    /// `Joined` goes to every current subscriber first; then `sink` is
    /// registered and receives one `Joined` per participant already present.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if `name` is already an active participant
    pub fn join(
        &mut self,
        name: ParticipantName,
        sink: Arc<dyn EventSink>,
    ) -> Result<SubscriptionHandle, DuplicateName> {
        if self.contains(&name) {
            return Err(DuplicateName(name));
        }

        self.publish(SessionEvent::Joined { name: name.clone() }, None);
        let handle = self.subscribe(name, sink);
        self.introduce_roster(&handle);

        Ok(handle)
    }

    /// Remove a participant after delivering `Left` to everyone, the leaver included.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `name` is not an active participant
    pub fn leave(&mut self, name: &ParticipantName) -> Result<(), NotFound> {
        let index = self
            .position_of(name)
            .ok_or_else(|| NotFound(name.clone()))?;
        self.remove_leaver(index);
        Ok(())
    }

    /// Like `leave`, but only while `handle` still owns its name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the subscriber is gone or the name now belongs to
    /// another subscriber
    pub fn leave_as(&mut self, handle: &SubscriptionHandle) -> Result<(), NotFound> {
        let index = self.position_of_owner(handle)?;
        self.remove_leaver(index);
        Ok(())
    }

    /// Broadcast a message from an active participant. Empty text is allowed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `name` is not an active participant
    pub fn say(
        &mut self,
        name: &ParticipantName,
        text: impl Into<String>,
    ) -> Result<(), NotFound> {
        let index = self
            .position_of(name)
            .ok_or_else(|| NotFound(name.clone()))?;
        self.broadcast_said(index, text.into());
        Ok(())
    }

    /// Like `say`, but only while `handle` still owns its name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the subscriber is gone or the name now belongs to
    /// another subscriber
    pub fn say_as(
        &mut self,
        handle: &SubscriptionHandle,
        text: impl Into<String>,
    ) -> Result<(), NotFound> {
        let index = self.position_of_owner(handle)?;
        self.broadcast_said(index, text.into());
        Ok(())
    }

    /// Drop a subscriber whose connection went away and tell the others.
    ///
    /// Returns the removed participant's name, or `None` if the subscriber was
    /// already gone.
    pub fn disconnect(&mut self, subscriber_id: SubscriberId) -> Option<ParticipantName> {
        let index = self.position_of_subscriber(subscriber_id)?;
        let gone = self.participants.remove(index);
        self.publish(
            SessionEvent::Left {
                name: gone.name.clone(),
            },
            None,
        );
        Some(gone.name)
    }

    /// Participant names in join order
    pub fn roster(&self) -> Vec<ParticipantName> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    /// Get a participant by name
    pub fn find(&self, name: &ParticipantName) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.name == name)
    }

    pub fn contains(&self, name: &ParticipantName) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Names dropped because their sink failed since the last call
    pub fn take_evicted(&mut self) -> Vec<ParticipantName> {
        std::mem::take(&mut self.evicted)
    }

    fn subscribe(
        &mut self,
        name: ParticipantName,
        sink: Arc<dyn EventSink>,
    ) -> SubscriptionHandle {
        let id = SubscriberIdFactory::generate();
        self.participants.push(Participant {
            name: name.clone(),
            subscriber_id: id,
            sink,
        });
        SubscriptionHandle { id, name }
    }

    fn remove_leaver(&mut self, index: usize) {
        let leaving = self.participants.remove(index);
        let event = SessionEvent::Left {
            name: leaving.name.clone(),
        };

        if let Err(e) = leaving.sink.deliver(&event) {
            tracing::debug!("Could not deliver own leave to '{}': {}", leaving.name, e);
        }
        self.publish(event, None);
    }

    fn broadcast_said(&mut self, index: usize, text: String) {
        let sender = &self.participants[index];
        let skip = (!self.config.echo_to_sender).then_some(sender.subscriber_id);
        let event = SessionEvent::Said {
            name: sender.name.clone(),
            text,
        };
        self.publish(event, skip);
    }

    fn introduce_roster(&mut self, handle: &SubscriptionHandle) {
        let Some(newcomer) = self.participants.last() else {
            return;
        };
        let introduced = self
            .participants
            .iter()
            .filter(|p| p.subscriber_id != handle.id)
            .all(|p| {
                let event = SessionEvent::Joined {
                    name: p.name.clone(),
                };
                newcomer.sink.deliver(&event).is_ok()
            });

        if !introduced {
            for left in self.evict(&[handle.id]) {
                self.publish(left, None);
            }
        }
    }

    /// Fan `event` out to every subscriber except `skip`. Unreachable
    /// subscribers are evicted and each eviction is announced as a `Left`.
    fn publish(&mut self, event: SessionEvent, skip: Option<SubscriberId>) {
        let mut pending = VecDeque::from([(event, skip)]);

        while let Some((event, skip)) = pending.pop_front() {
            let unreachable: Vec<SubscriberId> = self
                .participants
                .iter()
                .filter(|p| Some(p.subscriber_id) != skip)
                .filter(|p| p.sink.deliver(&event).is_err())
                .map(|p| p.subscriber_id)
                .collect();

            pending.extend(self.evict(&unreachable).into_iter().map(|left| (left, None)));
        }
    }

    /// Remove the given subscribers and return the `Left` events to announce.
    fn evict(&mut self, ids: &[SubscriberId]) -> Vec<SessionEvent> {
        if ids.is_empty() {
            return Vec::new();
        }

        let (gone, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.participants)
            .into_iter()
            .partition(|p| ids.contains(&p.subscriber_id));
        self.participants = kept;

        let mut lefts = Vec::with_capacity(gone.len());
        for participant in gone {
            self.evicted.push(participant.name.clone());
            lefts.push(SessionEvent::Left {
                name: participant.name,
            });
        }
        lefts
    }

    fn position_of(&self, name: &ParticipantName) -> Option<usize> {
        self.participants.iter().position(|p| &p.name == name)
    }

    /// Index of the participant `handle` belongs to, if it still owns the name
    fn position_of_owner(&self, handle: &SubscriptionHandle) -> Result<usize, NotFound> {
        self.position_of_subscriber(handle.id)
            .filter(|&index| self.participants[index].name == handle.name)
            .ok_or_else(|| NotFound(handle.name.clone()))
    }

    fn position_of_subscriber(&self, subscriber_id: SubscriberId) -> Option<usize> {
        self.participants
            .iter()
            .position(|p| p.subscriber_id == subscriber_id)
    }
}
