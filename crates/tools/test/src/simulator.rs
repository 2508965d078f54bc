//! Run a simulation of your widgets without a host.
use crate::Error;
use crate::core::event;
use crate::core::time::Instant;
use crate::core::{Element, Event, Node, Role};
use crate::runtime::UserInterface;
use crate::runtime::user_interface::Cache;
use crate::selector::Selector;

use std::slice;

/// A user interface that can be interacted with and inspected
/// programmatically.
///
/// After every event the widgets are rendered again, so queries always see
/// the outcome of the last interaction.
pub struct Simulator<'a, Message> {
    raw: UserInterface<'a, Message>,
    now: Instant,
    messages: Vec<Message>,
}

/// Creates a new [`Simulator`] for the given [`Element`].
pub fn simulator<'a, Message>(element: impl Into<Element<'a, Message>>) -> Simulator<'a, Message> {
    Simulator::new(element)
}

impl<'a, Message> Simulator<'a, Message> {
    /// Creates a new [`Simulator`] with fresh widget state.
    pub fn new(element: impl Into<Element<'a, Message>>) -> Self {
        Self::with_cache(element, Cache::new())
    }

    /// Creates a new [`Simulator`] reusing the widget state of a previous one.
    pub fn with_cache(element: impl Into<Element<'a, Message>>, cache: Cache) -> Self {
        Self::with_cache_at(element, cache, Instant::now())
    }

    /// Creates a new [`Simulator`] reusing the widget state of a previous one,
    /// rendering its first frame at `now`.
    pub fn with_cache_at(
        element: impl Into<Element<'a, Message>>,
        cache: Cache,
        now: Instant,
    ) -> Self {
        Self {
            raw: UserInterface::build(element, cache, now),
            now,
            messages: Vec::new(),
        }
    }

    /// Returns the [`Node`] tree of the last frame.
    pub fn node(&self) -> &Node {
        self.raw.node()
    }

    /// Finds the first [`Node`] matching the given [`Selector`].
    pub fn find(&self, selector: impl Into<Selector>) -> Result<&Node, Error> {
        let selector = selector.into();

        selector
            .find(self.raw.node())
            .ok_or(Error::NotFound(selector))
    }

    /// Finds the first [`Node`] matching the given [`Selector`], if any.
    pub fn query(&self, selector: impl Into<Selector>) -> Option<&Node> {
        selector.into().find(self.raw.node())
    }

    /// Presses the first [`Node`] matching the given [`Selector`].
    ///
    /// Like a touch on a label, the press lands on the closest pressable node
    /// among the match and its ancestors, even if it is disabled.
    pub fn press(&mut self, selector: impl Into<Selector>) -> Result<event::Status, Error> {
        let selector = selector.into();

        let path = self
            .raw
            .node()
            .path_to(&|node| selector.matches(node))
            .ok_or_else(|| Error::NotFound(selector.clone()))?;

        let target = path
            .into_iter()
            .rev()
            .find(|node| node.pressable)
            .and_then(|node| node.id.clone())
            .ok_or(Error::NotPressable(selector))?;

        Ok(self.dispatch(Event::Press(target)))
    }

    /// Presses the first drawer overlay.
    pub fn press_overlay(&mut self) -> Result<event::Status, Error> {
        self.press(Role::Overlay)
    }

    /// Simulates a platform back navigation.
    pub fn back(&mut self) -> event::Status {
        self.dispatch(Event::BackRequested)
    }

    /// Simulates a frame tick at `now`, advancing timed transitions.
    pub fn tick(&mut self, now: Instant) -> event::Status {
        self.now = now;
        self.dispatch(Event::Tick(now))
    }

    /// Returns the messages published so far.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the [`Simulator`] and returns the messages published.
    pub fn into_messages(self) -> impl Iterator<Item = Message> {
        self.messages.into_iter()
    }

    /// Consumes the [`Simulator`] and returns the widget state, ready to be
    /// reused with a new view.
    pub fn into_cache(self) -> Cache {
        self.raw.into_cache()
    }

    fn dispatch(&mut self, event: Event) -> event::Status {
        let (_state, statuses) = self
            .raw
            .update(slice::from_ref(&event), &mut self.messages);

        let _ = self.raw.render(self.now);

        statuses
            .into_iter()
            .next()
            .unwrap_or(event::Status::Ignored)
    }
}
