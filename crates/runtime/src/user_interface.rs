//! Implement your own event loop to drive a user interface.
use crate::core::event;
use crate::core::time::Instant;
use crate::core::widget::{Id, Tree};
use crate::core::{Element, Event, Frame, Node, Shell};

use rustc_hash::FxHashSet;

/// A set of interactive graphical elements with a specific [`Node`] output.
///
/// It can be updated and rendered.
///
/// A [`UserInterface`] lives for a single frame: build it from a fresh view,
/// feed it the events of the frame, then turn it back into a [`Cache`] to
/// keep the widget state for the next one.
pub struct UserInterface<'a, Message> {
    root: Element<'a, Message>,
    tree: Tree,
    node: Node,
}

impl<'a, Message> UserInterface<'a, Message> {
    /// Builds a user interface for an [`Element`].
    ///
    /// It reconciles the persistent state of the widgets stored in the
    /// [`Cache`] with the new [`Element`] and renders the first [`Node`] tree
    /// at `now`.
    pub fn build<E: Into<Element<'a, Message>>>(root: E, cache: Cache, now: Instant) -> Self {
        let mut root = root.into();

        let Cache { mut tree } = cache;
        tree.diff(&root);

        let node = root.as_widget_mut().render(&mut tree, &Frame::new(now));
        warn_duplicate_ids(&node);

        UserInterface { root, tree, node }
    }

    /// Returns the [`Node`] tree rendered last.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Updates the [`UserInterface`] by processing each provided [`Event`].
    ///
    /// The messages published by the widgets are pushed into `messages`.
    ///
    /// It returns the [`State`] of the [`UserInterface`] and the
    /// [`event::Status`] of every event.
    pub fn update(
        &mut self,
        events: &[Event],
        messages: &mut Vec<Message>,
    ) -> (State, Vec<event::Status>) {
        let mut outdated = false;
        let mut redraw_requested = false;

        let statuses = events
            .iter()
            .map(|event| {
                let published = messages.len();
                let mut shell = Shell::new(messages);

                self.root
                    .as_widget_mut()
                    .update(&mut self.tree, event, &mut shell);

                outdated = outdated || shell.are_widgets_invalid();
                redraw_requested = redraw_requested || shell.is_redraw_requested();

                let status = shell.event_status();

                if messages.len() > published {
                    outdated = true;
                }

                log::trace!("Event {event:?} processed: {status:?}");

                status
            })
            .collect();

        let state = if outdated {
            State::Outdated
        } else {
            State::Updated { redraw_requested }
        };

        (state, statuses)
    }

    /// Renders the current widgets again at `now`, without rebuilding them.
    ///
    /// This is useful to observe timed transitions between two views.
    pub fn render(&mut self, now: Instant) -> &Node {
        self.node = self
            .root
            .as_widget_mut()
            .render(&mut self.tree, &Frame::new(now));

        &self.node
    }

    /// Extract the [`Cache`] of the [`UserInterface`], consuming it in the
    /// process.
    pub fn into_cache(self) -> Cache {
        Cache { tree: self.tree }
    }
}

/// The current state of a [`UserInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The [`UserInterface`] is outdated and needs to be rebuilt from a new
    /// view, since messages were published.
    Outdated,

    /// The [`UserInterface`] is up-to-date and can be reused without
    /// rebuilding.
    Updated {
        /// Whether a new frame was requested, to reflect a persistent state
        /// change.
        redraw_requested: bool,
    },
}

/// Reusable data of a specific [`UserInterface`].
#[derive(Debug)]
pub struct Cache {
    tree: Tree,
}

impl Cache {
    /// Creates an empty [`Cache`].
    ///
    /// You should use this to initialize a [`Cache`] before building your first
    /// [`UserInterface`].
    pub fn new() -> Cache {
        Cache { tree: Tree::empty() }
    }
}

impl Default for Cache {
    fn default() -> Cache {
        Cache::new()
    }
}

fn warn_duplicate_ids(node: &Node) {
    let mut seen: FxHashSet<&Id> = FxHashSet::default();

    for id in node.descendants().filter_map(|node| node.id.as_ref()) {
        if !seen.insert(id) {
            log::warn!("Widget id {id} is used more than once; presses on it are ambiguous");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::widget::Text;

    #[test]
    fn cache_survives_rebuilds() {
        let now = Instant::now();

        let ui = UserInterface::<()>::build(Text::new("first"), Cache::new(), now);
        assert_eq!(ui.node().text.as_deref(), Some("first"));

        let ui = UserInterface::<()>::build(Text::new("second"), ui.into_cache(), now);
        assert_eq!(ui.node().text.as_deref(), Some("second"));
    }

    #[test]
    fn ignored_events_keep_the_interface_updated() {
        let mut ui = UserInterface::<()>::build(Text::new("idle"), Cache::new(), Instant::now());
        let mut messages = Vec::new();

        let (state, statuses) = ui.update(&[Event::BackRequested], &mut messages);

        assert_eq!(
            state,
            State::Updated {
                redraw_requested: false
            }
        );
        assert_eq!(statuses, [event::Status::Ignored]);
        assert!(messages.is_empty());
    }
}
