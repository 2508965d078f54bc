//! Create custom widgets and operate on them.
pub mod text;
pub mod tree;

mod id;

pub use id::Id;
pub use text::Text;
pub use tree::Tree;

use crate::{Event, Frame, Node, Shell};

/// A component that decides what a region of the user interface shows, and
/// how it reacts to events.
///
/// A widget never paints. Every frame it is rendered into a [`Node`] tree that
/// the host maps to platform views.
///
/// Persistent state (anything that must survive between frames) lives in the
/// widget [`Tree`], announced through [`Widget::tag`] and [`Widget::state`].
pub trait Widget<Message> {
    /// Returns the [`Tag`] of the [`Widget`].
    ///
    /// [`Tag`]: tree::Tag
    fn tag(&self) -> tree::Tag {
        tree::Tag::stateless()
    }

    /// Returns the [`State`] of the [`Widget`].
    ///
    /// [`State`]: tree::State
    fn state(&self) -> tree::State {
        tree::State::None
    }

    /// Returns the state [`Tree`] of the children of the [`Widget`].
    fn children(&self) -> Vec<Tree> {
        Vec::new()
    }

    /// Reconciles the [`Widget`] with the provided [`Tree`].
    fn diff(&self, tree: &mut Tree) {
        tree.children.clear();
    }

    /// Renders the [`Widget`] into the [`Node`] tree of the current frame.
    fn render(&mut self, tree: &mut Tree, frame: &Frame) -> Node;

    /// Processes an [`Event`], publishing messages through the [`Shell`].
    ///
    /// By default, it does nothing.
    fn update(&mut self, _tree: &mut Tree, _event: &Event, _shell: &mut Shell<'_, Message>) {}
}
