//! Store internal widget state in a state tree to ensure continuity.
use crate::Element;

use std::any::{self, Any};
use std::fmt;

/// A persistent state widget tree.
///
/// A [`Tree`] is normally associated with a specific widget in the widget tree.
/// Its state outlives a single render: it is kept as long as the widget at the
/// same position keeps the same [`Tag`], and dropped otherwise.
#[derive(Debug)]
pub struct Tree {
    /// The tag of the [`Tree`].
    pub tag: Tag,

    /// The [`State`] of the [`Tree`].
    pub state: State,

    /// The children of the root widget of the [`Tree`].
    pub children: Vec<Tree>,
}

impl Tree {
    /// Creates an empty, stateless [`Tree`] with no children.
    pub fn empty() -> Self {
        Self {
            tag: Tag::stateless(),
            state: State::None,
            children: Vec::new(),
        }
    }

    /// Creates a new [`Tree`] for the provided [`Element`].
    pub fn new<Message>(element: &Element<'_, Message>) -> Self {
        let widget = element.as_widget();

        Self {
            tag: widget.tag(),
            state: widget.state(),
            children: widget.children(),
        }
    }

    /// Reconciles the current tree with the provided [`Element`].
    ///
    /// If the tag of the [`Element`] matches the tag of the [`Tree`], then the
    /// [`Element`] proceeds with the reconciliation (i.e. [`Widget::diff`] is called).
    ///
    /// Otherwise, the whole [`Tree`] is recreated and any state it held is
    /// dropped.
    ///
    /// [`Widget::diff`]: crate::Widget::diff
    pub fn diff<Message>(&mut self, new: &Element<'_, Message>) {
        if self.tag == new.as_widget().tag() {
            new.as_widget().diff(self);
        } else {
            *self = Self::new(new);
        }
    }

    /// Reconciles the children of the tree with the provided list of [`Element`].
    pub fn diff_children<Message>(&mut self, new_children: &[&Element<'_, Message>]) {
        if self.children.len() > new_children.len() {
            self.children.truncate(new_children.len());
        }

        for (child_state, new) in self.children.iter_mut().zip(new_children.iter()) {
            child_state.diff(new);
        }

        if self.children.len() < new_children.len() {
            self.children.extend(
                new_children[self.children.len()..]
                    .iter()
                    .map(|element| Self::new(element)),
            );
        }
    }
}

/// The identifier of some widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(any::TypeId);

impl Tag {
    /// Creates a [`Tag`] for a state of type `T`.
    pub fn of<T>() -> Self
    where
        T: 'static,
    {
        Self(any::TypeId::of::<T>())
    }

    /// Creates a [`Tag`] for a stateless widget.
    pub fn stateless() -> Self {
        Self::of::<()>()
    }
}

/// The internal [`State`] of a widget.
pub enum State {
    /// No meaningful internal state.
    None,

    /// Some meaningful internal state.
    Some(Box<dyn Any>),
}

impl State {
    /// Creates a new [`State`].
    pub fn new<T>(state: T) -> Self
    where
        T: 'static,
    {
        State::Some(Box::new(state))
    }

    /// Downcasts the [`State`] to `T` and returns a reference to it.
    ///
    /// Returns `None` if the [`State`] is empty or holds another type.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: 'static,
    {
        match self {
            State::None => None,
            State::Some(state) => state.downcast_ref(),
        }
    }

    /// Downcasts the [`State`] to `T` and returns a mutable reference to it.
    ///
    /// Returns `None` if the [`State`] is empty or holds another type.
    pub fn downcast_mut<T>(&mut self) -> Option<&mut T>
    where
        T: 'static,
    {
        match self {
            State::None => None,
            State::Some(state) => state.downcast_mut(),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "State::None"),
            Self::Some(_) => write!(f, "State::Some"),
        }
    }
}
