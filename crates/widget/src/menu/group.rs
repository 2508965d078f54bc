use crate::core::widget::{Id, Tree};
use crate::core::{ClassList, Event, Frame, Node, Role, Shell, SmolStr};

use super::{Layout, MenuChild, style};

use std::slice;

/// A labeled group of [`MenuChild`]ren, shown as a dropdown or a disclosure.
///
/// A [`Group`] renders its label followed by its children. It does not own
/// any open/closed state; expanding and collapsing is up to the application.
pub struct Group<'a, Message> {
    id: Id,
    label: SmolStr,
    class: ClassList,
    children: Vec<MenuChild<'a, Message>>,
}

impl<'a, Message> Group<'a, Message> {
    /// Creates an empty [`Group`] with the given label.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self {
            id: Id::unique(),
            label: SmolStr::new(label),
            class: ClassList::new(),
            children: Vec::new(),
        }
    }

    /// Sets the [`Id`] of the [`Group`].
    ///
    /// Set one to query the group across frames.
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = id.into();
        self
    }

    /// Adds a child to the [`Group`].
    #[must_use]
    pub fn push(mut self, child: impl Into<MenuChild<'a, Message>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Adds style classes to the [`Group`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.class.extend_from(classes);
        self
    }

    pub(super) fn children(&self) -> &[MenuChild<'a, Message>] {
        &self.children
    }

    pub(super) fn render(
        &mut self,
        role: Role,
        layout: Layout,
        trees: &mut slice::IterMut<'_, Tree>,
        frame: &Frame,
    ) -> Node {
        let children: Vec<Node> = self
            .children
            .iter_mut()
            .map(|child| child.render(layout, trees, frame))
            .collect();

        Node::new(role)
            .id(self.id.clone())
            .label(Some(self.label.clone()))
            .classes(style::group(role, &self.class))
            .push(Node::new(Role::Text).text(self.label.clone()))
            .push(Node::new(Role::View).extend(children))
    }

    pub(super) fn update(
        &mut self,
        trees: &mut slice::IterMut<'_, Tree>,
        event: &Event,
        shell: &mut Shell<'_, Message>,
    ) where
        Message: Clone,
    {
        for child in &mut self.children {
            child.update(trees, event, shell);

            if shell.is_event_captured() {
                return;
            }
        }
    }
}
