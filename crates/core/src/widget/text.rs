//! Display a piece of text.
use crate::widget::{Id, Tree, Widget};
use crate::{ClassList, Element, Frame, Node, Role};

use smol_str::SmolStr;

/// A bunch of text.
///
/// Text is never pressable by itself; a press on it reaches the closest
/// pressable ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: SmolStr,
    id: Option<Id>,
    classes: ClassList,
}

impl Text {
    /// Creates a new [`Text`] with the given content.
    pub fn new(content: impl AsRef<str>) -> Self {
        Self {
            content: SmolStr::new(content),
            id: None,
            classes: ClassList::new(),
        }
    }

    /// Sets the [`Id`] of the [`Text`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds style classes to the [`Text`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.classes.extend_from(classes);
        self
    }

    /// Returns the content of the [`Text`].
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<Message> Widget<Message> for Text {
    fn render(&mut self, _tree: &mut Tree, _frame: &Frame) -> Node {
        Node::new(Role::Text)
            .id_maybe(self.id.clone())
            .text(self.content.clone())
            .classes(self.classes.clone())
    }
}

impl<'a, Message> From<Text> for Element<'a, Message> {
    fn from(text: Text) -> Self {
        Element::new(text)
    }
}

impl<'a, Message> From<&str> for Element<'a, Message> {
    fn from(content: &str) -> Self {
        Text::new(content).into()
    }
}

impl<'a, Message> From<String> for Element<'a, Message> {
    fn from(content: String) -> Self {
        Text::new(content).into()
    }
}
