use crate::button::OnPress;
use crate::core::widget::{Id, Tree};
use crate::core::{ClassList, Element, Event, Frame, Node, Role, Shell, SmolStr};

use super::{Layout, style};

use std::slice;

/// An interactive entry of a [`Menu`](super::Menu).
///
/// An [`Item`] shows either a text label, pressable as a whole, or arbitrary
/// content. When both are set the content is shown and the text is only used
/// as the accessible label.
///
/// A disabled [`Item`] never produces its message.
pub struct Item<'a, Message> {
    id: Id,
    text: Option<SmolStr>,
    content: Option<Element<'a, Message>>,
    disabled: bool,
    on_press: Option<OnPress<'a, Message>>,
    label: Option<SmolStr>,
    class: ClassList,
}

impl<'a, Message> Item<'a, Message> {
    /// Creates an empty [`Item`].
    pub fn new() -> Self {
        Self {
            id: Id::unique(),
            text: None,
            content: None,
            disabled: false,
            on_press: None,
            label: None,
            class: ClassList::new(),
        }
    }

    /// Creates an [`Item`] showing the given text.
    pub fn with_text(text: impl AsRef<str>) -> Self {
        Self::new().text(text)
    }

    /// Creates an [`Item`] showing the given content.
    pub fn with_content(content: impl Into<Element<'a, Message>>) -> Self {
        Self::new().content(content)
    }

    /// Sets the [`Id`] of the [`Item`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the text of the [`Item`].
    #[must_use]
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.text = Some(SmolStr::new(text));
        self
    }

    /// Sets the content of the [`Item`].
    #[must_use]
    pub fn content(mut self, content: impl Into<Element<'a, Message>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets whether the [`Item`] is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the message that will be produced when the [`Item`] is pressed.
    #[must_use]
    pub fn on_press(mut self, on_press: Message) -> Self {
        self.on_press = Some(OnPress::Direct(on_press));
        self
    }

    /// Sets the closure producing a message when the [`Item`] is pressed.
    #[must_use]
    pub fn on_press_with(mut self, on_press: impl Fn() -> Message + 'a) -> Self {
        self.on_press = Some(OnPress::Closure(Box::new(on_press)));
        self
    }

    /// Sets the accessible label of the [`Item`].
    ///
    /// By default, the text of the [`Item`] is used.
    #[must_use]
    pub fn accessibility_label(mut self, label: impl AsRef<str>) -> Self {
        self.label = Some(SmolStr::new(label));
        self
    }

    /// Adds style classes to the [`Item`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.class.extend_from(classes);
        self
    }

    pub(super) fn element(&self) -> Option<&Element<'a, Message>> {
        self.content.as_ref()
    }

    pub(super) fn render(
        &mut self,
        layout: Layout,
        trees: &mut slice::IterMut<'_, Tree>,
        frame: &Frame,
    ) -> Node {
        let content = match &mut self.content {
            Some(content) => trees
                .next()
                .map(|tree| content.as_widget_mut().render(tree, frame)),
            None => None,
        };

        if content.is_none() && self.text.is_none() {
            log::warn!("Menu item {}: no text nor content, rendering an empty item", self.id);
        }

        let label = self
            .label
            .clone()
            .or_else(|| self.text.clone())
            .or_else(|| content.as_ref().and_then(Node::first_text).cloned());

        let body = content.or_else(|| {
            self.text
                .as_ref()
                .map(|text| Node::new(Role::Text).text(text.clone()))
        });

        Node::new(Role::MenuItem)
            .id(self.id.clone())
            .label(label)
            .classes(style::item(layout, self.disabled, &self.class))
            .pressable()
            .disabled(self.disabled)
            .extend(body)
    }

    pub(super) fn update(
        &mut self,
        trees: &mut slice::IterMut<'_, Tree>,
        event: &Event,
        shell: &mut Shell<'_, Message>,
    ) where
        Message: Clone,
    {
        if let Some(content) = &mut self.content {
            if let Some(tree) = trees.next() {
                if !self.disabled {
                    content.as_widget_mut().update(tree, event, shell);
                }
            }
        }

        if shell.is_event_captured() {
            return;
        }

        if let Event::Press(target) = event {
            if *target != self.id {
                return;
            }

            if self.disabled {
                log::trace!("Menu item {}: press ignored while disabled", self.id);
                return;
            }

            if let Some(on_press) = &self.on_press {
                shell.publish(on_press.get());
            }

            shell.capture_event();
        }
    }
}

impl<Message> Default for Item<'_, Message> {
    fn default() -> Self {
        Self::new()
    }
}

/// A non-interactive heading of a [`Menu`](super::Menu).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    id: Option<Id>,
    text: SmolStr,
    class: ClassList,
}

impl Title {
    /// Creates a new [`Title`] with the given text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            id: None,
            text: SmolStr::new(text),
            class: ClassList::new(),
        }
    }

    /// Sets the [`Id`] of the [`Title`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds style classes to the [`Title`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.class.extend_from(classes);
        self
    }

    pub(super) fn render(&self) -> Node {
        Node::new(Role::MenuTitle)
            .id_maybe(self.id.clone())
            .text(self.text.clone())
            .classes(style::title(&self.class))
    }
}
