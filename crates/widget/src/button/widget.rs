//! Buttons allow your users to perform actions by pressing them.
//!
//! # Example
//! ```no_run
//! use petal_ui_widget::button;
//! use petal_ui_widget::core::Element;
//!
//! #[derive(Clone)]
//! enum Message {
//!     ButtonPressed,
//! }
//!
//! fn view<'a>() -> Element<'a, Message> {
//!     button("Press me!").on_press(Message::ButtonPressed).into()
//! }
//! ```
use crate::core::widget::{Id, Tree};
use crate::core::{ClassList, Element, Event, Frame, Node, Role, Shell, Size, SmolStr, Widget};

use super::{Shape, Variant};

/// A generic widget that produces a message when pressed.
///
/// A [`Button`] that is disabled or loading never produces its message:
///
/// ```no_run
/// use petal_ui_widget::button;
/// use petal_ui_widget::core::Element;
///
/// #[derive(Clone)]
/// enum Message {
///     Save,
/// }
///
/// fn view<'a>(saving: bool) -> Element<'a, Message> {
///     button("Save").loading(saving).on_press(Message::Save).into()
/// }
/// ```
pub struct Button<'a, Message> {
    id: Id,
    content: Element<'a, Message>,
    start_icon: Option<Element<'a, Message>>,
    end_icon: Option<Element<'a, Message>>,
    on_press: Option<OnPress<'a, Message>>,
    variant: Option<Variant>,
    size: Size,
    shape: Option<Shape>,
    disabled: bool,
    loading: bool,
    active: bool,
    wide: bool,
    full_width: bool,
    glass: bool,
    label: Option<SmolStr>,
    class: ClassList,
    text_class: ClassList,
}

pub(crate) enum OnPress<'a, Message> {
    Direct(Message),
    Closure(Box<dyn Fn() -> Message + 'a>),
}

impl<Message: Clone> OnPress<'_, Message> {
    pub(crate) fn get(&self) -> Message {
        match self {
            OnPress::Direct(message) => message.clone(),
            OnPress::Closure(f) => f(),
        }
    }
}

impl<'a, Message> Button<'a, Message> {
    /// Creates a new [`Button`] with the given content.
    pub fn new(content: impl Into<Element<'a, Message>>) -> Self {
        Button {
            id: Id::unique(),
            content: content.into(),
            start_icon: None,
            end_icon: None,
            on_press: None,
            variant: None,
            size: Size::default(),
            shape: None,
            disabled: false,
            loading: false,
            active: false,
            wide: false,
            full_width: false,
            glass: false,
            label: None,
            class: ClassList::new(),
            text_class: ClassList::new(),
        }
    }

    /// Sets the unique identifier of the [`Button`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the message that will be produced when the [`Button`] is pressed.
    #[must_use]
    pub fn on_press(mut self, on_press: Message) -> Self {
        self.on_press = Some(OnPress::Direct(on_press));
        self
    }

    /// Sets the message that will be produced when the [`Button`] is pressed.
    ///
    /// This is analogous to [`Button::on_press`], but using a closure to produce
    /// the message.
    #[must_use]
    pub fn on_press_with(mut self, on_press: impl Fn() -> Message + 'a) -> Self {
        self.on_press = Some(OnPress::Closure(Box::new(on_press)));
        self
    }

    /// Sets the message that will be produced when the [`Button`] is pressed,
    /// if `Some`.
    #[must_use]
    pub fn on_press_maybe(mut self, on_press: Option<Message>) -> Self {
        self.on_press = on_press.map(OnPress::Direct);
        self
    }

    /// Sets the color [`Variant`] of the [`Button`].
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the [`Size`] of the [`Button`].
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the [`Shape`] of the [`Button`].
    #[must_use]
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets whether the [`Button`] is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the [`Button`] is busy.
    ///
    /// A loading button shows an indicator instead of its content.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sets whether the [`Button`] looks pressed.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets whether the [`Button`] is wider than its content.
    #[must_use]
    pub fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }

    /// Sets whether the [`Button`] fills the width of its parent.
    #[must_use]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Sets whether the [`Button`] has a glass effect.
    #[must_use]
    pub fn glass(mut self, glass: bool) -> Self {
        self.glass = glass;
        self
    }

    /// Sets the icon shown before the content.
    #[must_use]
    pub fn start_icon(mut self, icon: impl Into<Element<'a, Message>>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    /// Sets the icon shown after the content.
    #[must_use]
    pub fn end_icon(mut self, icon: impl Into<Element<'a, Message>>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    /// Sets the accessible label of the [`Button`].
    ///
    /// By default, the first text of the content is used.
    #[must_use]
    pub fn accessibility_label(mut self, label: impl AsRef<str>) -> Self {
        self.label = Some(SmolStr::new(label));
        self
    }

    /// Adds style classes to the [`Button`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.class.extend_from(classes);
        self
    }

    /// Adds style classes to the text content of the [`Button`].
    #[must_use]
    pub fn text_style(mut self, classes: &str) -> Self {
        self.text_class.extend_from(classes);
        self
    }

    fn is_enabled(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn elements(&self) -> Vec<&Element<'a, Message>> {
        std::iter::once(&self.content)
            .chain(self.start_icon.as_ref())
            .chain(self.end_icon.as_ref())
            .collect()
    }

    fn classes(&self) -> ClassList {
        let mut classes = ClassList::new().with("btn");

        if let Some(variant) = self.variant {
            classes.push(&format!("btn-{variant}"));
        }

        if self.size != Size::Md {
            classes.push(&format!("btn-{}", self.size));
        }

        match self.shape {
            Some(Shape::Circle) => classes.push("btn-circle"),
            Some(Shape::Square) => classes.push("btn-square"),
            Some(Shape::Rounded) => classes.push("rounded-full"),
            None => {}
        }

        for (enabled, token) in [
            (self.active, "btn-active"),
            (self.wide, "btn-wide"),
            (self.full_width, "w-full"),
            (self.glass, "glass"),
            (self.disabled, "btn-disabled"),
        ] {
            if enabled {
                classes.push(token);
            }
        }

        classes.append(&self.class);
        classes
    }

    fn reconcile(&self, tree: &mut Tree) {
        if tree.children.len() != self.elements().len() {
            log::warn!("Button: state tree out of sync, reinitializing");
            tree.children = self.elements().into_iter().map(Tree::new).collect();
        }
    }
}

impl<'a, Message> Widget<Message> for Button<'a, Message>
where
    Message: Clone,
{
    fn children(&self) -> Vec<Tree> {
        self.elements().into_iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.elements());
    }

    fn render(&mut self, tree: &mut Tree, frame: &Frame) -> Node {
        self.reconcile(tree);

        let mut trees = tree.children.iter_mut();
        let mut render = |element: &mut Element<'a, Message>| {
            trees
                .next()
                .map(|tree| element.as_widget_mut().render(tree, frame))
        };

        let content = render(&mut self.content);
        let start = self.start_icon.as_mut().and_then(&mut render);
        let end = self.end_icon.as_mut().and_then(&mut render);

        let label = self
            .label
            .clone()
            .or_else(|| content.as_ref().and_then(Node::first_text).cloned());

        let body = if self.loading {
            Some(Node::new(Role::Indicator).classes(ClassList::from("loading loading-spinner")))
        } else {
            content.map(|mut content| {
                if content.role == Role::Text {
                    content.classes.append(&self.text_class);
                }

                content
            })
        };

        Node::new(Role::Button)
            .id(self.id.clone())
            .label(label)
            .classes(self.classes())
            .pressable()
            .disabled(!self.is_enabled())
            .extend(start.into_iter().chain(body).chain(end))
    }

    fn update(&mut self, tree: &mut Tree, event: &Event, shell: &mut Shell<'_, Message>) {
        self.reconcile(tree);

        let mut trees = tree.children.iter_mut();

        if let Some(content_tree) = trees.next() {
            if !self.loading {
                self.content
                    .as_widget_mut()
                    .update(content_tree, event, shell);
            }
        }

        for (icon, icon_tree) in self
            .start_icon
            .iter_mut()
            .chain(self.end_icon.iter_mut())
            .zip(trees)
        {
            if shell.is_event_captured() {
                return;
            }

            icon.as_widget_mut().update(icon_tree, event, shell);
        }

        if shell.is_event_captured() {
            return;
        }

        if let Event::Press(target) = event {
            if *target != self.id {
                return;
            }

            if !self.is_enabled() {
                log::trace!("Button {}: press ignored while disabled or loading", self.id);
                return;
            }

            if let Some(on_press) = &self.on_press {
                shell.publish(on_press.get());
            }

            shell.capture_event();
        }
    }
}

impl<'a, Message> From<Button<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(button: Button<'a, Message>) -> Self {
        Self::new(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(button: &Button<'_, ()>) -> String {
        button.classes().to_string()
    }

    #[test]
    fn default_button_only_has_base_class() {
        assert_eq!(classes(&Button::new("Click me")), "btn");
    }

    #[test]
    fn modifiers_map_to_class_tokens() {
        let button = Button::new("Complex")
            .variant(Variant::Primary)
            .size(Size::Lg)
            .shape(Shape::Rounded)
            .active(true)
            .wide(true)
            .full_width(true)
            .glass(true)
            .disabled(true)
            .style("custom");

        assert_eq!(
            classes(&button),
            "btn btn-primary btn-lg rounded-full btn-active btn-wide w-full glass btn-disabled custom"
        );
    }

    #[test]
    fn loading_and_disabled_buttons_are_not_enabled() {
        assert!(Button::<()>::new("a").is_enabled());
        assert!(!Button::<()>::new("a").loading(true).is_enabled());
        assert!(!Button::<()>::new("a").disabled(true).is_enabled());
    }
}
