use crate::widget::{Tree, Widget, tree};
use crate::{Event, Frame, Node, Shell};

/// A generic [`Widget`].
///
/// It is useful to build composable user interfaces that do not leak
/// implementation details in their __view logic__.
///
/// If you have a [built-in widget], you should be able to use `Into<Element>`
/// to turn it into an [`Element`].
///
/// [built-in widget]: https://docs.rs/petal_ui_widget
pub struct Element<'a, Message> {
    widget: Box<dyn Widget<Message> + 'a>,
}

impl<'a, Message> Element<'a, Message> {
    /// Creates a new [`Element`] containing the given [`Widget`].
    pub fn new(widget: impl Widget<Message> + 'a) -> Self {
        Self {
            widget: Box::new(widget),
        }
    }

    /// Returns a reference to the [`Widget`] of the [`Element`].
    pub fn as_widget(&self) -> &dyn Widget<Message> {
        self.widget.as_ref()
    }

    /// Returns a mutable reference to the [`Widget`] of the [`Element`].
    pub fn as_widget_mut(&mut self) -> &mut dyn Widget<Message> {
        self.widget.as_mut()
    }

    /// Applies a transformation to the produced message of the [`Element`].
    ///
    /// This lets a component with its own message type be embedded in a
    /// larger application, such as a menu living inside a drawer.
    pub fn map<B>(self, f: impl Fn(Message) -> B + 'a) -> Element<'a, B>
    where
        Message: 'a,
        B: 'a,
    {
        Element::new(Map {
            widget: self.widget,
            mapper: Box::new(f),
        })
    }
}

impl<Message> std::fmt::Debug for Element<'_, Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").finish_non_exhaustive()
    }
}

struct Map<'a, A, B> {
    widget: Box<dyn Widget<A> + 'a>,
    mapper: Box<dyn Fn(A) -> B + 'a>,
}

impl<A, B> Widget<B> for Map<'_, A, B> {
    fn tag(&self) -> tree::Tag {
        self.widget.tag()
    }

    fn state(&self) -> tree::State {
        self.widget.state()
    }

    fn children(&self) -> Vec<Tree> {
        self.widget.children()
    }

    fn diff(&self, tree: &mut Tree) {
        self.widget.diff(tree);
    }

    fn render(&mut self, tree: &mut Tree, frame: &Frame) -> Node {
        self.widget.render(tree, frame)
    }

    fn update(&mut self, tree: &mut Tree, event: &Event, shell: &mut Shell<'_, B>) {
        let mut local_messages = Vec::new();
        let mut local_shell = Shell::new(&mut local_messages);

        self.widget.update(tree, event, &mut local_shell);

        shell.merge(local_shell, &self.mapper);
    }
}
