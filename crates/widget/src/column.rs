//! Distribute content vertically.
use crate::core::widget::{Id, Tree};
use crate::core::{ClassList, Element, Event, Frame, Node, Role, Shell, Widget};

/// A container that distributes its contents vertically.
///
/// # Example
/// ```no_run
/// use petal_ui_widget::core::Element;
/// use petal_ui_widget::{button, column};
///
/// #[derive(Debug, Clone)]
/// enum Message {
///     Save,
/// }
///
/// fn view<'a>() -> Element<'a, Message> {
///     column![
///         "Unsaved changes",
///         button("Save").on_press(Message::Save),
///     ]
///     .into()
/// }
/// ```
pub struct Column<'a, Message> {
    id: Option<Id>,
    class: ClassList,
    children: Vec<Element<'a, Message>>,
}

impl<'a, Message> Column<'a, Message> {
    /// Creates an empty [`Column`].
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a [`Column`] from an already allocated [`Vec`].
    pub fn from_vec(children: Vec<Element<'a, Message>>) -> Self {
        Self {
            id: None,
            class: ClassList::new(),
            children,
        }
    }

    /// Creates a [`Column`] with the given elements.
    pub fn with_children(children: impl IntoIterator<Item = Element<'a, Message>>) -> Self {
        Self::from_vec(children.into_iter().collect())
    }

    /// Sets the [`Id`] of the [`Column`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds style classes to the [`Column`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.class.extend_from(classes);
        self
    }

    /// Adds an element to the [`Column`].
    #[must_use]
    pub fn push(mut self, child: impl Into<Element<'a, Message>>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl<Message> Default for Column<'_, Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Message> FromIterator<Element<'a, Message>> for Column<'a, Message> {
    fn from_iter<T: IntoIterator<Item = Element<'a, Message>>>(iter: T) -> Self {
        Self::with_children(iter)
    }
}

impl<Message> Widget<Message> for Column<'_, Message> {
    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children.iter().collect::<Vec<_>>());
    }

    fn render(&mut self, tree: &mut Tree, frame: &Frame) -> Node {
        let children: Vec<Node> = self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .map(|(child, tree)| child.as_widget_mut().render(tree, frame))
            .collect();

        Node::new(Role::View)
            .id_maybe(self.id.clone())
            .classes(self.class.clone())
            .extend(children)
    }

    fn update(&mut self, tree: &mut Tree, event: &Event, shell: &mut Shell<'_, Message>) {
        for (child, tree) in self.children.iter_mut().zip(&mut tree.children) {
            child.as_widget_mut().update(tree, event, shell);

            if shell.is_event_captured() {
                return;
            }
        }
    }
}

impl<'a, Message> From<Column<'a, Message>> for Element<'a, Message>
where
    Message: 'a,
{
    fn from(column: Column<'a, Message>) -> Self {
        Self::new(column)
    }
}
