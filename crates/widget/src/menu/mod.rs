//! Menus list actions and links, optionally grouped under titles, dropdowns
//! and disclosure sections.
//!
//! A [`Menu`] is a compound widget: the root owns the layout (orientation and
//! [`Size`]) and hands it down to every [`MenuChild`] it contains, while each
//! child only owns its own content and interactivity.
//!
//! # Example
//! ```no_run
//! use petal_ui_widget::core::{Element, Size};
//! use petal_ui_widget::menu::{self, Group, Item, Menu, Title};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Open(&'static str),
//! }
//!
//! fn view<'a>() -> Element<'a, Message> {
//!     Menu::new()
//!         .vertical(true)
//!         .size(Size::Lg)
//!         .push(Title::new("Files"))
//!         .push(Item::with_text("Recent").on_press(Message::Open("recent")))
//!         .push(menu::dropdown(
//!             Group::new("More")
//!                 .id("more")
//!                 .push(Item::with_text("Archive").on_press(Message::Open("archive"))),
//!         ))
//!         .into()
//! }
//! ```
mod group;
mod item;
mod style;

pub use group::Group;
pub use item::{Item, Title};

use crate::core::widget::{Id, Tree};
use crate::core::{ClassList, Element, Event, Frame, Node, Role, Shell, Size, SmolStr, Widget};

use std::slice;

bitflags::bitflags! {
    /// The orientation flags of a [`Menu`].
    ///
    /// Flags are not exclusive; every combination is emitted as is and the
    /// styling engine decides which one wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Lays items out in a column.
        const VERTICAL = 1;
        /// Lays items out in a row.
        const HORIZONTAL = 1 << 1;
        /// Switches to a row on large screens.
        const RESPONSIVE = 1 << 2;
    }
}

/// The layout a [`Menu`] hands down to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// The orientation flags of the root.
    pub flags: Flags,
    /// The [`Size`] of the root.
    pub size: Size,
}

impl Layout {
    /// The layout of a sub-part rendered outside of any [`Menu`].
    pub fn detached() -> Self {
        Self {
            flags: Flags::empty(),
            size: Size::Md,
        }
    }
}

/// A child of a [`Menu`].
pub enum MenuChild<'a, Message> {
    /// An interactive entry.
    Item(Item<'a, Message>),
    /// A non-interactive heading.
    Title(Title),
    /// A group opened from its label.
    Dropdown(Group<'a, Message>),
    /// A disclosure group.
    Details(Group<'a, Message>),
}

impl<'a, Message> MenuChild<'a, Message> {
    /// Collects the elements owning a state tree, depth-first, in the order
    /// they are rendered and updated.
    pub(crate) fn elements<'b>(&'b self, out: &mut Vec<&'b Element<'a, Message>>) {
        match self {
            MenuChild::Item(item) => out.extend(item.element()),
            MenuChild::Title(_) => {}
            MenuChild::Dropdown(group) | MenuChild::Details(group) => {
                for child in group.children() {
                    child.elements(out);
                }
            }
        }
    }

    pub(crate) fn render(
        &mut self,
        layout: Layout,
        trees: &mut slice::IterMut<'_, Tree>,
        frame: &Frame,
    ) -> Node {
        match self {
            MenuChild::Item(item) => item.render(layout, trees, frame),
            MenuChild::Title(title) => title.render(),
            MenuChild::Dropdown(group) => group.render(Role::Dropdown, layout, trees, frame),
            MenuChild::Details(group) => group.render(Role::Details, layout, trees, frame),
        }
    }

    pub(crate) fn update(
        &mut self,
        trees: &mut slice::IterMut<'_, Tree>,
        event: &Event,
        shell: &mut Shell<'_, Message>,
    ) where
        Message: Clone,
    {
        match self {
            MenuChild::Item(item) => item.update(trees, event, shell),
            MenuChild::Title(_) => {}
            MenuChild::Dropdown(group) | MenuChild::Details(group) => {
                group.update(trees, event, shell);
            }
        }
    }
}

impl<'a, Message> From<Item<'a, Message>> for MenuChild<'a, Message> {
    fn from(item: Item<'a, Message>) -> Self {
        MenuChild::Item(item)
    }
}

impl<Message> From<Title> for MenuChild<'_, Message> {
    fn from(title: Title) -> Self {
        MenuChild::Title(title)
    }
}

/// Wraps a [`Group`] as a dropdown [`MenuChild`].
pub fn dropdown<'a, Message>(group: Group<'a, Message>) -> MenuChild<'a, Message> {
    MenuChild::Dropdown(group)
}

/// Wraps a [`Group`] as a disclosure [`MenuChild`].
pub fn details<'a, Message>(group: Group<'a, Message>) -> MenuChild<'a, Message> {
    MenuChild::Details(group)
}

fn child_elements<'a, 'b, Message>(
    children: &'b [MenuChild<'a, Message>],
) -> Vec<&'b Element<'a, Message>> {
    let mut elements = Vec::new();

    for child in children {
        child.elements(&mut elements);
    }

    elements
}

fn reconcile<Message>(tree: &mut Tree, elements: &[&Element<'_, Message>], owner: &str) {
    if tree.children.len() != elements.len() {
        log::warn!("{owner}: state tree out of sync, reinitializing");
        tree.children = elements.iter().map(|element| Tree::new(element)).collect();
    }
}

/// A list of [`MenuChild`]ren sharing one layout.
pub struct Menu<'a, Message> {
    id: Option<Id>,
    flags: Flags,
    size: Size,
    label: Option<SmolStr>,
    class: ClassList,
    children: Vec<MenuChild<'a, Message>>,
}

impl<'a, Message> Menu<'a, Message> {
    /// Creates an empty [`Menu`].
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    /// Creates a [`Menu`] with the given children.
    pub fn with_children(children: Vec<MenuChild<'a, Message>>) -> Self {
        Self {
            id: None,
            flags: Flags::empty(),
            size: Size::default(),
            label: None,
            class: ClassList::new(),
            children,
        }
    }

    /// Sets the [`Id`] of the [`Menu`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a child to the [`Menu`].
    #[must_use]
    pub fn push(mut self, child: impl Into<MenuChild<'a, Message>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Sets whether items are laid out in a column.
    #[must_use]
    pub fn vertical(mut self, vertical: bool) -> Self {
        self.flags.set(Flags::VERTICAL, vertical);
        self
    }

    /// Sets whether items are laid out in a row.
    #[must_use]
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.flags.set(Flags::HORIZONTAL, horizontal);
        self
    }

    /// Sets whether the [`Menu`] switches to a row on large screens.
    #[must_use]
    pub fn responsive(mut self, responsive: bool) -> Self {
        self.flags.set(Flags::RESPONSIVE, responsive);
        self
    }

    /// Sets all the orientation [`Flags`] at once.
    #[must_use]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the [`Size`] of the [`Menu`] and its items.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the accessible label of the [`Menu`].
    #[must_use]
    pub fn accessibility_label(mut self, label: impl AsRef<str>) -> Self {
        self.label = Some(SmolStr::new(label));
        self
    }

    /// Adds style classes to the [`Menu`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.class.extend_from(classes);
        self
    }

    fn layout(&self) -> Layout {
        Layout {
            flags: self.flags,
            size: self.size,
        }
    }
}

impl<Message> Default for Menu<'_, Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Message> Widget<Message> for Menu<'a, Message>
where
    Message: Clone,
{
    fn children(&self) -> Vec<Tree> {
        child_elements(&self.children)
            .into_iter()
            .map(Tree::new)
            .collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&child_elements(&self.children));
    }

    fn render(&mut self, tree: &mut Tree, frame: &Frame) -> Node {
        reconcile(tree, &child_elements(&self.children), "Menu");

        let layout = self.layout();
        let mut trees = tree.children.iter_mut();

        let children: Vec<Node> = self
            .children
            .iter_mut()
            .map(|child| child.render(layout, &mut trees, frame))
            .collect();

        Node::new(Role::Menu)
            .id_maybe(self.id.clone())
            .label(self.label.clone())
            .classes(style::root(layout, &self.class))
            .extend(children)
    }

    fn update(&mut self, tree: &mut Tree, event: &Event, shell: &mut Shell<'_, Message>) {
        reconcile(tree, &child_elements(&self.children), "Menu");

        let mut trees = tree.children.iter_mut();

        for child in &mut self.children {
            child.update(&mut trees, event, shell);

            if shell.is_event_captured() {
                return;
            }
        }
    }
}

impl<'a, Message> From<Menu<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(menu: Menu<'a, Message>) -> Self {
        Element::new(menu)
    }
}

/// A lone [`MenuChild`], rendered outside of any [`Menu`].
///
/// It renders with [`Layout::detached`].
struct Detached<'a, Message>(MenuChild<'a, Message>);

impl<'a, Message> Widget<Message> for Detached<'a, Message>
where
    Message: Clone,
{
    fn children(&self) -> Vec<Tree> {
        child_elements(slice::from_ref(&self.0))
            .into_iter()
            .map(Tree::new)
            .collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&child_elements(slice::from_ref(&self.0)));
    }

    fn render(&mut self, tree: &mut Tree, frame: &Frame) -> Node {
        reconcile(tree, &child_elements(slice::from_ref(&self.0)), "MenuChild");

        self.0
            .render(Layout::detached(), &mut tree.children.iter_mut(), frame)
    }

    fn update(&mut self, tree: &mut Tree, event: &Event, shell: &mut Shell<'_, Message>) {
        reconcile(tree, &child_elements(slice::from_ref(&self.0)), "MenuChild");

        self.0.update(&mut tree.children.iter_mut(), event, shell);
    }
}

impl<'a, Message> From<MenuChild<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(child: MenuChild<'a, Message>) -> Self {
        Element::new(Detached(child))
    }
}

impl<'a, Message> From<Item<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(item: Item<'a, Message>) -> Self {
        MenuChild::from(item).into()
    }
}

impl<'a, Message> From<Title> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(title: Title) -> Self {
        MenuChild::<'a, Message>::from(title).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_layout_has_no_flags() {
        let layout = Layout::detached();

        assert!(layout.flags.is_empty());
        assert_eq!(layout.size, Size::Md);
    }

    #[test]
    fn orientation_flags_combine() {
        let menu = Menu::<()>::new()
            .vertical(true)
            .horizontal(true)
            .responsive(true)
            .vertical(false);

        assert_eq!(menu.flags, Flags::HORIZONTAL | Flags::RESPONSIVE);
    }

    #[test]
    fn elements_are_collected_depth_first() {
        let menu = Menu::<()>::new()
            .push(Item::with_content("a"))
            .push(Title::new("title"))
            .push(dropdown(
                Group::new("group")
                    .push(Item::with_content("b"))
                    .push(Item::with_text("no content")),
            ))
            .push(Item::with_content("c"));

        assert_eq!(child_elements(&menu.children).len(), 3);
    }
}
