//! The rendered output of a frame.
use crate::ClassList;
use crate::widget::Id;

use smol_str::SmolStr;

/// What a [`Node`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A plain container.
    View,
    /// A run of text.
    Text,
    /// A button.
    Button,
    /// A busy indicator, shown in place of a label.
    Indicator,
    /// The root of a menu.
    Menu,
    /// An interactive menu entry.
    MenuItem,
    /// A non-interactive menu heading.
    MenuTitle,
    /// A menu group opened from a trigger label.
    Dropdown,
    /// A disclosure-style menu group.
    Details,
    /// The root of a drawer.
    Drawer,
    /// The main content of a drawer.
    Content,
    /// The side region of a drawer: overlay and panel.
    Side,
    /// The dismiss surface behind a drawer panel.
    Overlay,
    /// The drawer panel holding the side content.
    Panel,
}

/// A node of the rendered tree.
///
/// The host walks this tree to create platform views; class tokens are
/// mapped to styles by the styling engine of the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The [`Role`] of the node.
    pub role: Role,
    /// The [`Id`] of the widget that produced the node, if any.
    pub id: Option<Id>,
    /// The text displayed by the node.
    pub text: Option<SmolStr>,
    /// The accessible label of the node.
    pub label: Option<SmolStr>,
    /// The style classes of the node.
    pub classes: ClassList,
    /// Whether the node accepts presses.
    pub pressable: bool,
    /// Whether the node is disabled.
    pub disabled: bool,
    /// The children of the node.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty [`Node`] with the given [`Role`].
    pub fn new(role: Role) -> Self {
        Self {
            role,
            id: None,
            text: None,
            label: None,
            classes: ClassList::new(),
            pressable: false,
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Sets the [`Id`] of the [`Node`].
    #[must_use]
    pub fn id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the [`Id`] of the [`Node`], if `Some`.
    #[must_use]
    pub fn id_maybe(mut self, id: Option<Id>) -> Self {
        self.id = id;
        self
    }

    /// Sets the text of the [`Node`].
    #[must_use]
    pub fn text(mut self, text: impl Into<SmolStr>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the accessible label of the [`Node`], if `Some`.
    #[must_use]
    pub fn label(mut self, label: Option<SmolStr>) -> Self {
        self.label = label;
        self
    }

    /// Sets the style classes of the [`Node`].
    #[must_use]
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    /// Marks the [`Node`] as pressable.
    #[must_use]
    pub fn pressable(mut self) -> Self {
        self.pressable = true;
        self
    }

    /// Sets whether the [`Node`] is disabled.
    ///
    /// A disabled node may still be pressable, but ignores presses.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn push(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends many children.
    #[must_use]
    pub fn extend(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns an iterator over this node and all of its descendants, in
    /// depth-first order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Returns the first text found in this subtree.
    pub fn first_text(&self) -> Option<&SmolStr> {
        self.descendants().find_map(|node| node.text.as_ref())
    }

    /// Returns the chain of nodes from this node down to the first node
    /// matching `predicate`, both included.
    pub fn path_to(&self, predicate: &impl Fn(&Node) -> bool) -> Option<Vec<&Node>> {
        if predicate(self) {
            return Some(vec![self]);
        }

        self.children.iter().find_map(|child| {
            let mut path = child.path_to(predicate)?;
            path.insert(0, self);
            Some(path)
        })
    }
}

/// A depth-first iterator over a [`Node`] tree.
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        self.stack.extend(node.children.iter().rev());

        Some(node)
    }
}
