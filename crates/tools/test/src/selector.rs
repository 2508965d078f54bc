//! Select nodes of a rendered user interface.
use crate::core::widget::Id;
use crate::core::{Node, Role, SmolStr};

use std::fmt;

/// A query for nodes of a rendered [`Node`] tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Matches the node with the given [`Id`].
    Id(Id),
    /// Matches a node displaying exactly the given text.
    Text(SmolStr),
    /// Matches a node with the given accessible label.
    Label(SmolStr),
    /// Matches a node with the given [`Role`].
    Role(Role),
}

impl Selector {
    /// Returns true if the [`Node`] matches the [`Selector`].
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Selector::Id(id) => node.id.as_ref() == Some(id),
            Selector::Text(text) => node.text.as_ref() == Some(text),
            Selector::Label(label) => node.label.as_ref() == Some(label),
            Selector::Role(role) => node.role == *role,
        }
    }

    /// Finds the first [`Node`] matching the [`Selector`], depth-first.
    pub fn find<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        root.descendants().find(|node| self.matches(node))
    }

    /// Finds every [`Node`] matching the [`Selector`], depth-first.
    pub fn find_all<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.descendants().filter(|node| self.matches(node)).collect()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "id == {id}"),
            Selector::Text(text) => write!(f, "text == {text:?}"),
            Selector::Label(label) => write!(f, "label == {label:?}"),
            Selector::Role(role) => write!(f, "role == {role:?}"),
        }
    }
}

impl From<Id> for Selector {
    fn from(id: Id) -> Self {
        Selector::Id(id)
    }
}

impl From<&str> for Selector {
    fn from(text: &str) -> Self {
        Selector::Text(SmolStr::new(text))
    }
}

impl From<String> for Selector {
    fn from(text: String) -> Self {
        Selector::Text(SmolStr::new(text))
    }
}

impl From<Role> for Selector {
    fn from(role: Role) -> Self {
        Selector::Role(role)
    }
}

/// Creates a [`Selector`] matching the node with the given [`Id`].
pub fn id(id: impl Into<Id>) -> Selector {
    Selector::Id(id.into())
}

/// Creates a [`Selector`] matching a node displaying the given text.
pub fn text(text: impl AsRef<str>) -> Selector {
    Selector::Text(SmolStr::new(text))
}

/// Creates a [`Selector`] matching a node with the given accessible label.
pub fn label(label: impl AsRef<str>) -> Selector {
    Selector::Label(SmolStr::new(label))
}

/// Creates a [`Selector`] matching a node with the given [`Role`].
pub fn role(role: Role) -> Selector {
    Selector::Role(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_their_field() {
        let node = Node::new(Role::MenuItem)
            .id(Id::new("inbox"))
            .label(Some(SmolStr::new("Inbox")))
            .push(Node::new(Role::Text).text("Inbox (3)"));

        assert!(id("inbox").matches(&node));
        assert!(label("Inbox").matches(&node));
        assert!(role(Role::MenuItem).matches(&node));
        assert!(!text("Inbox").matches(&node));

        assert_eq!(
            Selector::from("Inbox (3)").find(&node).map(|node| node.role),
            Some(Role::Text)
        );
    }
}
