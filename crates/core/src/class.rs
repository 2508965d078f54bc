//! Style class tokens handed to the styling engine.
use smol_str::SmolStr;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered set of style class tokens.
///
/// Widgets emit semantic tokens (`btn`, `menu-lg`, `drawer-end`...) and let the
/// styling engine of the host turn them into platform styles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassList(Vec<SmolStr>);

impl ClassList {
    /// Creates an empty [`ClassList`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single token, unless it is empty or already present.
    pub fn push(&mut self, token: &str) {
        if token.is_empty() || self.contains(token) {
            return;
        }

        self.0.push(SmolStr::new(token));
    }

    /// Adds a single token and returns the list.
    #[must_use]
    pub fn with(mut self, token: &str) -> Self {
        self.push(token);
        self
    }

    /// Adds every whitespace-separated token of `classes`.
    pub fn extend_from(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            self.push(token);
        }
    }

    /// Appends the tokens of another list.
    pub fn append(&mut self, other: &ClassList) {
        for token in other.iter() {
            self.push(token);
        }
    }

    /// Returns true if `token` is in the list.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|existing| existing == token)
    }

    /// Returns true if the list has no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns an iterator over the tokens, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(SmolStr::as_str)
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend_from(classes);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            f.write_str(token)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_split_and_deduplicated() {
        let mut classes = ClassList::from("btn  btn-primary");
        classes.extend_from("btn custom");

        assert_eq!(classes.to_string(), "btn btn-primary custom");
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let classes = ClassList::new().with("").with("menu");

        assert_eq!(classes.iter().collect::<Vec<_>>(), ["menu"]);
    }
}
