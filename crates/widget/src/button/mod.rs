//! Button widgets and their visual options.
//!
//! This module provides the [`Button`] widget plus the enumerations driving
//! its appearance:
//! - [`Variant`] - the semantic color of the button
//! - [`Shape`] - circle, square or fully rounded corners
//!
//! # Example
//! ```no_run
//! use petal_ui_widget::button::{self, Shape, Variant};
//! use petal_ui_widget::core::{Element, Size};
//!
//! #[derive(Clone)]
//! enum Message {
//!     Save,
//! }
//!
//! fn view<'a>() -> Element<'a, Message> {
//!     button::Button::new("Save")
//!         .variant(Variant::Primary)
//!         .size(Size::Lg)
//!         .shape(Shape::Rounded)
//!         .on_press(Message::Save)
//!         .into()
//! }
//! ```

mod widget;

pub(crate) use widget::OnPress;
pub use widget::*;

use std::fmt;
use std::str::FromStr;

/// The semantic color of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Neutral, low emphasis.
    Neutral,
    /// The main brand color.
    Primary,
    /// The secondary brand color.
    Secondary,
    /// An accent color.
    Accent,
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Potentially dangerous.
    Warning,
    /// Destructive or failed.
    Error,
    /// Transparent until hovered.
    Ghost,
    /// Looks like a link.
    Link,
}

impl Variant {
    /// All the variants.
    pub const ALL: [Variant; 10] = [
        Variant::Neutral,
        Variant::Primary,
        Variant::Secondary,
        Variant::Accent,
        Variant::Info,
        Variant::Success,
        Variant::Warning,
        Variant::Error,
        Variant::Ghost,
        Variant::Link,
    ];

    /// Returns the name of the variant, as used in class tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Neutral => "neutral",
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Accent => "accent",
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Error => "error",
            Variant::Ghost => "ghost",
            Variant::Link => "link",
        }
    }

    /// Parses a variant name, returning `None` (no variant) for unknown
    /// names.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse()
            .map_err(|error| log::warn!("{error}; rendering without a color"))
            .ok()
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == name)
            .ok_or_else(|| ParseError::Variant(name.to_owned()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A circle; meant for icon-only buttons.
    Circle,
    /// A square; meant for icon-only buttons.
    Square,
    /// Fully rounded corners.
    Rounded,
}

impl Shape {
    /// Returns the name of the shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Rounded => "rounded",
        }
    }

    /// Parses a shape name, returning `None` (the default shape) for unknown
    /// names.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse()
            .map_err(|error| log::warn!("{error}; using the default shape"))
            .ok()
    }
}

impl FromStr for Shape {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        [Shape::Circle, Shape::Square, Shape::Rounded]
            .into_iter()
            .find(|shape| shape.as_str() == name)
            .ok_or_else(|| ParseError::Shape(name.to_owned()))
    }
}

/// A button option could not be parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unknown [`Variant`] name.
    #[error("unknown button color `{0}`")]
    Variant(String),
    /// Unknown [`Shape`] name.
    #[error("unknown button shape `{0}`")]
    Shape(String),
}
