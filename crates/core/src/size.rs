//! The shared component size scale.
use std::fmt;
use std::str::FromStr;

/// The size of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium, the default.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    /// All the sizes, smallest first.
    pub const ALL: [Size; 4] = [Size::Xs, Size::Sm, Size::Md, Size::Lg];

    /// Returns the short name of the size, as used in class tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    /// Parses a size name, falling back to [`Size::Md`] for unknown names.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|error| {
            log::warn!("{error}; using the default size");
            Size::default()
        })
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == name)
            .ok_or_else(|| ParseSizeError(name.to_owned()))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name given to [`Size::from_str`] is not a size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size `{0}`")]
pub struct ParseSizeError(pub String);
