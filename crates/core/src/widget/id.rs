use smol_str::SmolStr;

use std::fmt;
use std::sync::atomic::{self, AtomicU64};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// The identifier of a widget.
///
/// Pressable widgets receive [`Event::Press`](crate::Event::Press) through
/// their [`Id`]. Custom identifiers double as stable test handles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(Internal);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Internal {
    Unique(u64),
    Custom(SmolStr),
}

impl Id {
    /// Creates a custom [`Id`].
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Internal::Custom(SmolStr::new(id)))
    }

    /// Creates a unique [`Id`].
    ///
    /// This function produces a different [`Id`] every time it is called.
    pub fn unique() -> Self {
        let id = NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed);

        Self(Internal::Unique(id))
    }

    /// Returns the custom name of the [`Id`], if it has one.
    pub fn name(&self) -> Option<&str> {
        match &self.0 {
            Internal::Custom(name) => Some(name.as_str()),
            Internal::Unique(_) => None,
        }
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Internal::Unique(id) => write!(f, "#{id}"),
            Internal::Custom(name) => f.write_str(name),
        }
    }
}
