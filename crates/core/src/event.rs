//! Handle events of a user interface.
use crate::time::Instant;
use crate::widget::Id;

/// A user interface event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The pressable widget with the given [`Id`] was pressed.
    Press(Id),

    /// The platform asked to go back (hardware back button, browser history,
    /// escape gesture...).
    BackRequested,

    /// A new frame is about to be rendered.
    ///
    /// Widgets with timed transitions advance them on ticks.
    Tick(Instant),
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any widget.
    Ignored,

    /// The [`Event`] was handled and processed by a widget.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use petal_ui_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
