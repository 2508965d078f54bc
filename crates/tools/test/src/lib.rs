//! Test your petal_ui widgets in headless mode.
//!
//! # Basic Usage
//! Let's assume we want to test a drawer toggled by a button.
//!
//! We can write a `view` function for it:
//!
//! ```rust,ignore
//! use petal_ui::widget::{button, column, Drawer};
//! use petal_ui::Element;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Toggle,
//!     Close,
//! }
//!
//! fn view(open: bool) -> Element<'static, Message> {
//!     Drawer::new("Sidebar")
//!         .content(button("Menu").id("toggle").on_press(Message::Toggle))
//!         .open(open)
//!         .on_click_overlay(Message::Close)
//!         .into()
//! }
//! ```
//!
//! And build a [`Simulator`] to drive it:
//!
//! ```rust,ignore
//! use petal_ui_test::{Simulator, selector};
//!
//! let mut ui = Simulator::new(view(true));
//! assert!(ui.query("Sidebar").is_some());
//!
//! ui.press_overlay()?;
//! assert!(ui.query("Sidebar").is_none());
//!
//! let messages: Vec<Message> = ui.into_messages().collect();
//! assert!(matches!(messages.as_slice(), [Message::Close]));
//! ```
//!
//! A [`Simulator`] lives for a single view. To feed a new view to the same
//! widgets (for instance after changing the `open` input), turn the
//! simulator into its [`Cache`] and build a new one with
//! [`Simulator::with_cache`].
pub mod selector;
pub mod simulator;

pub use petal_ui_runtime as runtime;
pub use petal_ui_runtime::core;

pub use selector::Selector;
pub use simulator::{Simulator, simulator};

pub use runtime::user_interface::Cache;

/// A test error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// No node matched the given [`Selector`].
    #[error("no node matches the selector: {0}")]
    NotFound(Selector),
    /// Neither the matching node nor any of its ancestors can be pressed.
    #[error("no pressable node found for the selector: {0}")]
    NotPressable(Selector),
}
