//! The core library of [petal_ui].
//!
//! This library holds basic types that can be reused and re-exported in
//! different runtime implementations: the theme resolver, the widget trait,
//! the rendered [`Node`] tree, events and the [`Shell`].
//!
//! [petal_ui]: https://github.com/petal-ui/petal_ui
pub mod class;
pub mod color;
pub mod event;
pub mod node;
pub mod size;
pub mod theme;
pub mod time;
pub mod widget;

mod element;
mod frame;
mod shell;

pub use class::ClassList;
pub use color::Color;
pub use element::Element;
pub use event::Event;
pub use frame::Frame;
pub use node::{Node, Role};
pub use shell::Shell;
pub use size::Size;
pub use widget::Widget;

pub use smol_str::SmolStr;
