//! Use the built-in widgets of petal_ui.
//!
//! Widgets render into a [`Node`](core::Node) tree and never paint: the host
//! maps the class tokens of every node to platform styles.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use petal_ui_core as core;

mod helpers;

pub mod button;
pub mod column;
pub mod drawer;
pub mod menu;
pub mod text;

pub use button::Button;
pub use column::Column;
pub use drawer::Drawer;
pub use helpers::*;
pub use menu::Menu;
pub use text::Text;
