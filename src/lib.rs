//! petal_ui is a small cross-platform component kit.
//!
//! It provides a themed [`Button`](widget::Button), a compound
//! [`Menu`](widget::Menu) and a [`Drawer`](widget::Drawer), plus the theme
//! resolver every leaf uses to pick its colors. Widgets render into a
//! [`Node`] tree; the host (native or web) maps its class tokens to styles
//! and paints it.
//!
//! # Overview
//! A view is a plain function returning an [`Element`]:
//!
//! ```no_run
//! use petal_ui::widget::{Drawer, Menu, button, column, menu};
//! use petal_ui::{Element, Size};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     ToggleSidebar,
//!     CloseSidebar,
//!     Navigate(&'static str),
//! }
//!
//! fn view<'a>(sidebar_open: bool) -> Element<'a, Message> {
//!     let sidebar = Menu::new()
//!         .vertical(true)
//!         .size(Size::Lg)
//!         .push(menu::Title::new("Pages"))
//!         .push(menu::Item::with_text("Home").on_press(Message::Navigate("home")))
//!         .push(
//!             menu::Item::with_text("Admin")
//!                 .disabled(true)
//!                 .on_press(Message::Navigate("admin")),
//!         );
//!
//!     Drawer::new(sidebar)
//!         .content(column![
//!             button("Menu").on_press(Message::ToggleSidebar),
//!             "Welcome!",
//!         ])
//!         .open(sidebar_open)
//!         .on_click_overlay(Message::CloseSidebar)
//!         .into()
//! }
//! ```
//!
//! Colors come from the [`theme`] module:
//!
//! ```
//! use petal_ui::theme::{self, ColorRole, ColorScheme, ThemeOverride};
//!
//! let background = theme::resolve(
//!     ColorScheme::Dark,
//!     &ThemeOverride::new(),
//!     ColorRole::Background,
//! );
//!
//! assert_eq!(background, "#151718");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use petal_ui_core as core;
pub use petal_ui_runtime as runtime;
pub use petal_ui_widget as widget;

pub use crate::core::class;
pub use crate::core::color;
pub use crate::core::event;
pub use crate::core::node;
pub use crate::core::theme;
pub use crate::core::time;

pub use crate::core::{
    ClassList, Color, Element, Event, Frame, Node, Role, Shell, Size, SmolStr, Widget,
};
pub use crate::runtime::UserInterface;
pub use crate::runtime::user_interface::Cache;
