//! A renderer-agnostic runtime for petal_ui.
//!
//! The runtime drives a tree of widgets through frames: it reconciles the
//! persistent widget state, renders the [`Node`](core::Node) tree handed to the
//! host and delivers events back to the widgets.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod user_interface;

pub use petal_ui_core as core;

pub use user_interface::UserInterface;
