//! Display text.
pub use crate::core::widget::text::*;
