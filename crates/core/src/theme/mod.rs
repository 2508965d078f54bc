//! Light and dark theme colors.
//!
//! A color is resolved from three inputs:
//! - the [`ColorScheme`] reported by a [`ColorSchemeSource`],
//! - a per-call [`ThemeOverride`],
//! - the process-wide [`Colors`] table, installed once at startup.
//!
//! The override for the effective scheme wins when it is present and not
//! empty. Otherwise the palette entry of the requested role is used. An
//! unknown scheme reads the light palette.
//!
//! ```
//! use petal_ui_core::theme::{self, ColorRole, ColorScheme, ThemeOverride};
//!
//! let background = theme::resolve(
//!     ColorScheme::Dark,
//!     &ThemeOverride::default(),
//!     ColorRole::Background,
//! );
//!
//! assert_eq!(background, "#151718");
//! ```

mod loader;
pub mod palette;
mod scheme;

#[cfg(test)]
mod tests;

pub use loader::{LoadError, load_colors_from_file};
pub use palette::{ColorRole, Colors, Palette, ParseRoleError};
pub use scheme::{ColorScheme, ColorSchemeSource, Fixed, Manual, use_color_scheme};

use crate::Color;

use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colors supplied at a call site to replace the palette for one scheme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThemeOverride {
    /// Replaces the palette when the effective scheme is light.
    pub light: Option<Color>,
    /// Replaces the palette when the effective scheme is dark.
    pub dark: Option<Color>,
}

impl ThemeOverride {
    /// Creates an empty [`ThemeOverride`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the light color.
    #[must_use]
    pub fn light(mut self, color: impl Into<Color>) -> Self {
        self.light = Some(color.into());
        self
    }

    /// Sets the dark color.
    #[must_use]
    pub fn dark(mut self, color: impl Into<Color>) -> Self {
        self.dark = Some(color.into());
        self
    }

    /// Returns the override that applies to `scheme`, if any.
    ///
    /// Empty colors count as absent.
    pub fn get(&self, scheme: ColorScheme) -> Option<&Color> {
        let color = match scheme.effective() {
            ColorScheme::Dark => self.dark.as_ref(),
            ColorScheme::Light | ColorScheme::Unknown => self.light.as_ref(),
        };

        color.filter(|color| !color.is_empty())
    }
}

static COLORS: OnceLock<Colors> = OnceLock::new();

/// Installs the process-wide [`Colors`] table.
///
/// This can only happen once, and must happen before the first call to
/// [`colors`]; otherwise the defaults are already in place.
pub fn install(colors: Colors) -> Result<(), InstallError> {
    COLORS.set(colors).map_err(|_| InstallError)
}

/// Returns the process-wide [`Colors`] table.
///
/// The default palettes are installed on first use if [`install`] was never
/// called.
pub fn colors() -> &'static Colors {
    COLORS.get_or_init(Colors::default)
}

/// [`install`] was called after a table was already in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a color table is already installed")]
pub struct InstallError;

/// Resolves `role` against the installed [`Colors`].
pub fn resolve(scheme: ColorScheme, overrides: &ThemeOverride, role: ColorRole) -> Color {
    colors().resolve(scheme, overrides, role)
}

/// Resolves the role named `key` against the installed [`Colors`].
///
/// Returns `None` if `key` names no role and no override applies.
pub fn resolve_key(scheme: ColorScheme, overrides: &ThemeOverride, key: &str) -> Option<Color> {
    colors().resolve_key(scheme, overrides, key)
}

/// Resolves the role named `key` for the preference currently reported by
/// `source`.
///
/// The source is read on every call, so a scheme change is observed by the
/// next resolution.
pub fn use_theme_color(
    source: &(impl ColorSchemeSource + ?Sized),
    overrides: &ThemeOverride,
    key: &str,
) -> Option<Color> {
    let signal = use_color_scheme(source);
    let scheme = ColorScheme::from_signal(signal.as_deref());

    resolve_key(scheme, overrides, key)
}
