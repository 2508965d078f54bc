//! Color roles and the per-scheme tables that back them.

use crate::Color;

use super::{ColorScheme, ThemeOverride};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A semantic color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Body text.
    Text,
    /// Screen and surface background.
    Background,
    /// Accent used for active elements.
    Tint,
    /// Icons.
    Icon,
    /// Icons of inactive tabs.
    TabIconDefault,
    /// Icon of the selected tab.
    TabIconSelected,
}

impl ColorRole {
    /// All the recognized roles.
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Text,
        ColorRole::Background,
        ColorRole::Tint,
        ColorRole::Icon,
        ColorRole::TabIconDefault,
        ColorRole::TabIconSelected,
    ];

    /// Returns the key naming this role in color tables.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Text => "text",
            ColorRole::Background => "background",
            ColorRole::Tint => "tint",
            ColorRole::Icon => "icon",
            ColorRole::TabIconDefault => "tabIconDefault",
            ColorRole::TabIconSelected => "tabIconSelected",
        }
    }
}

impl FromStr for ColorRole {
    type Err = ParseRoleError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.key() == key)
            .ok_or_else(|| ParseRoleError(key.to_owned()))
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The key given to [`ColorRole::from_str`] names no role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color role `{0}`")]
pub struct ParseRoleError(pub String);

/// The colors of every [`ColorRole`] for a single scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Palette {
    /// [`ColorRole::Text`]
    pub text: Color,
    /// [`ColorRole::Background`]
    pub background: Color,
    /// [`ColorRole::Tint`]
    pub tint: Color,
    /// [`ColorRole::Icon`]
    pub icon: Color,
    /// [`ColorRole::TabIconDefault`]
    pub tab_icon_default: Color,
    /// [`ColorRole::TabIconSelected`]
    pub tab_icon_selected: Color,
}

impl Palette {
    /// The default light palette.
    pub const fn light() -> Self {
        Self {
            text: Color::from_static("#11181C"),
            background: Color::from_static("#fff"),
            tint: Color::from_static("#0a7ea4"),
            icon: Color::from_static("#687076"),
            tab_icon_default: Color::from_static("#687076"),
            tab_icon_selected: Color::from_static("#0a7ea4"),
        }
    }

    /// The default dark palette.
    pub const fn dark() -> Self {
        Self {
            text: Color::from_static("#ECEDEE"),
            background: Color::from_static("#151718"),
            tint: Color::from_static("#fff"),
            icon: Color::from_static("#9BA1A6"),
            tab_icon_default: Color::from_static("#9BA1A6"),
            tab_icon_selected: Color::from_static("#fff"),
        }
    }

    /// Returns the color of the given role.
    pub fn get(&self, role: ColorRole) -> &Color {
        match role {
            ColorRole::Text => &self.text,
            ColorRole::Background => &self.background,
            ColorRole::Tint => &self.tint,
            ColorRole::Icon => &self.icon,
            ColorRole::TabIconDefault => &self.tab_icon_default,
            ColorRole::TabIconSelected => &self.tab_icon_selected,
        }
    }
}

/// The light and dark palettes of an application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Colors {
    /// The palette used for [`ColorScheme::Light`] and [`ColorScheme::Unknown`].
    pub light: Palette,
    /// The palette used for [`ColorScheme::Dark`].
    pub dark: Palette,
}

impl Colors {
    /// Returns the palette for the given scheme.
    ///
    /// An unknown scheme reads the light palette.
    pub fn palette(&self, scheme: ColorScheme) -> &Palette {
        match scheme.effective() {
            ColorScheme::Dark => &self.dark,
            ColorScheme::Light | ColorScheme::Unknown => &self.light,
        }
    }

    /// Resolves the color of `role` for `scheme`, honoring the overrides.
    pub fn resolve(&self, scheme: ColorScheme, overrides: &ThemeOverride, role: ColorRole) -> Color {
        overrides
            .get(scheme)
            .cloned()
            .unwrap_or_else(|| self.palette(scheme).get(role).clone())
    }

    /// Resolves the color named by `key` for `scheme`, honoring the overrides.
    ///
    /// Returns `None` when `key` is not a recognized role and no override
    /// applies.
    pub fn resolve_key(
        &self,
        scheme: ColorScheme,
        overrides: &ThemeOverride,
        key: &str,
    ) -> Option<Color> {
        if let Some(color) = overrides.get(scheme) {
            return Some(color.clone());
        }

        match key.parse::<ColorRole>() {
            Ok(role) => Some(self.palette(scheme).get(role).clone()),
            Err(error) => {
                log::trace!("{error}; resolving to nothing");
                None
            }
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}
