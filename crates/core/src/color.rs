//! Colors as handed to the styling engine.
use smol_str::SmolStr;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color token.
///
/// A [`Color`] is kept exactly as the caller or the palette spelled it
/// (`#fff`, `#11181C`, a CSS name...). The styling engine of the host is the
/// one interpreting it; [`Color::to_rgba`] is offered for hosts that need
/// numeric channels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Color(SmolStr);

impl Color {
    /// Creates a [`Color`] from a short static string, in a `const` context.
    ///
    /// The value must fit in 23 bytes.
    pub const fn from_static(value: &'static str) -> Self {
        Self(SmolStr::new_inline(value))
    }

    /// Creates a new [`Color`] from any string.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    /// Returns the color token as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns `true` if the token is empty.
    ///
    /// An empty color is falsy: resolution treats it as absent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a hexadecimal token (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`)
    /// into its [`Rgba`] channels.
    pub fn to_rgba(&self) -> Result<Rgba, ParseError> {
        let hex = self
            .0
            .strip_prefix('#')
            .ok_or_else(|| ParseError::MissingHash(self.0.clone()))?;

        if let Some(invalid) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidDigit(invalid));
        }

        let digits: Vec<u8> = hex
            .bytes()
            .map(|b| match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => b - b'A' + 10,
            })
            .collect();

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits.iter().map(|d| d * 17).collect(),
            6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            length => return Err(ParseError::InvalidLength(length)),
        };

        let alpha = channels.get(3).copied().unwrap_or(u8::MAX);

        Ok(Rgba::from_rgba8(channels[0], channels[1], channels[2], alpha))
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color in the sRGB color space, with channels between `0.0` and `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// Red component, 0.0 - 1.0
    pub r: f32,
    /// Green component, 0.0 - 1.0
    pub g: f32,
    /// Blue component, 0.0 - 1.0
    pub b: f32,
    /// Transparency, 0.0 - 1.0
    pub a: f32,
}

impl Rgba {
    /// Creates an [`Rgba`] from its 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Returns the channels as 8-bit values.
    pub fn into_rgba8(self) -> [u8; 4] {
        // Channels are clamped first, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let to_u8 = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;

        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

/// An error produced when a [`Color`] cannot be read as hexadecimal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token does not start with `#`.
    #[error("color `{0}` does not start with `#`")]
    MissingHash(SmolStr),
    /// The token has an unsupported number of digits.
    #[error("expected 3, 4, 6 or 8 hexadecimal digits, found {0}")]
    InvalidLength(usize),
    /// The token contains a non-hexadecimal character.
    #[error("invalid hexadecimal digit `{0}`")]
    InvalidDigit(char),
}
