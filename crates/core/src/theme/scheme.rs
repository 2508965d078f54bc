//! The platform appearance preference.
use smol_str::SmolStr;

use std::cell::RefCell;

/// The appearance preference reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// The platform did not report a preference, or reported one we do not know.
    #[default]
    Unknown,
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorScheme {
    /// Interprets a raw platform signal.
    ///
    /// Only `"light"` and `"dark"` are recognized; anything else is
    /// [`ColorScheme::Unknown`].
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some("light") => ColorScheme::Light,
            Some("dark") => ColorScheme::Dark,
            _ => ColorScheme::Unknown,
        }
    }

    /// Returns the scheme used for lookups. Unknown defaults to light.
    pub fn effective(self) -> Self {
        match self {
            ColorScheme::Unknown => ColorScheme::Light,
            scheme => scheme,
        }
    }

    /// Returns the raw signal naming this scheme, if any.
    pub fn as_signal(self) -> Option<&'static str> {
        match self {
            ColorScheme::Unknown => None,
            ColorScheme::Light => Some("light"),
            ColorScheme::Dark => Some("dark"),
        }
    }
}

/// A source of the platform appearance preference.
///
/// The value may change at any time; callers read it fresh on every
/// resolution.
pub trait ColorSchemeSource {
    /// Returns the raw preference, exactly as the platform reports it.
    fn color_scheme(&self) -> Option<SmolStr>;
}

impl<T: ColorSchemeSource + ?Sized> ColorSchemeSource for &T {
    fn color_scheme(&self) -> Option<SmolStr> {
        (**self).color_scheme()
    }
}

impl ColorSchemeSource for ColorScheme {
    fn color_scheme(&self) -> Option<SmolStr> {
        self.as_signal().map(SmolStr::new)
    }
}

/// A source reporting the same raw value forever.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fixed(Option<SmolStr>);

impl Fixed {
    /// Creates a [`Fixed`] source reporting `signal`.
    pub fn new(signal: Option<&str>) -> Self {
        Self(signal.map(SmolStr::new))
    }
}

impl ColorSchemeSource for Fixed {
    fn color_scheme(&self) -> Option<SmolStr> {
        self.0.clone()
    }
}

/// A source the host updates whenever the platform preference changes.
#[derive(Debug, Default)]
pub struct Manual {
    signal: RefCell<Option<SmolStr>>,
}

impl Manual {
    /// Creates a [`Manual`] source with an initial raw value.
    pub fn new(signal: Option<&str>) -> Self {
        Self {
            signal: RefCell::new(signal.map(SmolStr::new)),
        }
    }

    /// Replaces the reported raw value.
    pub fn set(&self, signal: Option<&str>) {
        let previous = self.signal.replace(signal.map(SmolStr::new));

        log::debug!("color scheme changed: {previous:?} -> {signal:?}");
    }
}

impl ColorSchemeSource for Manual {
    fn color_scheme(&self) -> Option<SmolStr> {
        self.signal.borrow().clone()
    }
}

/// Returns the platform preference as reported, without interpretation.
pub fn use_color_scheme(source: &(impl ColorSchemeSource + ?Sized)) -> Option<SmolStr> {
    source.color_scheme()
}
