//! Tests for the theme module.

use crate::theme::{
    self, ColorRole, ColorScheme, ColorSchemeSource, Colors, Fixed, Manual, Palette,
    ThemeOverride, use_color_scheme, use_theme_color,
};

#[test]
fn test_light_palette_values() {
    let colors = Colors::default();
    let none = ThemeOverride::default();

    let expected = [
        (ColorRole::Text, "#11181C"),
        (ColorRole::Background, "#fff"),
        (ColorRole::Tint, "#0a7ea4"),
        (ColorRole::Icon, "#687076"),
        (ColorRole::TabIconDefault, "#687076"),
        (ColorRole::TabIconSelected, "#0a7ea4"),
    ];

    for (role, color) in expected {
        assert_eq!(colors.resolve(ColorScheme::Light, &none, role), color, "{role}");
    }
}

#[test]
fn test_dark_palette_values() {
    let colors = Colors::default();
    let none = ThemeOverride::default();

    let expected = [
        (ColorRole::Text, "#ECEDEE"),
        (ColorRole::Background, "#151718"),
        (ColorRole::Tint, "#fff"),
        (ColorRole::Icon, "#9BA1A6"),
        (ColorRole::TabIconDefault, "#9BA1A6"),
        (ColorRole::TabIconSelected, "#fff"),
    ];

    for (role, color) in expected {
        assert_eq!(colors.resolve(ColorScheme::Dark, &none, role), color, "{role}");
    }
}

#[test]
fn test_unknown_scheme_defaults_to_light() {
    let colors = Colors::default();
    let none = ThemeOverride::default();

    for role in ColorRole::ALL {
        assert_eq!(
            colors.resolve(ColorScheme::Unknown, &none, role),
            colors.resolve(ColorScheme::Light, &none, role),
        );
    }
}

#[test]
fn test_override_wins_for_active_scheme() {
    let colors = Colors::default();
    let overrides = ThemeOverride::new()
        .light("#custom-light")
        .dark("#custom-dark");

    for role in ColorRole::ALL {
        assert_eq!(
            colors.resolve(ColorScheme::Light, &overrides, role),
            "#custom-light"
        );
        assert_eq!(
            colors.resolve(ColorScheme::Dark, &overrides, role),
            "#custom-dark"
        );
        assert_eq!(
            colors.resolve(ColorScheme::Unknown, &overrides, role),
            "#custom-light"
        );
    }
}

#[test]
fn test_override_for_other_scheme_is_ignored() {
    let colors = Colors::default();
    let overrides = ThemeOverride::new().dark("#custom-dark");

    assert_eq!(
        colors.resolve(ColorScheme::Light, &overrides, ColorRole::Text),
        "#11181C"
    );
    assert_eq!(
        colors.resolve(ColorScheme::Light, &overrides, ColorRole::Background),
        "#fff"
    );
}

#[test]
fn test_empty_override_is_absent() {
    let colors = Colors::default();
    let overrides = ThemeOverride::new().light("").dark("");

    assert_eq!(
        colors.resolve(ColorScheme::Light, &overrides, ColorRole::Text),
        "#11181C"
    );
    assert_eq!(
        colors.resolve(ColorScheme::Dark, &overrides, ColorRole::Text),
        "#ECEDEE"
    );
}

#[test]
fn test_unknown_key_resolves_to_nothing() {
    let colors = Colors::default();

    assert_eq!(
        colors.resolve_key(ColorScheme::Light, &ThemeOverride::default(), "nonexistent"),
        None
    );
}

#[test]
fn test_override_applies_to_unknown_key() {
    let colors = Colors::default();
    let overrides = ThemeOverride::new().light("#abcdef");

    assert_eq!(
        colors
            .resolve_key(ColorScheme::Light, &overrides, "nonexistent")
            .as_ref()
            .map(crate::Color::as_str),
        Some("#abcdef")
    );
}

#[test]
fn test_role_keys_round_trip() {
    for role in ColorRole::ALL {
        assert_eq!(role.key().parse::<ColorRole>(), Ok(role));
    }

    assert!("TabIconDefault".parse::<ColorRole>().is_err());
}

#[test]
fn test_scheme_signal_interpretation() {
    assert_eq!(ColorScheme::from_signal(Some("light")), ColorScheme::Light);
    assert_eq!(ColorScheme::from_signal(Some("dark")), ColorScheme::Dark);
    assert_eq!(ColorScheme::from_signal(None), ColorScheme::Unknown);
    assert_eq!(ColorScheme::from_signal(Some("invalid")), ColorScheme::Unknown);
    assert_eq!(ColorScheme::Unknown.effective(), ColorScheme::Light);
}

#[test]
fn test_color_scheme_is_passed_through() {
    assert_eq!(use_color_scheme(&Fixed::new(Some("light"))).as_deref(), Some("light"));
    assert_eq!(use_color_scheme(&Fixed::new(Some("dark"))).as_deref(), Some("dark"));
    assert_eq!(use_color_scheme(&Fixed::new(None)), None);
    assert_eq!(
        use_color_scheme(&Fixed::new(Some("invalid"))).as_deref(),
        Some("invalid")
    );
}

#[test]
fn test_scheme_change_is_observed_on_next_read() {
    let source = Manual::new(Some("light"));
    let none = ThemeOverride::default();

    assert_eq!(
        use_theme_color(&source, &none, "background").as_ref().map(crate::Color::as_str),
        Some("#fff")
    );

    source.set(Some("dark"));

    assert_eq!(source.color_scheme().as_deref(), Some("dark"));
    assert_eq!(
        use_theme_color(&source, &none, "background").as_ref().map(crate::Color::as_str),
        Some("#151718")
    );

    source.set(None);

    assert_eq!(
        use_theme_color(&source, &none, "text").as_ref().map(crate::Color::as_str),
        Some("#11181C")
    );
}

#[test]
fn test_installed_table_defaults() {
    // Tests never install a custom table, so the defaults are in place.
    assert_eq!(theme::colors(), &Colors::default());
    assert_eq!(theme::install(Colors::default()), Err(theme::InstallError));
    assert_eq!(
        theme::resolve(ColorScheme::Dark, &ThemeOverride::default(), ColorRole::Tint),
        "#fff"
    );
}

#[test]
fn test_palette_lookup_by_role() {
    let palette = Palette::dark();

    assert_eq!(palette.get(ColorRole::Icon), &palette.icon);
    assert_eq!(
        Colors::default().palette(ColorScheme::Unknown),
        &Palette::light()
    );
}
