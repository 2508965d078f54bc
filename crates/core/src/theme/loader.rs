//! Color table loading from theme files.

use super::Colors;

use std::path::Path;

/// Error type for color table loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("theme file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read theme: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse theme file.
    #[error("failed to parse theme: {0}")]
    Parse(String),
    /// Unsupported format.
    #[error("unsupported theme format: {0}")]
    UnsupportedFormat(String),
}

/// Loads a [`Colors`] table from a file path.
///
/// Supports RON format (`.ron` extension) when the `serde` feature is
/// enabled.
///
/// ```ignore
/// use petal_ui_core::theme::{self, load_colors_from_file};
///
/// theme::install(load_colors_from_file("colors.ron")?)?;
/// ```
pub fn load_colors_from_file(path: impl AsRef<Path>) -> Result<Colors, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let extension = path.extension().and_then(std::ffi::OsStr::to_str).unwrap_or("");

    match extension {
        "ron" => load_ron_colors(path),
        _ => Err(LoadError::UnsupportedFormat(extension.to_string())),
    }
}

#[cfg(feature = "serde")]
fn load_ron_colors(path: &Path) -> Result<Colors, LoadError> {
    let content = std::fs::read_to_string(path)?;

    ron::from_str::<Colors>(&content).map_err(|error| LoadError::Parse(error.to_string()))
}

#[cfg(not(feature = "serde"))]
fn load_ron_colors(_path: &Path) -> Result<Colors, LoadError> {
    Err(LoadError::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("petal_ui-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = load_colors_from_file("/definitely/not/here/colors.ron");

        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn other_extensions_are_unsupported() {
        let path = scratch_file("colors.toml", "light = {}");

        let result = load_colors_from_file(&path);

        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "toml"));
        std::fs::remove_file(path).unwrap();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ron_table_round_trips_the_defaults() {
        let content = ron::to_string(&Colors::default()).unwrap();
        let path = scratch_file("defaults.ron", &content);

        let colors = load_colors_from_file(&path).unwrap();

        assert_eq!(colors, Colors::default());
        std::fs::remove_file(path).unwrap();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_ron_is_a_parse_error() {
        let path = scratch_file("broken.ron", "(light: (text: ");

        let result = load_colors_from_file(&path);

        assert!(matches!(result, Err(LoadError::Parse(_))));
        std::fs::remove_file(path).unwrap();
    }
}
