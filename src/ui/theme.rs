//! Color themes and ANSI escape generation.
//!
//! Two Catppuccin themes are built in; custom themes are TOML files with the
//! same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_focus = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! stock_critical_fg = "#f38ba8"
//! stock_low_fg = "#fab387"
//! stock_healthy_fg = "#a6e3a1"
//! movement_in_fg = "#a6e3a1"
//! movement_out_fg = "#f38ba8"
//! notice_info_fg = "#89b4fa"
//! notice_error_fg = "#f38ba8"
//! ```

use crate::domain::error::{Result, StokError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row of the stock table and the highlighted suggestion.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, labels and column headers.
    pub text_dim: String,
    pub border: String,

    /// Value of the focused form field.
    pub input_focus: String,
    /// Query match inside suggestions.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// "Belum ada ..." placeholders.
    pub empty_state_fg: String,

    pub stock_critical_fg: String,
    pub stock_low_fg: String,
    pub stock_healthy_fg: String,

    pub movement_in_fg: String,
    pub movement_out_fg: String,

    pub notice_info_fg: String,
    pub notice_error_fg: String,
}

impl Theme {
    /// Built-in theme by name: `catppuccin-mocha` or `catppuccin-latte`.
    ///
    /// ```
    /// use stok::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Loads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StokError::Theme`] when the file cannot be read or does not
    /// describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| StokError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| StokError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Resolves the configured theme.
    ///
    /// A theme file wins over a theme name. Anything that fails to load is
    /// logged and replaced by the default theme.
    #[must_use]
    pub fn resolve(name: Option<&str>, file: Option<&str>) -> Self {
        if let Some(file) = file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(error = %e, "falling back from custom theme"),
            }
        }

        match name {
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme = name, "unknown theme, using {DEFAULT_THEME}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// `#rrggbb` to RGB. Malformed colors render white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .unwrap_or(255)
        };

        if digits.len() != 6 {
            return (255, 255, 255);
        }
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Clears every attribute.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the test suite rules
    /// out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        assert_eq!(latte.colors.stock_critical_fg, "#d20f39");
        assert!(latte.colors.header_bg.is_none());
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(Theme::fg("#f38ba8"), "\u{1b}[38;2;243;139;168m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("#fff"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;0;0m");
    }

    #[test]
    fn test_from_file_round_trips_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "kantor".to_string();
        theme.colors.header_bg = Some("#000000".to_string());
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);
    }

    #[test]
    fn test_from_file_errors_are_theme_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(StokError::Theme(_))));
        assert!(matches!(Theme::from_file("/nonexistent/theme.toml"), Err(StokError::Theme(_))));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Theme::resolve(Some("nope"), None).name, "catppuccin-mocha");
        assert_eq!(Theme::resolve(Some("catppuccin-latte"), Some("/missing.toml")).name, "catppuccin-latte");
        assert_eq!(Theme::resolve(None, None), Theme::default());
    }
}
