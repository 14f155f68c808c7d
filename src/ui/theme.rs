//! Visual theme and styling.

use console::Style;

/// Colors and symbols for terminal output.
#[derive(Debug, Clone)]
pub struct MyUiTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warning messages (yellow).
    pub warning: Style,
    /// Error messages (red bold).
    pub error: Style,
    /// Secondary text.
    pub dim: Style,
    /// Names of components, layouts and paths (bold).
    pub highlight: Style,
    /// Section labels in listings (bold).
    pub key: Style,
}

impl Default for MyUiTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MyUiTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold().cyan(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            key: Style::new(),
        }
    }

    /// Colored theme when [`should_use_colors`] allows it, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
///
/// `--no-color` disables colors globally through `console::set_colors_enabled`,
/// which this check honors along with `NO_COLOR` and TTY detection.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::colors_enabled() && console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = MyUiTheme::plain();
        assert_eq!(theme.format_success("Added button"), "✓ Added button");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = MyUiTheme::plain();
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = MyUiTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn plain_theme_highlight_is_unstyled() {
        let theme = MyUiTheme::plain();
        assert_eq!(theme.highlight.apply_to("button").to_string(), "button");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = MyUiTheme::default();
        let new = MyUiTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
