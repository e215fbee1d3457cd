//! Styling helpers with an environment-driven color switch.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Color configuration for screen rendering.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    /// Resolve color from the environment: disabled if `--no-color`,
    /// `NO_COLOR`, `TERM=dumb`, or stdout is not a TTY.
    pub fn from_env(no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
        }
    }

    /// Plain theme for tests.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Headers and separators.
    pub fn accent(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Menu items and prompts.
    pub fn menu(&self, text: &str) -> String {
        if self.color {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }

    /// Success messages.
    pub fn ok(&self, text: &str) -> String {
        if self.color {
            text.bright_green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Failure messages and retry indicators.
    pub fn err(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Secondary detail lines.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_passes_text_through() {
        let theme = Theme::plain();
        assert_eq!(theme.accent("x"), "x");
        assert_eq!(theme.menu("x"), "x");
        assert_eq!(theme.ok("x"), "x");
        assert_eq!(theme.err("x"), "x");
        assert_eq!(theme.dim("x"), "x");
    }

    #[test]
    fn test_colored_theme_wraps_text() {
        let theme = Theme { color: true };
        let styled = theme.err("fail");
        assert!(styled.contains("fail"));
        assert_ne!(styled, "fail");
    }
}
