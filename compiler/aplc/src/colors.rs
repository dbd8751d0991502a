//! ANSI coloring for shell output.

/// ANSI color codes.
mod codes {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const WHITE: &str = "\x1b[37m";
    pub const RESET: &str = "\x1b[0m";
}

/// When to color output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the value of `--color=<mode>`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Wraps text in color codes, or passes it through when disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub const fn new(enabled: bool) -> Self {
        Painter { enabled }
    }

    pub const fn plain() -> Self {
        Painter { enabled: false }
    }

    pub fn red(self, text: &str) -> String {
        self.paint(codes::RED, text)
    }

    pub fn green(self, text: &str) -> String {
        self.paint(codes::GREEN, text)
    }

    pub fn yellow(self, text: &str) -> String {
        self.paint(codes::YELLOW, text)
    }

    pub fn blue(self, text: &str) -> String {
        self.paint(codes::BLUE, text)
    }

    pub fn white(self, text: &str) -> String {
        self.paint(codes::WHITE, text)
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{}", codes::RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode() {
        assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
        assert_eq!(ColorMode::parse("rainbow"), None);
    }

    #[test]
    fn auto_follows_terminal() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }

    #[test]
    fn painting() {
        assert_eq!(Painter::new(true).green("5"), "\x1b[32m5\x1b[0m");
        assert_eq!(Painter::new(true).red("x"), "\x1b[31mx\x1b[0m");
        assert_eq!(Painter::plain().green("5"), "5");
    }
}
