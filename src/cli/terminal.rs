//! Terminal capability detection and styling

use owo_colors::{OwoColorize, colors::css};
use resume::{Template, render::TextStyle};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 60)
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Color as the modern template accent (dark cyan)
    fn accent(&self) -> String;
    /// Bold text
    fn strong(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn info(&self) -> String {
        if supports_color() {
            self.fg::<css::LightBlue>().to_string()
        } else {
            self.to_string()
        }
    }

    fn accent(&self) -> String {
        if supports_color() {
            self.fg::<css::DarkCyan>().to_string()
        } else {
            self.to_string()
        }
    }

    fn strong(&self) -> String {
        if supports_color() {
            self.bold().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn info(&self) -> String {
        self.as_str().info()
    }

    fn accent(&self) -> String {
        self.as_str().accent()
    }

    fn strong(&self) -> String {
        self.as_str().strong()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

/// Decorates a text preview for the terminal.
///
/// The modern template gets coloured accents, the classic one stays
/// monochrome apart from bold headings.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    template: Template,
}

impl Terminal {
    pub const fn new(template: Template) -> Self {
        Self { template }
    }
}

impl TextStyle for Terminal {
    fn name(&self, text: &str) -> String {
        text.strong()
    }

    fn heading(&self, text: &str) -> String {
        match self.template {
            Template::Modern => text.accent().strong(),
            Template::Classic => text.strong(),
        }
    }

    fn title(&self, text: &str) -> String {
        text.strong()
    }

    fn muted(&self, text: &str) -> String {
        text.dim()
    }

    fn accent(&self, text: &str) -> String {
        match self.template {
            Template::Modern => Colorize::accent(text),
            Template::Classic => text.to_string(),
        }
    }
}
