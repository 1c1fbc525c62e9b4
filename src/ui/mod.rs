//! Terminal output primitives

mod terminal;

pub use terminal::{detect_capabilities, TerminalCapabilities};

use clap::ValueEnum;
use crossterm::style::{Color, Stylize};

/// When to colorize output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Resolve against the detected terminal capabilities.
    pub fn resolve(self, caps: &TerminalCapabilities) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => caps.supports_color,
        }
    }
}

mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const DEPLOY: &str = "📦";
    pub const PENDING: &str = "○";
}

mod icons_ascii {
    pub const SUCCESS: &str = "+";
    pub const ERROR: &str = "x";
    pub const WARNING: &str = "!";
    pub const ARROW: &str = "->";
    pub const DEPLOY: &str = "*";
    pub const PENDING: &str = "o";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Deploy,
    Pending,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Deploy) => icons::DEPLOY,
            (true, Icon::Pending) => icons::PENDING,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Deploy) => icons_ascii::DEPLOY,
            (false, Icon::Pending) => icons_ascii::PENDING,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => Color::Green,
            Icon::Error => Color::Red,
            Icon::Warning => Color::Yellow,
            Icon::Arrow | Icon::Pending => Color::DarkGrey,
            Icon::Deploy => Color::Cyan,
        };
        format!("{}", s.with(color))
    }
}
