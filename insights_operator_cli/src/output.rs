//! Terminal output helpers

use std::fmt::Display;

use owo_colors::{OwoColorize, Style};

/// Number of characters of a timestamp shown in listings, `YYYY-MM-DDTHH:MM:SS`
pub const TIMESTAMP_WIDTH: usize = 19;

/// Applies terminal colors to output, or leaves it plain when colors are disabled
///
/// Decided once at startup and never changed afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: impl Display, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Title printed above listings and descriptions
    pub fn header(&self, text: impl Display) -> String {
        self.paint(text, Style::new().magenta().bold())
    }

    pub fn error(&self, text: impl Display) -> String {
        self.paint(text, Style::new().red())
    }

    pub fn success(&self, text: impl Display) -> String {
        self.paint(text, Style::new().blue())
    }

    pub fn bold(&self, text: impl Display) -> String {
        self.paint(text, Style::new().bold())
    }

    /// Render a flag as a green "yes" or a red "no", padded to `width` before coloring
    pub fn yes_no(&self, flag: bool, width: usize) -> String {
        if flag {
            self.paint(format!("{:<width$}", "yes"), Style::new().green())
        } else {
            self.paint(format!("{:<width$}", "no"), Style::new().red())
        }
    }
}

/// Cut a timestamp down to [`TIMESTAMP_WIDTH`] characters
pub fn trim_timestamp(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(TIMESTAMP_WIDTH) {
        Some((idx, _)) => &timestamp[..idx],
        None => timestamp,
    }
}

/// Pretty print `text` when it holds a JSON document, otherwise return it unchanged
pub fn pretty_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| text.to_owned())
}
