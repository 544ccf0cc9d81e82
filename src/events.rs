use crate::selection::SelectionInput;
use std::str::FromStr;

/// Events produced off the GUI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Show,
    Hide,
    /// Write the default config if missing and open it for editing.
    EditConfig,
    Nav(SelectionInput),
}

impl AppEvent {
    /// Parses one remote-control line.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "show" => Some(Self::Show),
            "hide" => Some(Self::Hide),
            "config" => Some(Self::EditConfig),
            other => SelectionInput::from_str(other).ok().map(Self::Nav),
        }
    }
}
