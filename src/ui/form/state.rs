use std::str::FromStr;

use crate::ui::mvi::UiState;

/// The active input method. Exactly one is selected at any time, and the
/// selection decides which input region is shown and which endpoint a
/// submission goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    Url,
    Upload,
}

impl InputMode {
    /// Selector order, used for the mode tabs and for cycling.
    pub const ALL: [InputMode; 3] = [InputMode::Text, InputMode::Url, InputMode::Upload];

    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Text => "Text",
            InputMode::Url => "URL",
            InputMode::Upload => "File",
        }
    }

    /// Next mode in selector order, wrapping at the end.
    pub fn next(&self) -> InputMode {
        match self {
            InputMode::Text => InputMode::Url,
            InputMode::Url => InputMode::Upload,
            InputMode::Upload => InputMode::Text,
        }
    }

    /// Previous mode in selector order, wrapping at the start.
    pub fn prev(&self) -> InputMode {
        match self {
            InputMode::Text => InputMode::Upload,
            InputMode::Url => InputMode::Text,
            InputMode::Upload => InputMode::Url,
        }
    }
}

impl FromStr for InputMode {
    type Err = String;

    /// Unrecognized names are rejected here so no reachable state ever
    /// has an unknown mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(InputMode::Text),
            "url" => Ok(InputMode::Url),
            "upload" | "file" => Ok(InputMode::Upload),
            other => Err(format!("unknown input mode '{}'", other)),
        }
    }
}

/// Complete state of the conversion form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: InputMode,
    pub text_input: String,
    pub url_input: String,
    pub file_input: String,
    /// Last conversion result; `None` renders an empty output shell.
    pub bionic_text: Option<String>,
    /// Modal alert message; input handling is blocked while set.
    pub alert: Option<String>,
}

impl UiState for FormState {}

impl FormState {
    /// The input buffer belonging to the active mode.
    pub fn active_input(&self) -> &str {
        match self.mode {
            InputMode::Text => &self.text_input,
            InputMode::Url => &self.url_input,
            InputMode::Upload => &self.file_input,
        }
    }
}
