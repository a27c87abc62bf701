use crate::ui::form::state::InputMode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Switch the visible input region. Clears prior output.
    SelectMode { mode: InputMode },
    /// Append one character to the active input.
    InputChar { c: char },
    /// Delete the last character of the active input.
    Backspace,
    /// Insert pasted text into the active input.
    Paste { text: String },
    /// A conversion finished; replace the output with its result.
    ConversionComplete { text: String },
    /// Clear every input and the output. The mode is untouched.
    Reset,
    /// Show a modal alert.
    ShowAlert { message: String },
    /// Dismiss the modal alert.
    DismissAlert,
}

impl Intent for FormIntent {}
