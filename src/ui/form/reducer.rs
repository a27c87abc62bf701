use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormState, InputMode};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl FormReducer {
    fn active_input_mut(state: &mut FormState) -> &mut String {
        match state.mode {
            InputMode::Text => &mut state.text_input,
            InputMode::Url => &mut state.url_input,
            InputMode::Upload => &mut state.file_input,
        }
    }
}

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut next = state;
        match intent {
            FormIntent::SelectMode { mode } => {
                next.mode = mode;
                // Output is fully replaced, never carried across a mode
                // switch.
                next.bionic_text = None;
            }
            FormIntent::InputChar { c } => {
                Self::active_input_mut(&mut next).push(c);
            }
            FormIntent::Backspace => {
                Self::active_input_mut(&mut next).pop();
            }
            FormIntent::Paste { text } => {
                Self::active_input_mut(&mut next).push_str(&text);
            }
            FormIntent::ConversionComplete { text } => {
                next.bionic_text = Some(text);
            }
            FormIntent::Reset => {
                next.text_input.clear();
                next.url_input.clear();
                next.file_input.clear();
                next.bionic_text = None;
                next.alert = None;
            }
            FormIntent::ShowAlert { message } => {
                next.alert = Some(message);
            }
            FormIntent::DismissAlert => {
                next.alert = None;
            }
        }
        next
    }
}
