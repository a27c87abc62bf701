use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::client::Submission;
use crate::ui::form::{FormIntent, FormReducer, FormState, InputMode};
use crate::ui::mvi::Reducer;

/// Commands sent from the UI thread to the async worker.
#[derive(Debug)]
pub enum UiCommand {
    Submit(Submission),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Conversion form state (MVI pattern).
    form: FormState,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Dispatch an intent to the form reducer.
    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn select_mode(&mut self, mode: InputMode) {
        self.dispatch(FormIntent::SelectMode { mode });
    }

    pub fn cycle_mode(&mut self) {
        let next = self.form.mode.next();
        self.select_mode(next);
    }

    pub fn cycle_mode_back(&mut self) {
        let prev = self.form.mode.prev();
        self.select_mode(prev);
    }

    /// Route the current input to its endpoint.
    ///
    /// Text and URL submissions go out as-is, including empty ones; the
    /// server rejects those and the failure stays off screen. An upload
    /// with no path selected raises the alert instead of submitting.
    pub fn submit(&mut self) {
        let submission = match self.form.mode {
            InputMode::Text => Submission::Text(self.form.text_input.clone()),
            InputMode::Url => Submission::Url(self.form.url_input.clone()),
            InputMode::Upload => {
                let path = self.form.file_input.trim();
                if path.is_empty() {
                    self.dispatch(FormIntent::ShowAlert {
                        message: "Please select a file to upload.".to_string(),
                    });
                    return;
                }
                Submission::File(PathBuf::from(path))
            }
        };
        self.send_command(UiCommand::Submit(submission));
    }

    /// Called when a conversion result arrives from the worker.
    pub fn on_conversion(&mut self, text: String) {
        self.dispatch(FormIntent::ConversionComplete { text });
    }

    pub fn on_tick(&mut self) {}

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Submission dropped: {}", err);
                false
            }
        }
    }
}
