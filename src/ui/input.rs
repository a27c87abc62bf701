use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::form::FormIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // A raised alert swallows everything except its dismiss keys.
    if app.form().alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dispatch(FormIntent::DismissAlert);
        }
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.dispatch(FormIntent::Reset);
        return;
    }

    match key.code {
        KeyCode::Tab => app.cycle_mode(),
        KeyCode::BackTab => app.cycle_mode_back(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.dispatch(FormIntent::Backspace),
        KeyCode::Char(c) => app.dispatch(FormIntent::InputChar { c }),
        _ => {}
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.form().alert.is_some() {
        return;
    }
    app.dispatch(FormIntent::Paste { text });
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::InputMode;

    fn make_app() -> App {
        App::new()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typed_characters_edit_the_active_input() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('i')));
        assert_eq!(app.form().text_input, "hi");

        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.form().text_input, "h");
    }

    #[test]
    fn tab_cycles_the_mode_and_shift_tab_reverses() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.form().mode, InputMode::Url);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.form().mode, InputMode::Text);
    }

    #[test]
    fn edits_land_in_the_buffer_of_the_active_mode() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.form().url_input, "x");
        assert_eq!(app.form().text_input, "");
    }

    #[test]
    fn ctrl_q_requests_quit() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_r_resets_inputs_and_output() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        app.on_conversion("<b>ou</b>t".to_string());

        handle_key(&mut app, ctrl('r'));

        assert_eq!(app.form().text_input, "");
        assert!(app.form().bionic_text.is_none());
    }

    #[test]
    fn alert_blocks_edits_until_dismissed() {
        let mut app = make_app();
        app.dispatch(FormIntent::ShowAlert {
            message: "Please select a file to upload.".to_string(),
        });

        handle_key(&mut app, press(KeyCode::Char('z')));
        assert_eq!(app.form().text_input, "");
        assert!(app.form().alert.is_some());

        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.form().alert.is_none());

        handle_key(&mut app, press(KeyCode::Char('z')));
        assert_eq!(app.form().text_input, "z");
    }

    #[test]
    fn paste_is_blocked_while_alert_is_up() {
        let mut app = make_app();
        app.dispatch(FormIntent::ShowAlert {
            message: "Please select a file to upload.".to_string(),
        });
        handle_paste(&mut app, "ignored".to_string());
        assert_eq!(app.form().text_input, "");

        handle_key(&mut app, press(KeyCode::Esc));
        handle_paste(&mut app, "pasted".to_string());
        assert_eq!(app.form().text_input, "pasted");
    }

    #[test]
    fn quit_works_even_with_alert_up() {
        let mut app = make_app();
        app.dispatch(FormIntent::ShowAlert {
            message: "Please select a file to upload.".to_string(),
        });
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }
}
