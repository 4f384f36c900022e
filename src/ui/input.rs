use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved per PageUp/PageDown.
const PAGE_LINES: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.trigger_visible_action();
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE_LINES),
        KeyCode::PageDown => app.scroll_down(PAGE_LINES),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{FlowAction, FlowState};
    use crossterm::event::KeyEventState;
    use tokio::sync::{mpsc, watch};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn enter_presses_the_visible_button() {
        let (_state, rx) = watch::channel(FlowState::SdkReady);
        let (tx, mut commands) = mpsc::channel(1);
        let mut app = App::new(rx);
        app.set_command_sender(tx);

        handle_key(&mut app, press(KeyCode::Enter, KeyModifiers::empty()));

        assert_eq!(commands.try_recv().unwrap(), FlowAction::CreatePaymentIntent);
    }

    #[test]
    fn release_events_are_ignored() {
        let (_state, rx) = watch::channel(FlowState::Landing);
        let (tx, mut commands) = mpsc::channel(1);
        let mut app = App::new(rx);
        app.set_command_sender(tx);

        let mut key = press(KeyCode::Enter, KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);

        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn quit_keys() {
        for key in [
            press(KeyCode::Char('q'), KeyModifiers::empty()),
            press(KeyCode::Esc, KeyModifiers::empty()),
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let (_state, rx) = watch::channel(FlowState::Landing);
            let mut app = App::new(rx);
            handle_key(&mut app, key);
            assert!(app.should_quit());
        }
    }
}
