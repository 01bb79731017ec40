//! Input handling for the TUI.

use super::state::{App, Focus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Handle input events.
pub(crate) fn handle_input(app: &mut App) -> io::Result<()> {
    if let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        handle_key(app, key);
    }
    Ok(())
}

/// Apply one key press to the app.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        // Quit: double Ctrl+C or double Esc to confirm
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
            if app.quit_pending {
                app.should_quit = true;
            } else {
                app.quit_pending = true;
            }
            return; // Don't reset quit_pending below
        },

        // ── Focus ───────────────────────────────────────────────
        (KeyCode::Tab, _) => app.cycle_focus(true),
        (KeyCode::BackTab, _) => app.cycle_focus(false),

        // ── Dropdowns ───────────────────────────────────────────
        (KeyCode::Up | KeyCode::Down, _) => {
            let forward = key.code == KeyCode::Down;
            match app.focus {
                Focus::DemoSelect => app.cycle_demo(forward),
                Focus::QuestionSelect => app.cycle_preset(forward),
                _ => {},
            }
        },

        // ── Submit / newline ────────────────────────────────────
        (KeyCode::Enter, _) => match app.focus {
            Focus::Story => app.insert_char('\n'),
            Focus::Question | Focus::Submit => {
                app.request_submit();
            },
            Focus::DemoSelect | Focus::QuestionSelect => app.cycle_focus(true),
        },
        (KeyCode::Char(' '), KeyModifiers::NONE) if app.focus == Focus::Submit => {
            app.request_submit();
        },

        // ── Text editing ────────────────────────────────────────
        // AltGr arrives as Ctrl+Alt, so modifiers are not filtered here.
        (KeyCode::Char(c), _) => app.insert_char(c),
        (KeyCode::Backspace, _) => app.delete_char(),

        _ => {},
    }

    app.quit_pending = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::PendingAction;
    use crate::tui::theme::Theme;

    fn app() -> App {
        App::new("http://127.0.0.1:8000/predict".to_string(), Theme::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let mut app = app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key(&mut app, ctrl_c);
        assert!(app.quit_pending);
        assert!(!app.should_quit);
        handle_key(&mut app, ctrl_c);
        assert!(app.should_quit);
    }

    #[test]
    fn test_other_key_cancels_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.quit_pending);
        press(&mut app, KeyCode::Tab);
        assert!(!app.quit_pending);
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_demo_then_preset_then_submit() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.form.selected_demo(), Some(1));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::QuestionSelect);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.form.question(), app.form.suggested_questions()[0]);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Submit);
        press(&mut app, KeyCode::Enter);
        assert!(app.outcome.is_pending());
        assert_eq!(app.pending_actions.len(), 1);
    }

    #[test]
    fn test_typed_story_and_question() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Sandra went home .");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Sandra slept .");
        assert_eq!(app.form.story(), "Sandra went home .\nSandra slept .");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Question);
        type_str(&mut app, "Is Sandra home ??");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.pending_actions,
            vec![PendingAction::Submit {
                story: "Sandra went home .\nSandra slept .".to_string(),
                question: "Is Sandra home ?".to_string(),
            }]
        );
    }

    #[test]
    fn test_enter_ignored_while_pending() {
        let mut app = app();
        app.focus = Focus::Submit;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.pending_actions.len(), 1);
    }

    #[test]
    fn test_altgr_characters_are_typed() {
        let mut app = app();
        app.focus = Focus::Question;
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('@'), altgr));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('€'), altgr));
        assert_eq!(app.form.question(), "@€");
        assert!(!app.quit_pending);
    }

    #[test]
    fn test_shift_tab_moves_back() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        );
        assert_eq!(app.focus, Focus::Submit);
    }
}
