//! TUI state: the form, the current outcome, and focus.

use std::time::Instant;

use neuroqa_client::HealthStatus;
use neuroqa_core::{FormState, Outcome, demo};

use super::theme::Theme;

// ─── Focus ───────────────────────────────────────────────────────

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    DemoSelect,
    Story,
    QuestionSelect,
    Question,
    Submit,
}

impl Focus {
    const ORDER: [Self; 5] = [
        Self::DemoSelect,
        Self::Story,
        Self::QuestionSelect,
        Self::Question,
        Self::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

// ─── Pending Actions ─────────────────────────────────────────────

/// Deferred work for the run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    /// Send the captured story and question to the service.
    Submit { story: String, question: String },
}

// ─── App ─────────────────────────────────────────────────────────

/// Main application state.
pub(crate) struct App {
    // ── UI state ──
    pub should_quit: bool,
    pub quit_pending: bool,
    pub focus: Focus,

    // ── Content ──
    pub form: FormState,
    pub outcome: Outcome,
    pub pending_since: Option<Instant>,

    // ── Display ──
    pub endpoint: String,
    pub health: HealthStatus,
    pub theme: Theme,

    // ── Actions ──
    pub pending_actions: Vec<PendingAction>,
}

impl App {
    /// Create a new app instance.
    pub(crate) fn new(endpoint: String, theme: Theme) -> Self {
        Self {
            should_quit: false,
            quit_pending: false,
            focus: Focus::DemoSelect,

            form: FormState::new(),
            outcome: Outcome::Idle,
            pending_since: None,

            endpoint,
            health: HealthStatus::Unknown,
            theme,

            pending_actions: Vec::new(),
        }
    }

    /// Whether the submit control accepts presses.
    pub(crate) fn submit_enabled(&self) -> bool {
        !self.outcome.is_pending()
    }

    /// Start a submission with the current text.
    ///
    /// Returns `false` while a request is already in flight.
    pub(crate) fn request_submit(&mut self) -> bool {
        if !self.submit_enabled() {
            return false;
        }
        self.outcome = Outcome::Pending;
        self.pending_since = Some(Instant::now());
        self.pending_actions.push(PendingAction::Submit {
            story: self.form.story().to_string(),
            question: self.form.question().to_string(),
        });
        true
    }

    /// Apply the result of a finished submission.
    pub(crate) fn settle(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.pending_since = None;
    }

    /// Move focus forward (`true`) or backward, skipping the question
    /// dropdown while it has nothing to offer.
    pub(crate) fn cycle_focus(&mut self, forward: bool) {
        let len = Focus::ORDER.len();
        let mut idx = self.focus.position();
        loop {
            idx = step(idx, len, forward);
            let next = Focus::ORDER[idx];
            if next != Focus::QuestionSelect || self.form.presets_enabled() {
                self.focus = next;
                return;
            }
        }
    }

    /// Step the demo dropdown. Position 0 is the placeholder, which clears
    /// the form.
    pub(crate) fn cycle_demo(&mut self, forward: bool) {
        let stories = demo::all();
        let current = self
            .form
            .selected_demo()
            .and_then(|id| stories.iter().position(|s| s.id == id))
            .map_or(0, |i| i.saturating_add(1));
        let next = step(current, stories.len().saturating_add(1), forward);
        let id = next
            .checked_sub(1)
            .and_then(|i| stories.get(i))
            .map(|s| s.id);
        self.form.select_demo(id);
    }

    /// Step the suggested-question dropdown.
    ///
    /// A typed question that matches no suggestion jumps to the first
    /// (forward) or last (backward) entry.
    pub(crate) fn cycle_preset(&mut self, forward: bool) {
        let presets = self.form.suggested_questions();
        if presets.is_empty() {
            return;
        }
        let next = match self.form.preset_index() {
            Some(idx) => step(idx, presets.len(), forward),
            None if forward => 0,
            None => presets.len().saturating_sub(1),
        };
        if let Some(question) = presets.get(next) {
            self.form.choose_preset_question(question);
        }
    }

    /// Type a character into the focused text field.
    pub(crate) fn insert_char(&mut self, c: char) {
        match self.focus {
            Focus::Story => {
                let mut story = self.form.story().to_string();
                story.push(c);
                self.form.edit_story(story);
            },
            Focus::Question => {
                let mut question = self.form.question().to_string();
                question.push(c);
                self.form.edit_question(question);
            },
            _ => {},
        }
    }

    /// Delete the last character of the focused text field.
    pub(crate) fn delete_char(&mut self) {
        match self.focus {
            Focus::Story => {
                let mut story = self.form.story().to_string();
                if story.pop().is_some() {
                    self.form.edit_story(story);
                }
            },
            Focus::Question => {
                let mut question = self.form.question().to_string();
                if question.pop().is_some() {
                    self.form.edit_question(question);
                }
            },
            _ => {},
        }
    }

    /// Load a demo story by id, as given with `--demo`.
    pub(crate) fn load_demo(&mut self, id: u32) {
        self.form.select_demo(Some(id));
        if self.form.selected_demo().is_some() {
            self.focus = Focus::QuestionSelect;
        }
    }
}

/// Next index in a ring of `len` entries.
fn step(idx: usize, len: usize, forward: bool) -> usize {
    if forward {
        let next = idx.saturating_add(1);
        if next >= len { 0 } else { next }
    } else if idx == 0 {
        len.saturating_sub(1)
    } else {
        idx.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroqa_core::Prediction;

    fn app() -> App {
        App::new("http://127.0.0.1:8000/predict".to_string(), Theme::default())
    }

    #[test]
    fn test_submit_disabled_while_pending() {
        let mut app = app();
        app.form.edit_story("Mary went to the kitchen .");
        app.form.edit_question("Is Mary in the kitchen ?");

        assert!(app.request_submit());
        assert!(app.outcome.is_pending());
        assert!(!app.submit_enabled());

        assert!(!app.request_submit());
        assert_eq!(app.pending_actions.len(), 1);
    }

    #[test]
    fn test_submit_reenabled_after_settle() {
        let mut app = app();
        assert!(app.request_submit());

        app.settle(Outcome::Failed("boom".to_string()));
        assert!(app.submit_enabled());
        assert!(app.pending_since.is_none());

        assert!(app.request_submit());
        app.settle(Outcome::Succeeded(Prediction::new("Yes", 0.9, 0.1)));
        assert!(app.submit_enabled());
    }

    #[test]
    fn test_submit_captures_current_text() {
        let mut app = app();
        app.form.edit_story("  story  ");
        app.form.edit_question("question?");
        app.request_submit();

        assert_eq!(
            app.pending_actions,
            vec![PendingAction::Submit {
                story: "  story  ".to_string(),
                question: "question?".to_string(),
            }]
        );
    }

    #[test]
    fn test_submit_with_blank_fields_still_goes_pending() {
        // Validation happens in the predictor so the message arrives as an outcome.
        let mut app = app();
        assert!(app.request_submit());
        assert!(app.outcome.is_pending());
    }

    #[test]
    fn test_cycle_focus_skips_empty_question_select() {
        let mut app = app();
        app.focus = Focus::Story;
        app.cycle_focus(true);
        assert_eq!(app.focus, Focus::Question);

        app.cycle_focus(false);
        assert_eq!(app.focus, Focus::Story);
    }

    #[test]
    fn test_cycle_focus_visits_question_select_with_demo() {
        let mut app = app();
        app.form.select_demo(Some(1));
        app.focus = Focus::Story;
        app.cycle_focus(true);
        assert_eq!(app.focus, Focus::QuestionSelect);
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let mut app = app();
        app.focus = Focus::Submit;
        app.cycle_focus(true);
        assert_eq!(app.focus, Focus::DemoSelect);
        app.cycle_focus(false);
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn test_cycle_demo_walks_stories_then_placeholder() {
        let mut app = app();
        app.cycle_demo(true);
        assert_eq!(app.form.selected_demo(), Some(1));
        app.cycle_demo(true);
        assert_eq!(app.form.selected_demo(), Some(2));
        app.cycle_demo(true);
        assert_eq!(app.form.selected_demo(), Some(3));

        app.cycle_demo(true);
        assert_eq!(app.form.selected_demo(), None);
        assert!(app.form.story().is_empty());
        assert!(app.form.question().is_empty());

        app.cycle_demo(false);
        assert_eq!(app.form.selected_demo(), Some(3));
    }

    #[test]
    fn test_cycle_preset() {
        let mut app = app();
        app.form.select_demo(Some(1));
        let presets = app.form.suggested_questions();

        app.cycle_preset(true);
        assert_eq!(app.form.question(), presets[0]);
        app.cycle_preset(true);
        assert_eq!(app.form.question(), presets[1]);
        app.cycle_preset(false);
        assert_eq!(app.form.question(), presets[0]);
        app.cycle_preset(false);
        assert_eq!(Some(&app.form.question()), presets.last());
    }

    #[test]
    fn test_cycle_preset_without_demo_is_noop() {
        let mut app = app();
        app.form.edit_question("typed");
        app.cycle_preset(true);
        assert_eq!(app.form.question(), "typed");
    }

    #[test]
    fn test_typing_in_story_clears_selection() {
        let mut app = app();
        app.form.select_demo(Some(2));
        let story = app.form.story().to_string();
        app.focus = Focus::Story;

        app.insert_char('!');
        assert_eq!(app.form.story(), format!("{story}!"));
        assert_eq!(app.form.selected_demo(), None);
        assert!(app.form.suggested_questions().is_empty());
    }

    #[test]
    fn test_typing_in_question_keeps_selection() {
        let mut app = app();
        app.form.select_demo(Some(2));
        app.focus = Focus::Question;

        app.insert_char('I');
        app.insert_char('s');
        app.delete_char();
        assert_eq!(app.form.question(), "I");
        assert_eq!(app.form.selected_demo(), Some(2));
    }

    #[test]
    fn test_typing_on_dropdown_is_ignored() {
        let mut app = app();
        app.focus = Focus::DemoSelect;
        app.insert_char('x');
        app.delete_char();
        assert!(app.form.story().is_empty());
        assert!(app.form.question().is_empty());
    }

    #[test]
    fn test_load_demo() {
        let mut app = app();
        app.load_demo(3);
        assert_eq!(app.form.selected_demo(), Some(3));
        assert_eq!(app.focus, Focus::QuestionSelect);

        let mut app = self::app();
        app.load_demo(42);
        assert_eq!(app.form.selected_demo(), None);
        assert_eq!(app.focus, Focus::DemoSelect);
    }
}
