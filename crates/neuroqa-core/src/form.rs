//! Form state: story, question and the demo selection.
//!
//! The story field has two mutually exclusive sources, a demo selection and
//! free text. Selecting a demo overwrites the story; typing into the story
//! drops the selection. Suggested questions are never stored; they are
//! derived from the selection on every read so the two cannot drift apart.

use crate::demo::{self, DemoStory};

/// Editable fields of the question form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    story: String,
    question: String,
    selected_demo: Option<u32>,
}

impl FormState {
    /// Create an empty form with no demo selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current story text.
    #[must_use]
    pub fn story(&self) -> &str {
        &self.story
    }

    /// Current question text.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Identifier of the selected demo, `None` in free-text mode.
    #[must_use]
    pub fn selected_demo(&self) -> Option<u32> {
        self.selected_demo
    }

    /// The selected demo story, if any.
    #[must_use]
    pub fn selected_story(&self) -> Option<&'static DemoStory> {
        self.selected_demo.and_then(demo::find)
    }

    /// Questions suggested for the current selection (empty in free-text mode).
    #[must_use]
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        self.selected_story()
            .map(|d| d.sample_questions)
            .unwrap_or_default()
    }

    /// Whether the suggested-question dropdown has anything to offer.
    #[must_use]
    pub fn presets_enabled(&self) -> bool {
        !self.suggested_questions().is_empty()
    }

    /// Position of the current question among the suggestions.
    ///
    /// `None` means the dropdown shows its placeholder.
    #[must_use]
    pub fn preset_index(&self) -> Option<usize> {
        self.suggested_questions()
            .iter()
            .position(|q| *q == self.question)
    }

    /// Select a demo story, or clear the form with `None`.
    ///
    /// A matching id copies the narrative into the story and clears the
    /// question. `None` and ids that match nothing both clear story,
    /// suggestions and question.
    pub fn select_demo(&mut self, id: Option<u32>) {
        match id.and_then(demo::find) {
            Some(found) => {
                self.selected_demo = Some(found.id);
                found.story.clone_into(&mut self.story);
            },
            None => {
                self.selected_demo = None;
                self.story.clear();
            },
        }
        self.question.clear();
    }

    /// Replace the story with typed text and drop any demo selection.
    pub fn edit_story(&mut self, text: impl Into<String>) {
        self.story = text.into();
        self.selected_demo = None;
    }

    /// Replace the question with typed text. The demo selection is kept.
    pub fn edit_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Pick a suggested question.
    ///
    /// The empty placeholder entry is a no-op; it never clears the question.
    pub fn choose_preset_question(&mut self, text: &str) {
        if !text.is_empty() {
            text.clone_into(&mut self.question);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new();
        assert_eq!(form.story(), "");
        assert_eq!(form.question(), "");
        assert_eq!(form.selected_demo(), None);
        assert!(form.suggested_questions().is_empty());
        assert!(!form.presets_enabled());
    }

    #[test]
    fn test_select_each_demo_copies_story_and_suggestions() {
        for d in demo::all() {
            let mut form = FormState::new();
            form.edit_question("left over");
            form.select_demo(Some(d.id));

            assert_eq!(form.selected_demo(), Some(d.id));
            assert_eq!(form.story(), d.story);
            assert_eq!(form.suggested_questions(), d.sample_questions);
            assert_eq!(form.question(), "");
        }
    }

    #[test]
    fn test_select_none_clears_everything() {
        let mut form = FormState::new();
        form.select_demo(Some(1));
        form.choose_preset_question("Is Mary in the bedroom ?");

        form.select_demo(None);
        assert_eq!(form.story(), "");
        assert_eq!(form.question(), "");
        assert!(form.suggested_questions().is_empty());
        assert_eq!(form.selected_demo(), None);
    }

    #[test]
    fn test_select_unknown_id_behaves_like_none() {
        let mut form = FormState::new();
        form.select_demo(Some(3));
        form.edit_question("Is Daniel in the garden ?");

        form.select_demo(Some(99));
        assert_eq!(form.selected_demo(), None);
        assert_eq!(form.story(), "");
        assert_eq!(form.question(), "");
        assert!(form.suggested_questions().is_empty());
    }

    #[test]
    fn test_edit_story_resets_selection() {
        let mut form = FormState::new();
        form.select_demo(Some(2));
        form.edit_story("John is in the kitchen .");

        assert_eq!(form.selected_demo(), None);
        assert_eq!(form.story(), "John is in the kitchen .");
        assert!(form.suggested_questions().is_empty());

        // Already in free-text mode: still none.
        form.edit_story("");
        assert_eq!(form.selected_demo(), None);
        assert_eq!(form.story(), "");
    }

    #[test]
    fn test_edit_question_keeps_selection() {
        let mut form = FormState::new();
        form.select_demo(Some(1));
        form.edit_question("  Is Mary anywhere?  ");

        assert_eq!(form.selected_demo(), Some(1));
        assert_eq!(form.question(), "  Is Mary anywhere?  ");
    }

    #[test]
    fn test_empty_preset_is_noop() {
        let mut form = FormState::new();
        form.select_demo(Some(1));
        form.edit_question("typed by hand");

        form.choose_preset_question("");
        assert_eq!(form.question(), "typed by hand");

        form.choose_preset_question("Is Daniel in the bathroom ?");
        assert_eq!(form.question(), "Is Daniel in the bathroom ?");
    }

    #[test]
    fn test_preset_index_follows_question() {
        let mut form = FormState::new();
        form.select_demo(Some(1));
        assert_eq!(form.preset_index(), None);

        form.choose_preset_question("Is Mary in the bedroom ?");
        assert_eq!(form.preset_index(), Some(1));

        form.edit_question("Is Mary in the bedroom");
        assert_eq!(form.preset_index(), None);
    }
}
