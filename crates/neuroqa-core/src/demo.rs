//! Built-in demo stories.
//!
//! The dataset is static and read-only. A lookup that finds nothing is the
//! normal "free text" case, not an error.

/// Number of narrative characters shown in a dropdown caption.
const LABEL_CHARS: usize = 70;

/// A preselectable example story with suggested questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoStory {
    /// Identifier, unique within [`all`].
    pub id: u32,
    /// Narrative text sent as the story.
    pub story: &'static str,
    /// Suggested yes/no questions, in display order.
    pub sample_questions: &'static [&'static str],
}

impl DemoStory {
    /// Dropdown caption: the start of the narrative followed by `...`.
    #[must_use]
    pub fn label(&self) -> String {
        let head: String = self.story.chars().take(LABEL_CHARS).collect();
        format!("{head}...")
    }
}

static DEMO_STORIES: [DemoStory; 3] = [
    DemoStory {
        id: 1,
        story: "Mary moved to the bathroom . Sandra journeyed to the bedroom . Mary went back to the bedroom . Daniel went back to the hallway .",
        sample_questions: &[
            "Is Sandra in the bedroom ?",
            "Is Mary in the bedroom ?",
            "Is Daniel in the bathroom ?",
        ],
    },
    DemoStory {
        id: 2,
        story: "Sandra grabbed the football there . Mary went to the bedroom . Daniel got the apple there . Sandra travelled to the hallway .",
        sample_questions: &[
            "Is Mary in the bedroom ?",
            "Is Sandra in the hallway ?",
            "Is Sandra in the garden ?",
        ],
    },
    DemoStory {
        id: 3,
        story: "John went to the hallway . Sandra picked up the apple there . Daniel moved to the garden . Mary journeyed to the bedroom .",
        sample_questions: &[
            "Is Daniel in the hallway ?",
            "Is Mary in the bedroom ?",
            "Is Daniel in the garden ?",
        ],
    },
];

/// All demo stories in dropdown order.
#[must_use]
pub fn all() -> &'static [DemoStory] {
    &DEMO_STORIES
}

/// Look up a demo story by identifier.
#[must_use]
pub fn find(id: u32) -> Option<&'static DemoStory> {
    DEMO_STORIES.iter().find(|d| d.id == id)
}

/// Parse a demo identifier as typed by a user (`"2"`, `" 3 "`).
///
/// Empty or non-numeric input yields `None`, which callers treat as
/// "no demo selected".
#[must_use]
pub fn parse_demo_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
