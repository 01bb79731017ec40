//! Color theme and spinner animation for the TUI.

use neuroqa_core::Tone;
use ratatui::style::Color;

/// Spinner animation style.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum SpinnerStyle {
    #[default]
    Braille,
    Dots,
}

impl SpinnerStyle {
    pub(crate) fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Braille => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            Self::Dots => &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"],
        }
    }

    /// Get the current frame for a given elapsed time.
    pub(crate) fn frame_at(self, elapsed_ms: u128) -> &'static str {
        let frames = self.frames();
        let interval = 120u128;
        #[allow(clippy::arithmetic_side_effects)]
        // constant divisor, modulo by non-empty frames array
        let idx = (elapsed_ms / interval % frames.len() as u128) as usize;
        frames[idx]
    }
}

/// Color theme.
#[derive(Debug, Clone)]
pub(crate) struct Theme {
    /// Entered text
    pub text: Color,
    /// Placeholders, hints, disabled controls
    pub muted: Color,
    /// Header title and accents
    pub accent: Color,
    /// Positive answers
    pub success: Color,
    /// Quit confirmation hint
    pub warning: Color,
    /// Errors and negative answers
    pub error: Color,
    /// Request in flight
    pub active: Color,
    /// Idle answer panel
    pub neutral: Color,
    /// Unfocused border
    pub border: Color,
    /// Focused border
    pub focus: Color,
    /// Spinner animation style
    pub spinner: SpinnerStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            active: Color::Cyan,
            neutral: Color::Gray,
            border: Color::DarkGray,
            focus: Color::White,
            spinner: SpinnerStyle::Braille,
        }
    }
}

impl Theme {
    /// Brighter colours for low-contrast terminals.
    pub(crate) fn high_contrast() -> Self {
        Self {
            text: Color::White,
            muted: Color::Gray,
            accent: Color::LightBlue,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            active: Color::LightCyan,
            neutral: Color::White,
            border: Color::White,
            focus: Color::LightYellow,
            spinner: SpinnerStyle::Dots,
        }
    }

    /// Colours for terminals with a light background.
    pub(crate) fn light() -> Self {
        Self {
            text: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Magenta,
            error: Color::Red,
            active: Color::Cyan,
            neutral: Color::DarkGray,
            border: Color::Gray,
            focus: Color::Black,
            spinner: SpinnerStyle::Braille,
        }
    }

    /// Theme by config name; unknown names get the dark default.
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "high-contrast" => Self::high_contrast(),
            _ => Self::default(),
        }
    }

    /// Colour of the answer text and result border for a tone.
    pub(crate) fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Neutral => self.neutral,
            Tone::Active => self.active,
            Tone::Alert | Tone::Negative => self.error,
            Tone::Positive => self.success,
        }
    }
}
