//! Rendering logic for the TUI: one form screen.

use neuroqa_client::HealthStatus;
use neuroqa_core::{AnswerDisplay, Outcome, submit_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use super::theme::Theme;

const TITLE: &str = "NeuroQA – Story Answering Bot";
const SUBTITLE: &str = "Enter a short context and a Yes/No question to get a reliable answer.";
const DEMO_PLACEHOLDER: &str = "-- Select a Demo Story --";
const STORY_PLACEHOLDER: &str = "Or type your own story context here...";
const PRESET_PLACEHOLDER: &str = "-- Or type your own question below --";
const QUESTION_PLACEHOLDER: &str = "E.g., Is John in the garden?";

/// Render the whole screen.
pub(crate) fn render_frame(frame: &mut Frame<'_>, app: &App) {
    let error_height = if app.outcome.error_message().is_some() {
        4
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // header
            Constraint::Length(3),            // demo dropdown
            Constraint::Min(5),               // story
            Constraint::Length(3),            // suggested questions
            Constraint::Length(3),            // question
            Constraint::Length(3),            // submit
            Constraint::Length(error_height), // error panel
            Constraint::Length(5),            // result
            Constraint::Length(1),            // status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &app.theme);
    render_demo_select(frame, chunks[1], app);
    render_story(frame, chunks[2], app);
    render_preset_select(frame, chunks[3], app);
    render_question(frame, chunks[4], app);
    render_submit(frame, chunks[5], app);
    if let Some(message) = app.outcome.error_message() {
        render_error(frame, chunks[6], message, &app.theme);
    }
    render_result(frame, chunks[7], app);
    render_status_bar(frame, chunks[8], app);
}

// ─── Helpers ─────────────────────────────────────────────────────

fn field_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.focus } else { theme.border };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

fn placeholder(text: &str, theme: &Theme) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(theme.muted))
}

fn cursor(focused: bool, theme: &Theme) -> Option<Span<'static>> {
    focused.then(|| Span::styled("▏", Style::default().fg(theme.focus)))
}

fn spinner_frame(app: &App) -> Option<&'static str> {
    app.pending_since
        .map(|since| app.theme.spinner.frame_at(since.elapsed().as_millis()))
}

// ─── Sections ────────────────────────────────────────────────────

fn render_header(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(theme.muted))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_demo_select(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::DemoSelect;
    let value = match app.form.selected_story() {
        Some(story) => Span::styled(story.label(), Style::default().fg(theme.text)),
        None => placeholder(DEMO_PLACEHOLDER, theme),
    };
    let line = Line::from(vec![Span::styled("▾ ", Style::default().fg(theme.muted)), value]);
    frame.render_widget(
        Paragraph::new(line).block(field_block("Demo Story", focused, theme)),
        area,
    );
}

fn render_story(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Story;
    let story = app.form.story();

    let mut lines: Vec<Line<'_>> = if story.is_empty() {
        vec![Line::from(placeholder(STORY_PLACEHOLDER, theme))]
    } else {
        story
            .split('\n')
            .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.text))))
            .collect()
    };
    if let Some(c) = cursor(focused, theme)
        && let Some(last) = lines.last_mut()
    {
        if story.is_empty() {
            last.spans.insert(0, c);
        } else {
            last.spans.push(c);
        }
    }

    // Keep the end of a long story in view, counting wrapped rows.
    let inner_width = area.width.saturating_sub(2);
    let visible = usize::from(area.height.saturating_sub(2));
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    let total_rows = paragraph.line_count(inner_width);
    let scroll = u16::try_from(total_rows.saturating_sub(visible)).unwrap_or(u16::MAX);

    frame.render_widget(
        paragraph
            .block(field_block("Story Context", focused, theme))
            .scroll((scroll, 0)),
        area,
    );
}

fn render_preset_select(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::QuestionSelect;
    let presets = app.form.suggested_questions();

    let value = match app.form.preset_index().and_then(|i| presets.get(i)) {
        Some(question) => Span::styled(*question, Style::default().fg(theme.text)),
        None => placeholder(PRESET_PLACEHOLDER, theme),
    };
    let block = if app.form.presets_enabled() {
        field_block("Suggested Questions", focused, theme)
    } else {
        Block::default()
            .title(" Suggested Questions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.muted))
            .title_style(Style::default().fg(theme.muted))
    };
    let line = Line::from(vec![Span::styled("▾ ", Style::default().fg(theme.muted)), value]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_question(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Question;
    let question = app.form.question();

    let mut spans = Vec::new();
    if question.is_empty() {
        spans.extend(cursor(focused, theme));
        spans.push(placeholder(QUESTION_PLACEHOLDER, theme));
    } else {
        spans.push(Span::styled(question, Style::default().fg(theme.text)));
        spans.extend(cursor(focused, theme));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block("Your Question", focused, theme)),
        area,
    );
}

fn render_submit(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Submit;
    let label = submit_label(&app.outcome);

    let style = if app.submit_enabled() {
        let base = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        if focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    } else {
        Style::default().fg(theme.muted)
    };

    let text = match spinner_frame(app) {
        Some(spin) => format!(" {spin} {label} "),
        None => format!(" {label} "),
    };

    let border = if focused { theme.focus } else { theme.border };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            ),
        area,
    );
}

fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(theme.error)))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Error ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.error)),
            ),
        area,
    );
}

fn render_result(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = &app.theme;
    let display = AnswerDisplay::for_outcome(&app.outcome);
    let color = theme.tone(display.tone);

    let answer = match (&app.outcome, spinner_frame(app)) {
        (Outcome::Pending, Some(spin)) => format!("{spin} {}", display.answer_text),
        _ => display.answer_text,
    };
    let lines = vec![
        Line::from(Span::styled(
            answer,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            display.confidence_text,
            Style::default().fg(theme.muted),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Answer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        ),
        area,
    );
}

fn render_status_bar(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = &app.theme;
    let health = match &app.health {
        HealthStatus::Unknown => Span::styled("● checking", Style::default().fg(theme.muted)),
        HealthStatus::Online(status) => {
            Span::styled(format!("● {status}"), Style::default().fg(theme.success))
        },
        HealthStatus::Unreachable(_) => {
            Span::styled("● offline", Style::default().fg(theme.error))
        },
    };
    let hints = if app.quit_pending {
        Span::styled(
            "Press Ctrl+C or Esc again to quit",
            Style::default().fg(theme.warning),
        )
    } else {
        Span::styled(
            "Tab focus · ↑↓ choose · Enter submit · Esc Esc quit",
            Style::default().fg(theme.muted),
        )
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.endpoint), Style::default().fg(theme.muted)),
        health,
        Span::styled("  │  ", Style::default().fg(theme.border)),
        hints,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
