//! TUI module: ratatui-based form screen.
//!
//! Submissions run on spawned tasks; their outcomes come back over an
//! unbounded channel and are applied on the next loop tick.

mod input;
mod render;
pub(crate) mod state;
mod theme;

pub(crate) use state::App;
pub(crate) use theme::Theme;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use neuroqa_client::{HealthStatus, Predictor};
use neuroqa_core::Outcome;
use ratatui::{
    Terminal,
    backend::{CrosstermBackend, TestBackend},
    style::Color,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use state::PendingAction;

/// Type alias for our terminal.
type Term = Terminal<CrosstermBackend<Stdout>>;

/// Results delivered from background tasks to the UI loop.
#[derive(Debug)]
pub(crate) enum BackgroundEvent {
    /// A submission finished.
    Settled(Outcome),
    /// The start-up health probe finished.
    Health(HealthStatus),
}

/// Initialize the terminal for TUI mode.
///
/// Returns the terminal and whether keyboard enhancement was enabled.
/// With the Kitty protocol, `Shift+Tab` and `Esc` arrive as unambiguous
/// key events.
fn init_terminal() -> io::Result<(Term, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));

    if keyboard_enhanced {
        execute!(
            stdout,
            EnterAlternateScreen,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }

    let backend = CrosstermBackend::new(stdout);
    Ok((Terminal::new(backend)?, keyboard_enhanced))
}

/// Restore terminal to normal mode.
fn restore_terminal(terminal: &mut Term, keyboard_enhanced: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if keyboard_enhanced {
        execute!(
            terminal.backend_mut(),
            PopKeyboardEnhancementFlags,
            LeaveAlternateScreen
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;
    Ok(())
}

/// Main TUI entry point.
pub(crate) async fn run(predictor: Arc<dyn Predictor>, mut app: App) -> anyhow::Result<()> {
    let (tx, mut rx) = unbounded_channel();
    spawn_health_probe(Arc::clone(&predictor), tx.clone());

    let (mut terminal, keyboard_enhanced) = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app, &predictor, &tx, &mut rx).await;

    // Always restore terminal, even on error.
    let _ = restore_terminal(&mut terminal, keyboard_enhanced);

    result
}

/// Inner run loop, separated so terminal restore always happens.
async fn run_loop(
    terminal: &mut Term,
    app: &mut App,
    predictor: &Arc<dyn Predictor>,
    tx: &UnboundedSender<BackgroundEvent>,
    rx: &mut UnboundedReceiver<BackgroundEvent>,
) -> anyhow::Result<()> {
    let render_interval = Duration::from_millis(16);
    let mut last_render = Instant::now()
        .checked_sub(render_interval)
        .unwrap_or_else(Instant::now);

    loop {
        // Render if enough time has passed.
        if last_render.elapsed() >= render_interval {
            terminal.draw(|frame| render::render_frame(frame, app))?;
            last_render = Instant::now();
        }

        // Start requested submissions.
        handle_pending_actions(app, predictor, tx);

        // Poll for crossterm input events (non-blocking).
        if crossterm::event::poll(Duration::from_millis(10))? {
            input::handle_input(app)?;
        }

        // Apply finished background work.
        apply_background_events(app, rx);

        if app.should_quit {
            info!("user quit");
            break;
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}

/// Spawn a task for every queued action.
fn handle_pending_actions(
    app: &mut App,
    predictor: &Arc<dyn Predictor>,
    tx: &UnboundedSender<BackgroundEvent>,
) -> Vec<JoinHandle<()>> {
    app.pending_actions
        .drain(..)
        .map(|action| match action {
            PendingAction::Submit { story, question } => {
                spawn_submission(Arc::clone(predictor), story, question, tx.clone())
            },
        })
        .collect()
}

fn spawn_submission(
    predictor: Arc<dyn Predictor>,
    story: String,
    question: String,
    tx: UnboundedSender<BackgroundEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(endpoint = predictor.endpoint(), "submitting question");
        let outcome = predictor.submit(&story, &question).await;
        match &outcome {
            Outcome::Succeeded(p) => info!(answer = %p.answer, "prediction received"),
            Outcome::Failed(message) => warn!(%message, "prediction failed"),
            Outcome::Idle | Outcome::Pending => {},
        }
        // Send fails only once the UI loop has exited.
        let _ = tx.send(BackgroundEvent::Settled(outcome));
    })
}

fn spawn_health_probe(
    predictor: Arc<dyn Predictor>,
    tx: UnboundedSender<BackgroundEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let status = predictor.health().await;
        if let HealthStatus::Unreachable(reason) = &status {
            warn!(endpoint = predictor.endpoint(), %reason, "service health probe failed");
        }
        let _ = tx.send(BackgroundEvent::Health(status));
    })
}

/// Drain the channel without blocking.
fn apply_background_events(app: &mut App, rx: &mut UnboundedReceiver<BackgroundEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            BackgroundEvent::Settled(outcome) => app.settle(outcome),
            BackgroundEvent::Health(status) => app.health = status,
        }
    }
}

/// Render a snapshot frame and return it as a string with ANSI colors.
pub(crate) fn render_snapshot(app: &App, width: u16, height: u16) -> io::Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    terminal.draw(|frame| render::render_frame(frame, app))?;

    // Only emit color codes when color changes to reduce verbosity
    let buffer = terminal.backend().buffer();
    let mut output = String::new();
    let mut last_fg = Color::Reset;

    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = &buffer[(x, y)];

            if cell.fg != last_fg {
                output.push_str(color_to_ansi(cell.fg));
                last_fg = cell.fg;
            }

            output.push_str(cell.symbol());
        }
        output.push_str("\x1b[0m\n"); // Reset and newline
        last_fg = Color::Reset;
    }

    Ok(output)
}

/// Convert ratatui color to ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        _ => "\x1b[39m",
    }
}
