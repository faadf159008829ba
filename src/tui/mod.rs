//! Terminal host for the Pomodoro timer.
//!
//! This module owns everything that touches the terminal:
//! - Raw mode and alternate screen setup/teardown
//! - A keyboard reader thread feeding the app queue
//! - The async loop that draws a frame after every event
//! - `view`: plain text rendering shared with the replay command

pub mod error;
pub mod view;

use std::io::{self, Stdout};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::app::{App, Flow};
use crate::engine::{TickScheduler, TokioTicker};
use crate::router::AppEvent;
use crate::types::TimerConfig;

pub use error::TuiError;

const TITLE: &str = " pomodoro ";

/// Runs the interactive timer until the user quits.
///
/// # Errors
///
/// Returns a [`TuiError`] if the terminal cannot be set up, drawn to, or
/// restored, or if the keyboard reader fails.
pub async fn run(config: TimerConfig) -> Result<(), TuiError> {
    let mut terminal = setup_terminal()?;
    info!("terminal ready");

    let (event_tx, mut events) = mpsc::unbounded_channel();
    spawn_key_reader(event_tx.clone());

    let ticker = TokioTicker::new(event_tx.clone());
    let mut app = App::new(config, ticker, event_tx);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;
    let restored = restore_terminal(&mut terminal);

    result.and(restored)
}

/// Draws the app, then processes events until quit.
///
/// # Errors
///
/// Returns a [`TuiError`] on draw failure, input failure, or if the queue
/// closes before a quit.
pub async fn run_loop<B: Backend, S: TickScheduler>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), TuiError> {
    draw(terminal, app)?;

    while let Some(event) = events.recv().await {
        if let AppEvent::InputFailed(reason) = event {
            return Err(TuiError::Input(reason));
        }

        if app.handle_event(event) == Flow::Quit {
            return Ok(());
        }

        draw(terminal, app)?;
    }

    Err(TuiError::EventSourceClosed)
}

fn draw<B: Backend, S: TickScheduler>(
    terminal: &mut Terminal<B>,
    app: &App<S>,
) -> Result<(), TuiError> {
    let text = app.view();
    terminal
        .draw(|frame| {
            let paragraph = Paragraph::new(text).block(Block::bordered().title(TITLE));
            frame.render_widget(paragraph, frame.area());
        })
        .map_err(TuiError::Draw)?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode().map_err(TuiError::Setup)?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(TuiError::Setup(e));
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        TuiError::Setup(e)
    })
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), TuiError> {
    // Every step runs even if an earlier one fails; the first error wins.
    let raw_mode = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    first_restore_error([raw_mode, screen, cursor])?;
    debug!("terminal restored");
    Ok(())
}

/// Returns the first failed restore step as a [`TuiError::Restore`].
fn first_restore_error(steps: [io::Result<()>; 3]) -> Result<(), TuiError> {
    steps
        .into_iter()
        .collect::<io::Result<()>>()
        .map_err(TuiError::Restore)
}

/// Reads terminal events on a dedicated thread and forwards them.
fn spawn_key_reader(event_tx: mpsc::UnboundedSender<AppEvent>) {
    thread::spawn(move || loop {
        let app_event = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key_name(&key) {
                Some(name) => AppEvent::Key(name),
                None => continue,
            },
            Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
            Ok(_) => continue,
            Err(e) => {
                error!(error = %e, "keyboard reader failed");
                let _ = event_tx.send(AppEvent::InputFailed(e.to_string()));
                break;
            }
        };

        if event_tx.send(app_event).is_err() {
            break;
        }
    });
}

/// Converts a crossterm key event to a symbolic key name.
///
/// Returns `None` for keys the app never binds.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        _ => return None,
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        Some(format!("ctrl+{}", base))
    } else if key.modifiers.contains(KeyModifiers::ALT) {
        Some(format!("alt+{}", base))
    } else {
        Some(base)
    }
}
