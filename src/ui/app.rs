//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::range::DateRange;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::{LoadCommand, LoaderUpdate};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying analytics for the selected period.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The environment in which the application is running.
    environment: Environment,

    /// Period the dashboard opens with.
    initial_range: DateRange,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives updates from the loader task.
    update_receiver: mpsc::Receiver<LoaderUpdate>,

    /// Sends commands to the loader task.
    command_sender: mpsc::Sender<LoadCommand>,

    /// Cancels the loader task on exit.
    shutdown: CancellationToken,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        initial_range: DateRange,
        update_receiver: mpsc::Receiver<LoaderUpdate>,
        command_sender: mpsc::Sender<LoadCommand>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            environment,
            initial_range,
            current_screen: Screen::Splash,
            update_receiver,
            command_sender,
            shutdown,
        }
    }

    fn open_dashboard(&mut self) {
        let state = DashboardState::new(self.environment.clone(), self.initial_range);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Queue incoming loader updates for processing. While the splash screen
    /// is still up they stay buffered in the channel, so an initial load that
    /// resolves during the splash is not lost.
    fn drain_updates(&mut self) {
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return;
        };
        while let Ok(update) = self.update_receiver.try_recv() {
            state.add_update(update);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        app.drain_updates();
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            app.shutdown.cancel();
                            return Ok(());
                        }
                        // Any other key press skips the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        if state.account_input.is_some() {
                            handle_input_key(key.code, state, &app.command_sender).await;
                        } else {
                            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                                app.shutdown.cancel();
                                return Ok(());
                            }
                            handle_dashboard_key(key.code, state, &app.command_sender).await;
                        }
                    }
                }
            }
        }
    }
}

/// Keys while the account URL input line is open.
async fn handle_input_key(
    code: KeyCode,
    state: &mut DashboardState,
    commands: &mpsc::Sender<LoadCommand>,
) {
    match code {
        KeyCode::Enter => {
            if let Some(input) = state.account_input.take() {
                let _ = commands.send(LoadCommand::SetAccountUrl(input)).await;
            }
        }
        KeyCode::Esc => {
            state.account_input = None;
        }
        KeyCode::Backspace => {
            if let Some(input) = &mut state.account_input {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = &mut state.account_input {
                input.push(c);
            }
        }
        _ => {}
    }
}

/// Dashboard keys: quick periods, date shifts, refresh, scrolling.
async fn handle_dashboard_key(
    code: KeyCode,
    state: &mut DashboardState,
    commands: &mpsc::Sender<LoadCommand>,
) {
    match code {
        KeyCode::Char('r') => {
            let _ = commands.send(LoadCommand::Reload).await;
        }
        KeyCode::Char('7') => set_quick_period(state, commands, 7).await,
        KeyCode::Char('1') => set_quick_period(state, commands, 14).await,
        KeyCode::Char('3') => set_quick_period(state, commands, 30).await,
        KeyCode::Char('t') => set_quick_period(state, commands, 0).await,
        KeyCode::Char('[') => {
            let range = state.range.shift_start(-1);
            shift_range(state, commands, range).await;
        }
        KeyCode::Char(']') => {
            let range = state.range.shift_start(1);
            shift_range(state, commands, range).await;
        }
        KeyCode::Char(',') => {
            let range = state.range.shift_end(-1);
            shift_range(state, commands, range).await;
        }
        KeyCode::Char('.') => {
            let range = state.range.shift_end(1);
            shift_range(state, commands, range).await;
        }
        KeyCode::Char('a') => {
            state.account_input = Some(state.account_url.clone().unwrap_or_default());
        }
        KeyCode::Up => state.scroll_table_up(),
        KeyCode::Down => state.scroll_table_down(),
        _ => {}
    }
}

async fn set_quick_period(
    state: &mut DashboardState,
    commands: &mpsc::Sender<LoadCommand>,
    days: i64,
) {
    let range = DateRange::quick_from_today(days);
    state.range = range;
    let _ = commands
        .send(LoadCommand::SetRange {
            range,
            debounced: false,
        })
        .await;
}

/// Single-day shifts are debounced so holding a key collapses into one load.
async fn shift_range(
    state: &mut DashboardState,
    commands: &mpsc::Sender<LoadCommand>,
    range: DateRange,
) {
    state.range = range;
    let _ = commands
        .send(LoadCommand::SetRange {
            range,
            debounced: true,
        })
        .await;
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
