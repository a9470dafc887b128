//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::chart::ChartLibrary;
use crate::consts::cli_consts::{splash_duration, tick_rate};
use crate::events::{Action, action_for_key};
use crate::ui::root::Root;
use crate::ui::splash::render_splash;
use crate::ui::store::ViewStore;
use chrono::Utc;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use log::info;
use ratatui::layout::Size;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Copy)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub show_splash: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool, show_splash: bool) -> Self {
        Self {
            with_background_color,
            show_splash,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The dashboard shell.
    Dashboard,
}

/// Application state
pub struct App {
    /// Shell, store and the active dashboard.
    root: Root,

    /// The current screen being displayed in the application.
    current_screen: Screen,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(store: ViewStore, charts: Box<dyn ChartLibrary>, ui_config: UIConfig) -> Self {
        let current_screen = if ui_config.show_splash {
            Screen::Splash
        } else {
            Screen::Dashboard
        };
        Self {
            root: Root::new(store, charts, ui_config.with_background_color),
            current_screen,
        }
    }

    #[cfg(test)]
    pub fn root(&self) -> &Root {
        &self.root
    }

    #[cfg(test)]
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
    }

    /// Handles one terminal event. Returns false when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                let action = action_for_key(key);
                if action == Some(Action::Quit) {
                    return false;
                }
                if self.current_screen == Screen::Splash {
                    // Any other key skips the splash screen
                    if key.kind == event::KeyEventKind::Press {
                        self.show_dashboard();
                    }
                    return true;
                }
                if let Some(action) = action {
                    self.root.dispatch(action);
                }
            }
            Event::Mouse(mouse) => {
                if self.current_screen == Screen::Dashboard
                    && mouse.kind == MouseEventKind::Down(MouseButton::Left)
                {
                    if let Some(action) = self.root.click(mouse.column, mouse.row) {
                        self.root.dispatch(action);
                    }
                }
            }
            Event::Resize(width, height) => self.root.queue_resize(Size::new(width, height)),
            _ => {}
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Changes written outside the event handlers
        app.root.sync();

        terminal.draw(|f| render(f, &mut app))?;
        if app.current_screen == Screen::Dashboard && app.root.run_effects(Utc::now()) {
            terminal.draw(|f| render(f, &mut app))?;
        }

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.show_dashboard();
            continue;
        }

        // Poll for terminal events
        if event::poll(tick_rate())? && !app.handle_event(event::read()?) {
            info!("Exiting dashboard");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &mut App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.root.document().palette()),
        Screen::Dashboard => app.root.render(f),
    }
}
