//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::chart::TerminalCharts;
use crate::ui::store::ViewStore;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::Path;
use std::{error::Error, io};

/// Runs the dashboard in TUI mode
///
/// This function handles:
/// 1. Terminal setup, including a panic hook that restores the terminal
/// 2. UI application initialization and execution
/// 3. Terminal cleanup on every exit path of the UI loop
///
/// # Arguments
/// * `store` - The view store, seeded from configuration and flags
/// * `ui_config` - Presentation options
/// * `log_file` - Where logs go while the terminal is in use, if anywhere
pub async fn run_tui_mode(
    store: ViewStore,
    ui_config: UIConfig,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    print_session_starting(store.current_dashboard().label(), log_file);

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(store, Box::new(TerminalCharts), ui_config);
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();

    Ok(())
}
