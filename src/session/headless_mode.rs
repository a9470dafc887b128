//! Headless mode execution
//!
//! Renders a single frame of the shell into an in-memory backend and prints
//! it as plain text. Chart effects run before the final draw so the price
//! chart appears mounted.

use crate::chart::TerminalCharts;
use crate::error::DashboardError;
use crate::ui::root::Root;
use crate::ui::store::{ViewState, ViewStore};
use crate::ui::utils::buffer_to_text;
use chrono::Utc;
use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::error::Error;

/// Renders one `width` x `height` frame of the dashboard shell as text.
///
/// # Errors
/// Fails if the frame cannot be drawn.
pub fn render_snapshot(
    state: ViewState,
    width: u16,
    height: u16,
    with_background_color: bool,
) -> Result<String, DashboardError> {
    let mut root = Root::new(
        ViewStore::new(state),
        Box::new(TerminalCharts),
        with_background_color,
    );
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;

    terminal.draw(|f| root.render(f))?;
    if root.run_effects(Utc::now()) {
        debug!("Redrawing after mount effects");
        terminal.draw(|f| root.render(f))?;
    }
    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Runs the dashboard in headless mode, printing one frame to stdout.
pub fn run_headless_mode(
    state: ViewState,
    width: u16,
    height: u16,
    with_background_color: bool,
) -> Result<(), Box<dyn Error>> {
    info!(
        "Rendering the {} dashboard at {}x{}",
        state.current_dashboard, width, height
    );
    let snapshot = render_snapshot(state, width, height, with_background_color)?;
    print!("{}", snapshot);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::store::Dashboard;

    #[test]
    // The snapshot has one line per row and shows the chosen dashboard.
    fn test_snapshot_of_risk_dashboard() {
        let state = ViewState {
            current_dashboard: Dashboard::Risk,
            ..ViewState::default()
        };
        let text = render_snapshot(state, 160, 48, false).unwrap();
        assert_eq!(text.lines().count(), 48);
        assert!(text.contains("Correlation Matrix"));
        assert!(!text.contains("Order Book"));
    }

    #[test]
    // The price chart is mounted by the time the snapshot is taken.
    fn test_snapshot_mounts_chart() {
        let text = render_snapshot(ViewState::default(), 160, 48, true).unwrap();
        assert!(text.contains("Order Book"));
        assert!(!text.contains("Loading chart..."));
        assert!(text.contains('┃'));
    }
}
