//! Dashboard composites
//!
//! A composite lays out the panels of one dashboard. The root holds exactly
//! one composite at a time; switching dashboards drops the old composite,
//! which releases whatever its panels had mounted.

mod compliance;
mod executive;
mod risk;
mod trading;

pub use compliance::ComplianceDashboard;
pub use executive::ExecutiveDashboard;
pub use risk::RiskDashboard;
pub use trading::TradingDashboard;

use crate::chart::{ChartLibrary, ResizeListeners};
use crate::ui::store::{Dashboard, Timeframe};
use crate::ui::theme::Palette;
use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;

/// Read-only inputs for a render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub timeframe: Timeframe,
}

/// Resources available to panels when they mount after a draw.
pub struct PanelEnv<'a> {
    pub charts: &'a dyn ChartLibrary,
    pub resize: &'a ResizeListeners,
    pub timeframe: Timeframe,
    pub palette: &'a Palette,
    pub now: DateTime<Utc>,
}

pub trait Composite {
    fn dashboard(&self) -> Dashboard;

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);

    /// Mounts panel resources that need a laid-out container.
    /// Returns true when something changed and a redraw is due.
    fn run_effects(&mut self, _env: &PanelEnv) -> bool {
        false
    }

    fn on_timeframe(&mut self, _timeframe: Timeframe) {}

    fn on_theme(&mut self, _palette: &Palette) {}
}

/// The composite for a dashboard.
pub fn compose(dashboard: Dashboard) -> Box<dyn Composite> {
    match dashboard {
        Dashboard::Trading => Box::new(TradingDashboard::new()),
        Dashboard::Risk => Box::new(RiskDashboard),
        Dashboard::Executive => Box::new(ExecutiveDashboard),
        Dashboard::Compliance => Box::new(ComplianceDashboard),
    }
}
