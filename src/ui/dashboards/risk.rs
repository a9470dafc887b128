use super::{Composite, RenderContext};
use crate::ui::panels::alerts::render_alerts;
use crate::ui::panels::correlation::render_correlation_matrix;
use crate::ui::panels::exposure::render_exposure;
use crate::ui::panels::risk_overview::render_risk_overview;
use crate::ui::store::Dashboard;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Risk metrics and allocation on top, correlations and alerts below.
pub struct RiskDashboard;

impl Composite for RiskDashboard {
    fn dashboard(&self) -> Dashboard {
        Dashboard::Risk
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
        let [overview, exposure] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(top);
        let [correlation, alerts] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(bottom);

        render_risk_overview(f, overview, ctx.palette);
        render_exposure(f, exposure, ctx.palette);
        render_correlation_matrix(f, correlation, ctx.palette);
        render_alerts(f, alerts, ctx.palette);
    }
}
