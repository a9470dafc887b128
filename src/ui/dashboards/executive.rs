use super::{Composite, RenderContext};
use crate::ui::panels::kpi::render_kpi_summary;
use crate::ui::panels::performance::render_performance;
use crate::ui::store::Dashboard;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// KPI strip above the cumulative P&L chart.
pub struct ExecutiveDashboard;

impl Composite for ExecutiveDashboard {
    fn dashboard(&self) -> Dashboard {
        Dashboard::Executive
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let [kpis, performance] =
            Layout::vertical([Constraint::Length(8), Constraint::Min(0)]).areas(area);
        render_kpi_summary(f, kpis, ctx.palette);
        render_performance(f, performance, ctx.palette);
    }
}
