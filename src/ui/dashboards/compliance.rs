use super::{Composite, RenderContext};
use crate::ui::panels::compliance_metrics::render_compliance_metrics;
use crate::ui::panels::transactions::render_transactions;
use crate::ui::store::Dashboard;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Transaction log beside the compliance metrics.
pub struct ComplianceDashboard;

impl Composite for ComplianceDashboard {
    fn dashboard(&self) -> Dashboard {
        Dashboard::Compliance
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let [transactions, metrics] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(area);
        render_transactions(f, transactions, ctx.palette);
        render_compliance_metrics(f, metrics, ctx.palette);
    }
}
