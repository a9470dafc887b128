use super::{Composite, PanelEnv, RenderContext};
use crate::ui::panels::news::render_news_feed;
use crate::ui::panels::order_book::render_order_book;
use crate::ui::panels::positions::render_positions;
use crate::ui::panels::price_chart::PriceChart;
use crate::ui::store::{Dashboard, Timeframe};
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Price chart and order book on top, positions and news below.
#[derive(Default)]
pub struct TradingDashboard {
    price_chart: PriceChart,
}

impl TradingDashboard {
    pub fn new() -> Self {
        Self {
            price_chart: PriceChart::new(),
        }
    }
}

impl Composite for TradingDashboard {
    fn dashboard(&self) -> Dashboard {
        Dashboard::Trading
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);
        let [chart, book] =
            Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)]).areas(top);
        let [positions, news] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(bottom);

        self.price_chart.render(f, chart, ctx);
        render_order_book(f, book, ctx.palette);
        render_positions(f, positions, ctx.palette);
        render_news_feed(f, news, ctx.palette);
    }

    fn run_effects(&mut self, env: &PanelEnv) -> bool {
        self.price_chart.mount_if_ready(env)
    }

    fn on_timeframe(&mut self, timeframe: Timeframe) {
        self.price_chart.on_timeframe(timeframe);
    }

    fn on_theme(&mut self, palette: &Palette) {
        self.price_chart.on_theme(palette);
    }
}
