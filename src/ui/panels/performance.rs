//! Cumulative P&L line chart

use super::card;
use crate::ui::theme::Palette;
use crate::ui::utils::format_usd;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};

/// Cumulative P&L in dollars at the close of each of the last 30 days.
pub const CUMULATIVE_PNL: [f64; 30] = [
    0.0, 85.0, 142.0, 210.0, 188.0, 265.0, 340.0, 395.0, 372.0, 450.0, 528.0, 610.0, 585.0,
    672.0, 760.0, 845.0, 920.0, 1010.0, 985.0, 1102.0, 1230.0, 1345.0, 1420.0, 1560.0, 1688.0,
    1810.0, 2005.0, 2240.0, 2510.0, 2847.0,
];

const Y_MAX: f64 = 3000.0;

pub fn render_performance(f: &mut Frame, area: Rect, palette: &Palette) {
    let points: Vec<(f64, f64)> = CUMULATIVE_PNL
        .iter()
        .enumerate()
        .map(|(day, &pnl)| ((day + 1) as f64, pnl))
        .collect();

    let dataset = Dataset::default()
        .name("Cumulative P&L")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.profit))
        .data(&points);

    let axis_style = Style::default().fg(palette.text_muted);
    let chart = Chart::new(vec![dataset])
        .block(card("Cumulative P&L (Last 30 Days)", palette))
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([1.0, CUMULATIVE_PNL.len() as f64])
                .labels(["Day 1", "Day 15", "Day 30"]),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, Y_MAX])
                .labels([
                    format_usd(0.0, 0),
                    format_usd(Y_MAX / 2.0, 0),
                    format_usd(Y_MAX, 0),
                ]),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::kpi::KPIS;
    use crate::ui::panels::test_support::render_text;
    use crate::ui::utils::format_signed_usd;

    #[test]
    // The curve ends at the headline Total P&L.
    fn test_series_ends_at_total_pnl() {
        let last = CUMULATIVE_PNL[CUMULATIVE_PNL.len() - 1];
        assert_eq!(format_signed_usd(last).trim_end_matches(".00"), KPIS[0].value);
        assert!(CUMULATIVE_PNL.iter().all(|&v| (0.0..=Y_MAX).contains(&v)));
    }

    #[test]
    fn test_renders_axes() {
        let text = render_text(80, 20, render_performance);
        assert!(text.contains("Cumulative P&L (Last 30 Days)"));
        assert!(text.contains("Day 30"));
        assert!(text.contains("$3,000"));
    }
}
