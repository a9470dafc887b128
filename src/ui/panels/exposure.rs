//! Portfolio allocation bars

use super::card;
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::widgets::{Bar, BarChart, BarGroup};

/// Share of the portfolio per asset, in percent.
pub const ALLOCATION: [(&str, u64); 5] = [
    ("BTC", 35),
    ("ETH", 25),
    ("SOL", 15),
    ("ADA", 10),
    ("USDT", 15),
];

pub fn render_exposure(f: &mut Frame, area: Rect, palette: &Palette) {
    let bars: Vec<Bar> = ALLOCATION
        .iter()
        .map(|&(asset, share)| {
            Bar::default()
                .value(share)
                .label(asset.into())
                .text_value(format!("{share}%"))
                .style(Style::default().fg(palette.accent))
                .value_style(Style::default().fg(palette.background).bg(palette.accent))
        })
        .collect();

    let chart = BarChart::default()
        .block(card("Portfolio Allocation", palette))
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(2)
        .max(100)
        .label_style(Style::default().fg(palette.text_muted));

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_text;

    #[test]
    fn test_allocation_sums_to_whole() {
        assert_eq!(ALLOCATION.iter().map(|(_, share)| share).sum::<u64>(), 100);
    }

    #[test]
    fn test_labels_every_asset() {
        let text = render_text(60, 14, render_exposure);
        assert!(text.contains("Portfolio Allocation"));
        for (asset, _) in ALLOCATION {
            assert!(text.contains(asset), "missing {asset}");
        }
    }
}
