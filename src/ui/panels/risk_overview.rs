//! Key risk metrics

use super::{Tone, card};
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

pub const RISK_METRICS: [RiskMetric; 5] = [
    RiskMetric { label: "Total Exposure", value: "$13,947", tone: Tone::Accent },
    RiskMetric { label: "VaR (95%)", value: "$698", tone: Tone::Negative },
    RiskMetric { label: "Sharpe Ratio", value: "2.34", tone: Tone::Positive },
    RiskMetric { label: "Max Drawdown", value: "8.5%", tone: Tone::Negative },
    RiskMetric { label: "Win Rate", value: "78.9%", tone: Tone::Positive },
];

pub fn render_risk_overview(f: &mut Frame, area: Rect, palette: &Palette) {
    let label_width = RISK_METRICS
        .iter()
        .map(|m| m.label.len())
        .max()
        .unwrap_or(0)
        + 2;

    let lines: Vec<Line> = RISK_METRICS
        .iter()
        .flat_map(|metric| {
            [
                Line::from(vec![
                    Span::styled(
                        format!("{:<label_width$}", metric.label),
                        Style::default().fg(palette.text_muted),
                    ),
                    Span::styled(
                        metric.value,
                        metric.tone.style(palette).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(card("Key Risk Metrics", palette)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_text;

    #[test]
    fn test_lists_all_metrics() {
        let text = render_text(48, 14, render_risk_overview);
        assert!(text.contains("Key Risk Metrics"));
        assert!(text.contains("Total Exposure"));
        assert!(text.contains("$13,947"));
        assert!(text.contains("VaR (95%)"));
        assert!(text.contains("2.34"));
        assert!(text.contains("78.9%"));
    }
}
