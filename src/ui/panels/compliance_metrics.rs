//! Compliance metrics

use super::card;
use super::transactions::{Screening, count_screened};
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

/// Coverage ratios shown as gauges, in percent.
pub const COVERAGE: [(&str, f64); 3] = [
    ("KYC Verified", 100.0),
    ("AML Screening", 98.7),
    ("Travel Rule", 94.2),
];

pub fn render_compliance_metrics(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = card("Compliance Metrics", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [gauges, summary] =
        Layout::vertical([Constraint::Length(COVERAGE.len() as u16 * 2), Constraint::Min(0)])
            .areas(inner);
    let rows = Layout::vertical([Constraint::Length(2); 3]).split(gauges);

    for (&(label, percent), row) in COVERAGE.iter().zip(rows.iter()) {
        let [title, bar] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);
        f.render_widget(
            Paragraph::new(label).style(Style::default().fg(palette.text_muted)),
            title,
        );
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(palette.accent).bg(palette.elevated))
                .ratio((percent / 100.0).clamp(0.0, 1.0))
                .label(format!("{percent:.1}%")),
            bar,
        );
    }

    let value_style = Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(palette.text_muted);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Flagged Transactions  ", label_style),
            Span::styled(count_screened(Screening::Flagged).to_string(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Pending Reviews       ", label_style),
            Span::styled(count_screened(Screening::Review).to_string(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Regulatory Status     ", label_style),
            Span::styled("Compliant", Style::default().fg(palette.profit)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_text;

    #[test]
    fn test_renders_coverage_and_counts() {
        let text = render_text(44, 14, render_compliance_metrics);
        assert!(text.contains("Compliance Metrics"));
        assert!(text.contains("KYC Verified"));
        assert!(text.contains("98.7%"));
        assert!(text.contains("Flagged Transactions  1"));
        assert!(text.contains("Pending Reviews       1"));
    }
}
