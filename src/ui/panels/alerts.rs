//! Active risk alerts

use super::card;
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlertLevel {
    Ok,
    Warning,
}

pub const ALERTS: [(AlertLevel, &str); 4] = [
    (AlertLevel::Ok, "All systems operational"),
    (AlertLevel::Warning, "BTC correlation high (0.85)"),
    (AlertLevel::Ok, "Risk limits: OK"),
    (AlertLevel::Ok, "Exposure within limits"),
];

pub fn render_alerts(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines: Vec<Line> = ALERTS
        .iter()
        .map(|&(level, message)| {
            let (glyph, color) = match level {
                AlertLevel::Ok => ("✓", palette.profit),
                AlertLevel::Warning => ("!", palette.warning),
            };
            Line::from(vec![
                Span::styled(format!("{glyph} "), Style::default().fg(color)),
                Span::styled(message, Style::default().fg(palette.text)),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .block(card("Active Alerts", palette))
            .wrap(Wrap { trim: true }),
        area,
    );
}
