//! Executive KPI cards

use super::{Tone, card};
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub tone: Tone,
}

pub const KPIS: [Kpi; 4] = [
    Kpi { label: "Total P&L", value: "+$2,847", change: "+24.5%", tone: Tone::Positive },
    Kpi { label: "Win Rate", value: "78.9%", change: "+5.2%", tone: Tone::Accent },
    Kpi { label: "Total Trades", value: "2,718", change: "+342", tone: Tone::Neutral },
    Kpi { label: "Avg Trade", value: "$149", change: "+$12", tone: Tone::Positive },
];

fn render_kpi(f: &mut Frame, area: Rect, kpi: &Kpi, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            kpi.label,
            Style::default().fg(palette.text_muted),
        )),
        Line::from(Span::styled(
            kpi.value,
            kpi.tone.style(palette).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} this month", kpi.change),
            Style::default().fg(palette.profit),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.elevated));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

pub fn render_kpi_summary(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = card("Key Performance", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(inner);
    for (kpi, cell) in KPIS.iter().zip(cells.iter()) {
        render_kpi(f, *cell, kpi, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::{render_text, row_of};

    #[test]
    // All four cards sit side by side on the same rows.
    fn test_cards_share_a_row() {
        let text = render_text(120, 8, render_kpi_summary);
        assert!(text.contains("Key Performance"));
        let pnl = row_of(&text, "+$2,847").unwrap();
        assert_eq!(row_of(&text, "2,718"), Some(pnl));
        assert_eq!(row_of(&text, "$149"), Some(pnl));
        assert!(text.contains("+24.5% this month"));
    }
}
