//! Open positions panel

use super::card;
use crate::ui::theme::Palette;
use crate::ui::utils::{format_pnl, format_usd};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// A position with its P&L already computed upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub pair: &'static str,
    pub size: f64,
    pub entry: f64,
    pub current: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}

impl Position {
    pub fn pnl_label(&self) -> String {
        format_pnl(self.pnl, self.pnl_percent)
    }
}

pub const POSITIONS: [Position; 2] = [
    Position {
        pair: "BTC/USDT",
        size: 0.5,
        entry: 49500.0,
        current: 50000.0,
        pnl: 250.0,
        pnl_percent: 1.01,
    },
    Position {
        pair: "ETH/USDT",
        size: 10.0,
        entry: 2800.0,
        current: 2850.0,
        pnl: 500.0,
        pnl_percent: 1.79,
    },
];

fn position_lines<'a>(position: &Position, palette: &Palette) -> Vec<Line<'a>> {
    let label = Style::default().fg(palette.text_muted);
    let value = Style::default().fg(palette.text);
    let pnl_color = if position.pnl > 0.0 {
        palette.profit
    } else {
        palette.loss
    };

    vec![
        Line::from(vec![
            Span::styled(
                format!("{:<10}", position.pair),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                position.pnl_label(),
                Style::default().fg(pnl_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Size: ", label),
            Span::styled(format!("{}", position.size), value),
            Span::styled("  Entry: ", label),
            Span::styled(format_usd(position.entry, 0), value),
            Span::styled("  Current: ", label),
            Span::styled(format_usd(position.current, 0), value),
        ]),
        Line::from(Span::styled("[ Close Position ]", Style::default().fg(palette.loss))),
        Line::from(""),
    ]
}

pub fn render_positions(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = vec![
        Line::from(Span::styled(
            "[ New Trade ]",
            Style::default().fg(palette.accent),
        )),
        Line::from(""),
    ];
    for position in &POSITIONS {
        lines.extend(position_lines(position, palette));
    }

    let paragraph = Paragraph::new(lines)
        .block(card("Open Positions", palette))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
