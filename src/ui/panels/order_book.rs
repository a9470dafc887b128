//! Order book panel
//!
//! Asks on top (highest price first), the spread, then bids.

use super::card;
use crate::ui::theme::Palette;
use crate::ui::utils::format_grouped;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Row, Table};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookLevel {
    pub price: f64,
    pub amount: f64,
    pub total: f64,
}

pub const BIDS: [BookLevel; 3] = [
    BookLevel { price: 50000.0, amount: 1.5, total: 75000.0 },
    BookLevel { price: 49950.0, amount: 2.3, total: 114885.0 },
    BookLevel { price: 49900.0, amount: 0.8, total: 39920.0 },
];

pub const ASKS: [BookLevel; 3] = [
    BookLevel { price: 50050.0, amount: 1.2, total: 60060.0 },
    BookLevel { price: 50100.0, amount: 1.8, total: 90180.0 },
    BookLevel { price: 50150.0, amount: 2.1, total: 105315.0 },
];

/// Asks in display order: the last listed level goes on top.
pub fn asks_top_down(asks: &[BookLevel]) -> Vec<BookLevel> {
    asks.iter().rev().copied().collect()
}

/// Best ask minus best bid, absolute and as a percentage of the best bid.
pub fn spread(asks: &[BookLevel], bids: &[BookLevel]) -> Option<(f64, f64)> {
    let best_ask = asks.iter().map(|l| l.price).reduce(f64::min)?;
    let best_bid = bids.iter().map(|l| l.price).reduce(f64::max)?;
    let spread = best_ask - best_bid;
    Some((spread, spread / best_bid * 100.0))
}

fn level_row(level: &BookLevel, style: Style) -> Row<'static> {
    Row::new(vec![
        format_grouped(level.price, 0),
        format!("{:.4}", level.amount),
        format_grouped(level.total, 0),
    ])
    .style(style)
}

pub fn render_order_book(f: &mut Frame, area: Rect, palette: &Palette) {
    let ask_style = Style::default().fg(palette.loss);
    let bid_style = Style::default().fg(palette.profit);

    let mut rows: Vec<Row> = asks_top_down(&ASKS)
        .iter()
        .map(|level| level_row(level, ask_style))
        .collect();

    let spread_text = spread(&ASKS, &BIDS)
        .map(|(value, percent)| format!("{value:.2} ({percent:.2}%)"))
        .unwrap_or_else(|| "-".to_string());
    rows.push(
        Row::new(vec!["Spread".to_string(), spread_text, String::new()])
            .style(Style::default().fg(palette.text_muted)),
    );

    rows.extend(BIDS.iter().map(|level| level_row(level, bid_style)));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ],
    )
    .header(
        Row::new(vec!["Price", "Amount", "Total"]).style(
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(card("Order Book", palette));

    f.render_widget(table, area);
}
