//! Screened transaction log

use super::card;
use crate::ui::theme::Palette;
use crate::ui::utils::{format_grouped, format_usd};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

/// Outcome of the compliance screening of one transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screening {
    Cleared,
    Review,
    Flagged,
}

impl Screening {
    pub fn label(self) -> &'static str {
        match self {
            Screening::Cleared => "Cleared",
            Screening::Review => "Review",
            Screening::Flagged => "Flagged",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub id: &'static str,
    pub time: &'static str,
    pub pair: &'static str,
    pub side: Side,
    pub amount: f64,
    pub value: f64,
    pub screening: Screening,
}

pub const TRANSACTIONS: [Transaction; 6] = [
    Transaction {
        id: "TX-10421",
        time: "14:32:05",
        pair: "BTC/USDT",
        side: Side::Buy,
        amount: 0.5,
        value: 25000.0,
        screening: Screening::Cleared,
    },
    Transaction {
        id: "TX-10420",
        time: "14:28:41",
        pair: "ETH/USDT",
        side: Side::Sell,
        amount: 4.0,
        value: 11400.0,
        screening: Screening::Cleared,
    },
    Transaction {
        id: "TX-10419",
        time: "14:15:12",
        pair: "SOL/USDT",
        side: Side::Buy,
        amount: 120.0,
        value: 17280.0,
        screening: Screening::Review,
    },
    Transaction {
        id: "TX-10418",
        time: "13:58:30",
        pair: "BTC/USDT",
        side: Side::Sell,
        amount: 0.25,
        value: 12487.5,
        screening: Screening::Cleared,
    },
    Transaction {
        id: "TX-10417",
        time: "13:41:09",
        pair: "ADA/USDT",
        side: Side::Buy,
        amount: 15000.0,
        value: 6750.0,
        screening: Screening::Cleared,
    },
    Transaction {
        id: "TX-10416",
        time: "13:22:47",
        pair: "ETH/USDT",
        side: Side::Buy,
        amount: 10.0,
        value: 28500.0,
        screening: Screening::Flagged,
    },
];

/// Number of logged transactions with the given screening outcome.
pub fn count_screened(screening: Screening) -> usize {
    TRANSACTIONS
        .iter()
        .filter(|tx| tx.screening == screening)
        .count()
}

pub fn render_transactions(f: &mut Frame, area: Rect, palette: &Palette) {
    let rows = TRANSACTIONS.iter().map(|tx| {
        let (side, side_color) = match tx.side {
            Side::Buy => ("BUY", palette.profit),
            Side::Sell => ("SELL", palette.loss),
        };
        let status_color = match tx.screening {
            Screening::Cleared => palette.profit,
            Screening::Review => palette.warning,
            Screening::Flagged => palette.loss,
        };
        Row::new(vec![
            Cell::from(tx.id).style(Style::default().fg(palette.text_muted)),
            Cell::from(tx.time),
            Cell::from(tx.pair),
            Cell::from(side).style(Style::default().fg(side_color)),
            Cell::from(format_grouped(tx.amount, 4)),
            Cell::from(format_usd(tx.value, 2)),
            Cell::from(tx.screening.label()).style(Style::default().fg(status_color)),
        ])
        .style(Style::default().fg(palette.text))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Min(8),
        ],
    )
    .header(
        Row::new(vec!["ID", "Time", "Pair", "Side", "Amount", "Value", "Status"]).style(
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(card("Transactions", palette));

    f.render_widget(table, area);
}
