//! Asset correlation matrix

use super::card;
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

pub const ASSETS: [&str; 4] = ["BTC", "ETH", "SOL", "ADA"];

pub const CORRELATIONS: [[f64; 4]; 4] = [
    [1.00, 0.85, 0.72, 0.68],
    [0.85, 1.00, 0.78, 0.71],
    [0.72, 0.78, 1.00, 0.65],
    [0.68, 0.71, 0.65, 1.00],
];

/// Colour for a coefficient; strong off-diagonal correlations stand out.
fn correlation_color(value: f64, palette: &Palette) -> Color {
    if value >= 1.0 {
        palette.text_muted
    } else if value >= 0.8 {
        palette.loss
    } else if value >= 0.7 {
        palette.warning
    } else {
        palette.profit
    }
}

pub fn render_correlation_matrix(f: &mut Frame, area: Rect, palette: &Palette) {
    let header_style = Style::default()
        .fg(palette.text_muted)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(ASSETS.iter().map(|asset| Cell::from(*asset)))
            .collect::<Vec<_>>(),
    )
    .style(header_style);

    let rows = ASSETS.iter().zip(CORRELATIONS.iter()).map(|(asset, row)| {
        let mut cells = vec![Cell::from(*asset).style(header_style)];
        cells.extend(row.iter().map(|&value| {
            Cell::from(format!("{value:.2}"))
                .style(Style::default().fg(correlation_color(value, palette)))
        }));
        Row::new(cells)
    });

    let table = Table::new(rows, [Constraint::Length(6); 5])
        .header(header)
        .column_spacing(2)
        .block(card("Correlation Matrix", palette));
    f.render_widget(table, area);
}
