//! Dashboard panels
//!
//! Each panel renders fixed sample data into a card. Only the price chart
//! holds state (its chart widget while mounted).

pub mod alerts;
pub mod compliance_metrics;
pub mod correlation;
pub mod exposure;
pub mod kpi;
pub mod news;
pub mod order_book;
pub mod performance;
pub mod positions;
pub mod price_chart;
pub mod risk_overview;
pub mod transactions;

use crate::ui::theme::Palette;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Rounded card frame with a bold title.
pub fn card<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::horizontal(1))
}

/// Tone of a headline figure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Neutral,
    Positive,
    Negative,
}

impl Tone {
    pub fn style(self, palette: &Palette) -> Style {
        let color = match self {
            Tone::Accent => palette.accent,
            Tone::Neutral => palette.text,
            Tone::Positive => palette.profit,
            Tone::Negative => palette.loss,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ui::theme::Palette;
    use crate::ui::utils::buffer_to_text;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::{Frame, Terminal};

    /// Renders one panel into a fresh `width` x `height` frame and returns its text.
    pub fn render_text(
        width: u16,
        height: u16,
        render: impl FnOnce(&mut Frame, Rect, &Palette),
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &Palette::dark()))
            .unwrap();
        buffer_to_text(terminal.backend().buffer())
    }

    /// Row index of the first line containing `needle`.
    pub fn row_of(text: &str, needle: &str) -> Option<usize> {
        text.lines().position(|line| line.contains(needle))
    }
}
