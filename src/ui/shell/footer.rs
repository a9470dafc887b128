//! Footer with key hints

use crate::ui::store::Timeframe;
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, timeframe: Timeframe, palette: &Palette) {
    let footer_text = format!(
        "[1-4] Dashboard | [Tab] Next | [T] Theme | [F] Timeframe ({timeframe}) | [Q] Quit"
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(footer, area);
}
