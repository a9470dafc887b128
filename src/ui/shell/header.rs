//! Header bar
//!
//! Exchange and pair on the left, notifications and the theme toggle on the right.

use crate::ui::icons::Icon;
use crate::ui::theme::{Palette, Theme};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TOGGLE_WIDTH: u16 = 5;
const BELL_WIDTH: u16 = 4;

/// Renders the header and returns the area of the theme toggle.
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    exchange: &str,
    pair: &str,
    theme: Theme,
    palette: &Palette,
) -> Rect {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [labels, bell, toggle] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(BELL_WIDTH),
        Constraint::Length(TOGGLE_WIDTH),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {exchange}"),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {pair}"),
                Style::default().fg(palette.text_muted),
            )),
        ]),
        labels,
    );

    f.render_widget(
        Paragraph::new(Icon::Bell.render(1, Style::default().fg(palette.text_muted)))
            .alignment(Alignment::Center),
        bell,
    );

    let icon = if theme.is_dark() { Icon::Sun } else { Icon::Moon };
    f.render_widget(
        Paragraph::new(icon.render(1, Style::default().fg(palette.warning)))
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.elevated)),
        toggle,
    );

    toggle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::utils::buffer_to_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(theme: Theme) -> (String, Rect) {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let mut toggle = Rect::default();
        terminal
            .draw(|f| {
                toggle = render_header(f, f.area(), "OKX", "BTC/USDT", theme, &Palette::dark());
            })
            .unwrap();
        (buffer_to_text(terminal.backend().buffer()), toggle)
    }

    #[test]
    // Sun while dark, moon while light, always at the right edge.
    fn test_toggle_glyph_follows_theme() {
        let (dark, toggle) = render(Theme::Dark);
        assert!(dark.contains("OKX"));
        assert!(dark.contains("BTC/USDT"));
        assert!(dark.contains('☀'));
        assert!(dark.contains('⚑'));
        assert_eq!(toggle.right(), 60);

        let (light, _) = render(Theme::Light);
        assert!(light.contains('☾'));
        assert!(!light.contains('☀'));
    }
}
