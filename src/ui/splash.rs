//! Splash screen rendering module.

use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_NAME: &str = r#"
  ██╗     ██╗   ██╗  ██████╗    █████╗
  ██║     ╚██╗ ██╔╝  ██╔══██╗  ██╔══██╗
  ██║      ╚████╔╝   ██████╔╝  ███████║
  ██║       ╚██╔╝    ██╔══██╗  ██╔══██║
  ███████╗   ██║     ██║  ██║  ██║  ██║
  ╚══════╝   ╚═╝     ╚═╝  ╚═╝  ╚═╝  ╚═╝
"#;

pub fn render_splash(f: &mut Frame, palette: &Palette) {
    // Convert LOGO_NAME into styled Lines
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled(
            format!("Trading Platform v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    let logo_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(logo_height)) / 2),
            Constraint::Length(logo_height),
            Constraint::Min((f.area().height.saturating_sub(logo_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, centered_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::utils::buffer_to_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_splash_shows_logo_and_version() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render_splash(f, &Palette::dark()))
            .unwrap();
        let text = buffer_to_text(terminal.backend().buffer());
        assert!(text.contains("██████╔╝"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }
}
