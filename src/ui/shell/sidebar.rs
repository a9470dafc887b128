//! Navigation sidebar
//!
//! Lists the dashboards in a fixed order and highlights the active one.

use crate::ui::icons::Icon;
use crate::ui::store::Dashboard;
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub dashboard: Dashboard,
    pub icon: Icon,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem { dashboard: Dashboard::Trading, icon: Icon::TrendingUp },
    MenuItem { dashboard: Dashboard::Risk, icon: Icon::Shield },
    MenuItem { dashboard: Dashboard::Executive, icon: Icon::BarChart },
    MenuItem { dashboard: Dashboard::Compliance, icon: Icon::FileCheck },
];

const ICON_SIZE: usize = 3;

/// Renders the sidebar and returns the clickable row of each entry.
pub fn render_sidebar(
    f: &mut Frame,
    area: Rect,
    active: Dashboard,
    palette: &Palette,
) -> Vec<(Rect, Dashboard)> {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [brand, menu, settings] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                " LYRA",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " Trading Platform",
                Style::default().fg(palette.text_muted),
            )),
        ]),
        brand,
    );

    let mut hits = Vec::with_capacity(MENU_ITEMS.len());
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let row = Rect {
            y: menu.y + (i as u16) * 2,
            height: 1,
            ..menu
        };
        if row.bottom() > menu.bottom() {
            break;
        }
        let selected = item.dashboard == active;
        let style = if selected {
            Style::default()
                .fg(palette.accent)
                .bg(palette.elevated)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let marker = if selected { "▌" } else { " " };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::raw(" "),
                item.icon.render(ICON_SIZE, style),
                Span::styled(item.dashboard.label(), style),
            ]))
            .style(style),
            row,
        );
        hits.push((row, item.dashboard));
    }

    let muted = Style::default().fg(palette.text_muted);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("  "),
            Icon::Settings.render(ICON_SIZE, muted),
            Span::styled("Settings", muted),
        ])),
        settings,
    );

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::row_of;
    use crate::ui::utils::buffer_to_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    // Entries appear in menu order and each hit row matches its label.
    fn test_entries_and_hit_rows() {
        let mut terminal = Terminal::new(TestBackend::new(24, 16)).unwrap();
        let mut hits = Vec::new();
        terminal
            .draw(|f| {
                hits = render_sidebar(f, f.area(), Dashboard::Risk, &Palette::dark());
            })
            .unwrap();
        let text = buffer_to_text(terminal.backend().buffer());

        assert_eq!(hits.len(), 4);
        for ((rect, dashboard), item) in hits.iter().zip(MENU_ITEMS.iter()) {
            assert_eq!(*dashboard, item.dashboard);
            let entry = format!("{}  {}", item.icon.glyph(), dashboard.label());
            assert_eq!(row_of(&text, &entry), Some(rect.y as usize));
        }
        assert!(text.contains("LYRA"));
        assert!(text.contains("Settings"));
        assert!(text.contains("▌ ◈  Risk"));
    }
}
