//! Icon glyphs

use ratatui::prelude::Style;
use ratatui::text::Span;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Icon {
    TrendingUp,
    Shield,
    BarChart,
    FileCheck,
    Settings,
    Sun,
    Moon,
    Bell,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::TrendingUp => "↗",
            Icon::Shield => "◈",
            Icon::BarChart => "▥",
            Icon::FileCheck => "✓",
            Icon::Settings => "⚙",
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Bell => "⚑",
        }
    }

    /// The glyph left-aligned in a cell `size` columns wide.
    pub fn render(self, size: usize, style: Style) -> Span<'static> {
        Span::styled(format!("{:<width$}", self.glyph(), width = size.max(1)), style)
    }
}
