//! News feed panel

use super::card;
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub title: &'static str,
    pub source: &'static str,
    pub age: &'static str,
    pub sentiment: Sentiment,
}

pub const NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "Bitcoin reaches new all-time high",
        source: "CoinDesk",
        age: "5m ago",
        sentiment: Sentiment::Bullish,
    },
    NewsItem {
        title: "Ethereum upgrade scheduled for Q2",
        source: "CryptoPanic",
        age: "15m ago",
        sentiment: Sentiment::Bullish,
    },
    NewsItem {
        title: "SEC announces new crypto regulations",
        source: "Bloomberg",
        age: "1h ago",
        sentiment: Sentiment::Neutral,
    },
];

pub fn render_news_feed(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for item in &NEWS {
        let marker = match item.sentiment {
            Sentiment::Bullish => palette.profit,
            Sentiment::Neutral => palette.text_muted,
            Sentiment::Bearish => palette.loss,
        };
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(marker)),
            Span::styled(item.age, Style::default().fg(palette.text_muted)),
        ]));
        lines.push(Line::from(Span::styled(
            item.title,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            item.source,
            Style::default().fg(palette.accent),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(card("News Feed", palette))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::{render_text, row_of};

    #[test]
    fn test_news_in_listed_order() {
        let text = render_text(60, 16, render_news_feed);
        let first = row_of(&text, "all-time high").unwrap();
        let second = row_of(&text, "Ethereum upgrade").unwrap();
        let third = row_of(&text, "SEC announces").unwrap();
        assert!(first < second && second < third);
        assert!(text.contains("CoinDesk"));
        assert!(text.contains("15m ago"));
    }
}
