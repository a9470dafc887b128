//! Candlestick chart drawn with box-drawing glyphs
//!
//! One column per candle, newest on the right, price labels on the right
//! edge and the first/last candle time along the bottom.

use super::{Candle, ChartHandle, ChartLibrary, ChartOptions, SeriesId, SeriesOptions};
use crate::consts::cli_consts::chart::PRICE_AXIS_WIDTH;
use crate::error::ChartError;
use chrono::DateTime;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};

/// The built-in chart backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalCharts;

impl ChartLibrary for TerminalCharts {
    fn create_chart(
        &self,
        container: Rect,
        options: ChartOptions,
    ) -> Result<Box<dyn ChartHandle>, ChartError> {
        if container.is_empty() {
            return Err(ChartError::ZeroArea);
        }
        Ok(Box::new(CandlestickChart::new(container, options)))
    }
}

#[derive(Debug)]
struct Series {
    options: SeriesOptions,
    data: Vec<Candle>,
}

#[derive(Debug)]
pub struct CandlestickChart {
    width: u16,
    height: u16,
    background: Option<Color>,
    text_color: Color,
    grid_color: Color,
    series: Vec<Series>,
    removed: bool,
}

impl CandlestickChart {
    pub fn new(container: Rect, options: ChartOptions) -> Self {
        Self {
            width: options.width.unwrap_or(container.width),
            height: options.height.unwrap_or(container.height),
            background: options.background,
            text_color: options.text_color.unwrap_or(Color::Gray),
            grid_color: options.grid_color.unwrap_or(Color::DarkGray),
            series: Vec::new(),
            removed: false,
        }
    }

    #[cfg(test)]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[cfg(test)]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    fn draw_series(&self, series: &Series, buf: &mut Buffer, plot: Rect) {
        let visible = series.data.len().min(plot.width as usize);
        let candles = &series.data[series.data.len() - visible..];
        if candles.is_empty() {
            return;
        }

        let max = candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let min = candles.iter().map(|c| c.low).fold(f64::MAX, f64::min);
        let range = (max - min).max(f64::EPSILON);
        let rows = f64::from(plot.height.saturating_sub(1));
        let row_of = |price: f64| plot.y + (((max - price) / range) * rows).round() as u16;

        // Right-align the newest candle against the price axis.
        let first_x = plot.right() - visible as u16;
        for (i, candle) in candles.iter().enumerate() {
            let x = first_x + i as u16;
            let color = if candle.is_up() {
                series.options.up_color
            } else {
                series.options.down_color
            };
            if series.options.wick_visible {
                for y in row_of(candle.high)..=row_of(candle.low) {
                    put(buf, x, y, "│", color);
                }
            }
            for y in row_of(candle.open.max(candle.close))..=row_of(candle.open.min(candle.close)) {
                put(buf, x, y, "┃", color);
            }
        }

        let label_x = plot.right() + 1;
        let label_style = Style::default().fg(self.text_color);
        buf.set_string(label_x, plot.y, format!("{max:.0}"), label_style);
        buf.set_string(label_x, plot.bottom() - 1, format!("{min:.0}"), label_style);

        let axis_y = plot.bottom();
        if let (Some(first), Some(last)) = (candles.first(), candles.last()) {
            let start = format_time(first.time);
            let end = format_time(last.time);
            buf.set_string(first_x, axis_y, &start, label_style);
            let end_x = plot.right().saturating_sub(end.len() as u16).max(first_x);
            if end_x >= first_x + start.len() as u16 + 1 {
                buf.set_string(end_x, axis_y, &end, label_style);
            }
        }
    }
}

impl ChartHandle for CandlestickChart {
    fn add_series(&mut self, options: SeriesOptions) -> Result<SeriesId, ChartError> {
        if self.removed {
            return Err(ChartError::Disposed);
        }
        self.series.push(Series {
            options,
            data: Vec::new(),
        });
        Ok(SeriesId(self.series.len() as u32 - 1))
    }

    fn set_data(&mut self, series: SeriesId, data: &[Candle]) {
        if let Some(series) = self.series.get_mut(series.0 as usize) {
            series.data = data.to_vec();
        }
    }

    fn apply_options(&mut self, options: ChartOptions) -> Result<(), ChartError> {
        if self.removed {
            return Err(ChartError::Disposed);
        }
        if options.width == Some(0) || options.height == Some(0) {
            return Err(ChartError::Resize("zero-sized chart".to_string()));
        }
        if let Some(width) = options.width {
            self.width = width;
        }
        if let Some(height) = options.height {
            self.height = height;
        }
        if options.background.is_some() {
            self.background = options.background;
        }
        if let Some(color) = options.text_color {
            self.text_color = color;
        }
        if let Some(color) = options.grid_color {
            self.grid_color = color;
        }
        Ok(())
    }

    fn remove(&mut self) {
        self.removed = true;
        self.series.clear();
    }

    fn draw(&self, buf: &mut Buffer, area: Rect) {
        if self.removed {
            return;
        }
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        }
        .intersection(buf.area);
        if let Some(background) = self.background {
            buf.set_style(area, Style::default().bg(background));
        }
        // Reserve the price axis on the right and the time axis at the bottom.
        if area.width <= PRICE_AXIS_WIDTH + 1 || area.height < 3 {
            return;
        }
        let plot = Rect {
            width: area.width - PRICE_AXIS_WIDTH - 1,
            height: area.height - 1,
            ..area
        };
        for y in (plot.y..plot.bottom()).step_by(4) {
            buf.set_style(
                Rect::new(plot.x, y, plot.width, 1),
                Style::default().fg(self.grid_color),
            );
        }
        for series in &self.series {
            self.draw_series(series, buf, plot);
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, color: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_fg(color);
    }
}

fn format_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.format("%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::generate_candles;
    use crate::ui::store::Timeframe;

    fn series_options() -> SeriesOptions {
        SeriesOptions {
            up_color: Color::Green,
            down_color: Color::Red,
            wick_visible: true,
        }
    }

    fn drawn_columns(buf: &Buffer, area: Rect) -> Vec<u16> {
        (area.left()..area.right())
            .filter(|&x| {
                (area.top()..area.bottom()).any(|y| {
                    let symbol = buf[(x, y)].symbol();
                    symbol == "┃" || symbol == "│"
                })
            })
            .collect()
    }

    #[test]
    fn test_zero_area_container_is_rejected() {
        let result = TerminalCharts.create_chart(Rect::new(0, 0, 0, 10), ChartOptions::default());
        assert!(matches!(result, Err(ChartError::ZeroArea)));
    }

    #[test]
    // Every plot column gets a candle when there is more data than width.
    fn test_draws_one_candle_per_column() {
        let area = Rect::new(0, 0, 60, 16);
        let mut chart = CandlestickChart::new(area, ChartOptions::default());
        let series = chart.add_series(series_options()).unwrap();
        chart.set_data(series, &generate_candles(3, 1_760_000_000, Timeframe::OneHour));

        let mut buf = Buffer::empty(area);
        chart.draw(&mut buf, area);

        let plot_width = 60 - PRICE_AXIS_WIDTH - 1;
        assert_eq!(drawn_columns(&buf, area).len(), plot_width as usize);
    }

    #[test]
    // Narrowing the chart through its options narrows what gets drawn.
    fn test_apply_width_limits_drawing() {
        let area = Rect::new(0, 0, 80, 16);
        let mut chart = CandlestickChart::new(area, ChartOptions::default());
        let series = chart.add_series(series_options()).unwrap();
        chart.set_data(series, &generate_candles(3, 1_760_000_000, Timeframe::OneHour));
        chart.apply_options(ChartOptions::with_width(40)).unwrap();
        assert_eq!(chart.width(), 40);

        let mut buf = Buffer::empty(area);
        chart.draw(&mut buf, area);
        assert!(drawn_columns(&buf, area).iter().all(|&x| x < 40));
    }

    #[test]
    fn test_zero_width_resize_fails() {
        let mut chart = CandlestickChart::new(Rect::new(0, 0, 40, 10), ChartOptions::default());
        assert!(matches!(
            chart.apply_options(ChartOptions::with_width(0)),
            Err(ChartError::Resize(_))
        ));
    }

    #[test]
    // A removed chart refuses further work and draws nothing.
    fn test_removed_chart_is_inert() {
        let area = Rect::new(0, 0, 40, 10);
        let mut chart = CandlestickChart::new(area, ChartOptions::default());
        let series = chart.add_series(series_options()).unwrap();
        chart.set_data(series, &generate_candles(3, 1_760_000_000, Timeframe::OneHour));
        chart.remove();

        assert!(chart.is_removed());
        assert_eq!(chart.add_series(series_options()), Err(ChartError::Disposed));
        assert_eq!(
            chart.apply_options(ChartOptions::with_width(20)),
            Err(ChartError::Disposed)
        );

        let mut buf = Buffer::empty(area);
        chart.draw(&mut buf, area);
        assert!(drawn_columns(&buf, area).is_empty());
    }
}
