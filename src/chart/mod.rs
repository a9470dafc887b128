//! Charting backend
//!
//! The price panel talks to its chart through [`ChartLibrary`] and
//! [`ChartHandle`] so the widget can be swapped or mocked. The built-in
//! backend draws candlesticks straight into the terminal buffer.

pub mod candles;
pub mod resize;
pub mod terminal;

pub use candles::generate_candles;
pub use resize::{ResizeListeners, ResizeSubscription};
pub use terminal::TerminalCharts;

use crate::error::ChartError;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Color;

/// One OHLC bar. `time` is a unix timestamp in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Chart-wide options. Unset fields are left unchanged by `apply_options`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub grid_color: Option<Color>,
}

impl ChartOptions {
    pub fn with_width(width: u16) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }
}

/// Styling for a candlestick series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesOptions {
    pub up_color: Color,
    pub down_color: Color,
    pub wick_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(pub u32);

/// Factory for chart widgets.
#[cfg_attr(test, mockall::automock)]
pub trait ChartLibrary {
    /// Builds a chart bound to `container`.
    fn create_chart(
        &self,
        container: Rect,
        options: ChartOptions,
    ) -> Result<Box<dyn ChartHandle>, ChartError>;
}

/// A live chart widget. Owners must call [`ChartHandle::remove`] when done.
#[cfg_attr(test, mockall::automock)]
pub trait ChartHandle {
    fn add_series(&mut self, options: SeriesOptions) -> Result<SeriesId, ChartError>;

    fn set_data(&mut self, series: SeriesId, data: &[Candle]);

    fn apply_options(&mut self, options: ChartOptions) -> Result<(), ChartError>;

    /// Disposes the widget. Further calls are no-ops.
    fn remove(&mut self);

    fn draw(&self, buf: &mut Buffer, area: Rect);
}
