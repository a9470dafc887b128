//! Candlestick price chart panel
//!
//! The panel renders a frame and a timeframe selector itself and hands the
//! inner area to a chart widget from the [`ChartLibrary`]. The widget only
//! exists while the panel is mounted: [`MountedChart`] owns it together with
//! its resize listener and releases both when dropped.

use super::card;
use crate::chart::{
    Candle, ChartHandle, ChartOptions, ResizeSubscription, SeriesId, SeriesOptions,
    generate_candles,
};
use crate::error::ChartError;
use crate::ui::dashboards::{PanelEnv, RenderContext};
use crate::ui::store::Timeframe;
use crate::ui::theme::Palette;
use log::{debug, warn};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use strum::IntoEnumIterator;

const CHART_PAIR: &str = "BTC/USDT";

fn chart_options(palette: &Palette) -> ChartOptions {
    ChartOptions {
        text_color: Some(palette.text_muted),
        grid_color: Some(palette.border),
        ..ChartOptions::default()
    }
}

fn series_options(palette: &Palette) -> SeriesOptions {
    SeriesOptions {
        up_color: palette.profit,
        down_color: palette.loss,
        wick_visible: true,
    }
}

type SharedHandle = Rc<RefCell<Box<dyn ChartHandle>>>;

/// A live chart widget and its resize listener.
///
/// Dropping it cancels the listener and then removes the widget.
pub struct MountedChart {
    handle: SharedHandle,
    series: SeriesId,
    seed: u64,
    end_time: i64,
    resize: ResizeSubscription,
}

impl MountedChart {
    /// Builds the widget in `container`, feeds it candles and starts
    /// following resizes.
    ///
    /// If the series cannot be added, the widget is removed before the error
    /// is returned.
    pub fn mount(env: &PanelEnv, container: Rc<Cell<Rect>>) -> Result<Self, ChartError> {
        let mut handle = env
            .charts
            .create_chart(container.get(), chart_options(env.palette))?;

        let series = match handle.add_series(series_options(env.palette)) {
            Ok(series) => series,
            Err(e) => {
                handle.remove();
                return Err(e);
            }
        };

        let end_time = env.now.timestamp();
        let seed = env.now.timestamp_millis() as u64;
        handle.set_data(series, &generate_candles(seed, end_time, env.timeframe));

        let handle: SharedHandle = Rc::new(RefCell::new(handle));
        let listener_handle = Rc::clone(&handle);
        let resize = env.resize.add_listener(move |_| {
            let width = container.get().width;
            if width == 0 {
                return;
            }
            if let Err(e) = listener_handle
                .borrow_mut()
                .apply_options(ChartOptions::with_width(width))
            {
                warn!("Failed to resize price chart: {}", e);
            }
        });

        debug!("Mounted price chart with {} candles", env.timeframe);
        Ok(Self {
            handle,
            series,
            seed,
            end_time,
            resize,
        })
    }

    /// Replaces the series with candles of the given interval, keeping the
    /// mount-time seed and end time.
    pub fn set_timeframe(&self, timeframe: Timeframe) {
        let candles: Vec<Candle> = generate_candles(self.seed, self.end_time, timeframe);
        self.handle.borrow_mut().set_data(self.series, &candles);
    }

    pub fn apply_palette(&self, palette: &Palette) {
        if let Err(e) = self.handle.borrow_mut().apply_options(chart_options(palette)) {
            warn!("Failed to restyle price chart: {}", e);
        }
    }

    fn draw(&self, f: &mut Frame, area: Rect) {
        self.handle.borrow().draw(f.buffer_mut(), area);
    }
}

impl Drop for MountedChart {
    fn drop(&mut self) {
        self.resize.cancel();
        self.handle.borrow_mut().remove();
        debug!("Unmounted price chart");
    }
}

/// Price chart panel state.
#[derive(Default)]
pub struct PriceChart {
    container: Rc<Cell<Rect>>,
    laid_out: bool,
    mounted: Option<MountedChart>,
    failure: Option<ChartError>,
}

impl PriceChart {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[cfg(test)]
    pub fn failure(&self) -> Option<&ChartError> {
        self.failure.as_ref()
    }

    fn place(&mut self, area: Rect) {
        self.container.set(area);
        self.laid_out = true;
    }

    /// Mounts the chart once its container has been laid out.
    ///
    /// A missing or empty container is skipped and tried again on the next
    /// pass. A failed mount is not retried; the panel shows a placeholder.
    pub fn mount_if_ready(&mut self, env: &PanelEnv) -> bool {
        if self.mounted.is_some() || self.failure.is_some() {
            return false;
        }
        if !self.laid_out || self.container.get().is_empty() {
            return false;
        }
        match MountedChart::mount(env, Rc::clone(&self.container)) {
            Ok(mounted) => self.mounted = Some(mounted),
            Err(e) => {
                warn!("Price chart unavailable: {}", e);
                self.failure = Some(e);
            }
        }
        true
    }

    pub fn on_timeframe(&mut self, timeframe: Timeframe) {
        if let Some(mounted) = &self.mounted {
            mounted.set_timeframe(timeframe);
        }
    }

    pub fn on_theme(&mut self, palette: &Palette) {
        if let Some(mounted) = &self.mounted {
            mounted.apply_palette(palette);
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = card(CHART_PAIR, ctx.palette);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [selector, chart] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        f.render_widget(
            Paragraph::new(timeframe_selector(ctx.timeframe, ctx.palette)),
            selector,
        );

        self.place(chart);
        if let Some(mounted) = &self.mounted {
            mounted.draw(f, chart);
        } else if self.failure.is_some() {
            f.render_widget(
                Paragraph::new("Chart unavailable").style(Style::default().fg(ctx.palette.loss)),
                chart,
            );
        } else {
            f.render_widget(
                Paragraph::new("Loading chart...")
                    .style(Style::default().fg(ctx.palette.text_muted)),
                chart,
            );
        }
    }
}

fn timeframe_selector(active: Timeframe, palette: &Palette) -> Line<'static> {
    let spans: Vec<Span> = Timeframe::iter()
        .map(|timeframe| {
            let style = if timeframe == active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.text_muted)
            };
            Span::styled(format!(" {timeframe} "), style)
        })
        .collect();
    Line::from(spans)
}
