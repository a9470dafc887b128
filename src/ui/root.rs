//! Root composition
//!
//! Owns the view store and the active dashboard composite, observes store
//! changes and reacts to them: swapping composites on navigation, flipping
//! the document theme and forwarding timeframe changes to the panels.

use crate::chart::{ChartLibrary, ResizeListeners};
use crate::consts::cli_consts::{FOOTER_HEIGHT, HEADER_HEIGHT, SIDEBAR_WIDTH};
use crate::events::Action;
use crate::ui::dashboards::{Composite, PanelEnv, RenderContext, compose};
use crate::ui::shell::{render_footer, render_header, render_sidebar};
use crate::ui::store::{Dashboard, StateChange, ViewStore};
use crate::ui::theme::{Palette, Theme};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::prelude::Style;
use ratatui::widgets::Block;
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Document-level theme flag. Panels take their colours from its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    dark: bool,
}

impl Document {
    pub fn new(theme: Theme) -> Self {
        Self {
            dark: theme.is_dark(),
        }
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.dark = theme.is_dark();
    }

    #[cfg(test)]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn palette(&self) -> Palette {
        if self.dark {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}

pub struct Root {
    store: ViewStore,
    changes: broadcast::Receiver<StateChange>,
    document: Document,
    composite: Box<dyn Composite>,
    charts: Box<dyn ChartLibrary>,
    resize: ResizeListeners,
    nav_hits: Vec<(Rect, Dashboard)>,
    theme_toggle: Rect,
    with_background_color: bool,
    pending_resize: Option<Size>,
}

impl Root {
    pub fn new(store: ViewStore, charts: Box<dyn ChartLibrary>, with_background_color: bool) -> Self {
        let changes = store.subscribe();
        let document = Document::new(store.theme());
        let composite = compose(store.current_dashboard());
        Self {
            store,
            changes,
            document,
            composite,
            charts,
            resize: ResizeListeners::new(),
            nav_hits: Vec::new(),
            theme_toggle: Rect::default(),
            with_background_color,
            pending_resize: None,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The dashboard whose composite is currently mounted.
    #[cfg(test)]
    pub fn active_dashboard(&self) -> Dashboard {
        self.composite.dashboard()
    }

    #[cfg(test)]
    pub fn resize_listener_count(&self) -> usize {
        self.resize.len()
    }

    /// Applies a user action to the store and lets observers react.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SelectDashboard(dashboard) => self.store.set_dashboard(dashboard),
            Action::NextDashboard => {
                let next = self.store.current_dashboard().next();
                self.store.set_dashboard(next);
            }
            Action::PreviousDashboard => {
                let previous = self.store.current_dashboard().previous();
                self.store.set_dashboard(previous);
            }
            Action::ToggleTheme => {
                let theme = self.store.theme().toggled();
                self.store.set_theme(theme);
            }
            Action::NextTimeframe => {
                let next = self.store.timeframe().next();
                self.store.set_timeframe(next);
            }
            Action::PreviousTimeframe => {
                let previous = self.store.timeframe().previous();
                self.store.set_timeframe(previous);
            }
            Action::Quit => debug!("Quit is handled by the event loop"),
        }
        self.sync();
    }

    /// Drains pending store changes.
    pub fn sync(&mut self) {
        loop {
            match self.changes.try_recv() {
                Ok(change) => self.apply(change),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Missed {} view state changes, resynchronising", skipped);
                    self.resync();
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::Dashboard(dashboard) => self.mount(dashboard),
            StateChange::Theme(theme) => {
                self.document.apply_theme(theme);
                self.composite.on_theme(&self.document.palette());
            }
            StateChange::Timeframe(timeframe) => self.composite.on_timeframe(timeframe),
            StateChange::Exchange(_) | StateChange::Pair(_) => {}
        }
    }

    fn resync(&mut self) {
        self.mount(self.store.current_dashboard());
        self.document.apply_theme(self.store.theme());
        self.composite.on_theme(&self.document.palette());
        self.composite.on_timeframe(self.store.timeframe());
    }

    /// Replaces the composite; dropping the old one unmounts its panels.
    fn mount(&mut self, dashboard: Dashboard) {
        if self.composite.dashboard() == dashboard {
            return;
        }
        info!("Switching to the {} dashboard", dashboard);
        self.composite = compose(dashboard);
    }

    /// Maps a left click to an action using the layout of the last render.
    pub fn click(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        if self.theme_toggle.contains(position) {
            return Some(Action::ToggleTheme);
        }
        self.nav_hits
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|&(_, dashboard)| Action::SelectDashboard(dashboard))
    }

    /// Records a terminal resize; listeners run after the next draw.
    pub fn queue_resize(&mut self, size: Size) {
        self.pending_resize = Some(size);
    }

    pub fn render(&mut self, f: &mut Frame) {
        let palette = self.document.palette();
        let area = f.area();
        if self.with_background_color {
            f.render_widget(
                Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
                area,
            );
        }

        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(main);

        self.nav_hits = render_sidebar(f, sidebar, self.store.current_dashboard(), &palette);
        self.theme_toggle = render_header(
            f,
            header,
            self.store.selected_exchange(),
            self.store.selected_pair(),
            self.store.theme(),
            &palette,
        );

        let ctx = RenderContext {
            palette: &palette,
            timeframe: self.store.timeframe(),
        };
        self.composite.render(f, body, &ctx);
        render_footer(f, footer, self.store.timeframe(), &palette);
    }

    /// Runs post-draw effects: panel mounts, then any queued resize.
    /// Returns true when the frame is stale and should be drawn again.
    pub fn run_effects(&mut self, now: DateTime<Utc>) -> bool {
        let palette = self.document.palette();
        let env = PanelEnv {
            charts: self.charts.as_ref(),
            resize: &self.resize,
            timeframe: self.store.timeframe(),
            palette: &palette,
            now,
        };
        let mut changed = self.composite.run_effects(&env);
        if let Some(size) = self.pending_resize.take() {
            self.resize.dispatch(size);
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{MockChartLibrary, TerminalCharts};
    use crate::error::ChartError;
    use crate::ui::store::{Timeframe, ViewState};
    use crate::ui::utils::buffer_to_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use strum::IntoEnumIterator;

    const MARKERS: [(Dashboard, &str); 4] = [
        (Dashboard::Trading, "Order Book"),
        (Dashboard::Risk, "Correlation Matrix"),
        (Dashboard::Executive, "Key Performance"),
        (Dashboard::Compliance, "Transactions"),
    ];

    fn root_with(state: ViewState) -> Root {
        Root::new(ViewStore::new(state), Box::new(TerminalCharts), true)
    }

    /// Draws, runs effects, draws again if needed and returns the screen text.
    fn frame(terminal: &mut Terminal<TestBackend>, root: &mut Root) -> String {
        terminal.draw(|f| root.render(f)).unwrap();
        if root.run_effects(Utc::now()) {
            terminal.draw(|f| root.render(f)).unwrap();
        }
        buffer_to_text(terminal.backend().buffer())
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(160, 48)).unwrap()
    }

    #[test]
    // Clicking each sidebar entry renders that dashboard and no other.
    fn test_sidebar_selection_renders_matching_composite() {
        let mut terminal = terminal();
        let mut root = root_with(ViewState::default());
        frame(&mut terminal, &mut root);

        for dashboard in Dashboard::iter() {
            let (rect, _) = *root
                .nav_hits
                .iter()
                .find(|(_, d)| *d == dashboard)
                .unwrap();
            let action = root.click(rect.x + 2, rect.y).unwrap();
            root.dispatch(action);
            let text = frame(&mut terminal, &mut root);

            assert_eq!(root.active_dashboard(), dashboard);
            for (marker_dashboard, marker) in MARKERS {
                assert_eq!(
                    text.contains(marker),
                    marker_dashboard == dashboard,
                    "{marker:?} on the {dashboard} dashboard"
                );
            }
        }
    }

    #[test]
    fn test_unknown_id_renders_trading() {
        let mut terminal = terminal();
        let mut root = root_with(ViewState {
            current_dashboard: Dashboard::from_id("portfolio"),
            ..ViewState::default()
        });
        let text = frame(&mut terminal, &mut root);
        assert_eq!(root.active_dashboard(), Dashboard::Trading);
        assert!(text.contains("Order Book"));
    }

    #[test]
    // Two clicks on the toggle return the document to dark.
    fn test_theme_toggle_round_trip() {
        let mut terminal = terminal();
        let mut root = root_with(ViewState::default());
        frame(&mut terminal, &mut root);
        assert!(root.document().is_dark());

        let toggle = root.theme_toggle;
        let action = root.click(toggle.x, toggle.y).unwrap();
        assert_eq!(action, Action::ToggleTheme);
        root.dispatch(action);
        assert!(!root.document().is_dark());
        assert_eq!(root.store().theme(), Theme::Light);
        assert!(frame(&mut terminal, &mut root).contains('☾'));

        root.dispatch(Action::ToggleTheme);
        assert!(root.document().is_dark());
        assert_eq!(root.document().palette(), Palette::dark());
    }

    #[test]
    // Switching away from trading and back never accumulates listeners.
    fn test_chart_listeners_do_not_leak() {
        let mut terminal = terminal();
        let mut root = root_with(ViewState::default());

        for _ in 0..10 {
            root.dispatch(Action::SelectDashboard(Dashboard::Trading));
            frame(&mut terminal, &mut root);
            assert_eq!(root.resize_listener_count(), 1);

            root.dispatch(Action::SelectDashboard(Dashboard::Risk));
            assert_eq!(root.resize_listener_count(), 0);
        }
    }

    #[test]
    // A chart that cannot be built does not take the dashboard down.
    fn test_chart_failure_is_isolated() {
        let mut charts = MockChartLibrary::new();
        charts
            .expect_create_chart()
            .times(1)
            .returning(|_, _| Err(ChartError::Construction("unavailable".to_string())));
        let mut root = Root::new(ViewStore::default(), Box::new(charts), true);
        let mut terminal = terminal();

        let text = frame(&mut terminal, &mut root);
        assert!(text.contains("Chart unavailable"));
        assert!(text.contains("Order Book"));
        assert!(text.contains("News Feed"));
        assert_eq!(root.resize_listener_count(), 0);
    }

    #[test]
    fn test_keyboard_cycling_and_timeframe() {
        let mut root = root_with(ViewState::default());
        root.dispatch(Action::PreviousDashboard);
        assert_eq!(root.active_dashboard(), Dashboard::Compliance);
        root.dispatch(Action::NextDashboard);
        assert_eq!(root.active_dashboard(), Dashboard::Trading);

        root.dispatch(Action::NextTimeframe);
        assert_eq!(root.store().timeframe(), Timeframe::FourHours);
        root.dispatch(Action::PreviousTimeframe);
        root.dispatch(Action::PreviousTimeframe);
        assert_eq!(root.store().timeframe(), Timeframe::FifteenMinutes);
    }

    #[test]
    // An observer that falls behind catches up from the current snapshot.
    fn test_lagged_observer_resyncs() {
        let mut root = root_with(ViewState::default());
        for i in 0..100 {
            let dashboard = if i % 2 == 0 { Dashboard::Risk } else { Dashboard::Executive };
            root.store.set_dashboard(dashboard);
        }
        root.store.set_theme(Theme::Light);
        root.sync();

        assert_eq!(root.active_dashboard(), root.store().current_dashboard());
        assert!(!root.document().is_dark());
    }

    #[test]
    // A queued resize reaches the chart after the next draw.
    fn test_resize_is_flushed_after_draw() {
        let mut terminal = terminal();
        let mut root = root_with(ViewState::default());
        frame(&mut terminal, &mut root);

        root.queue_resize(Size::new(120, 40));
        terminal.draw(|f| root.render(f)).unwrap();
        assert!(root.run_effects(Utc::now()));
        assert!(!root.run_effects(Utc::now()));
    }
}
