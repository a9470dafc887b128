//! View selection store
//!
//! Holds the five UI selections (dashboard, theme, exchange, pair, timeframe)
//! and notifies observers whenever a setter changes one of them.

use crate::consts::cli_consts::STATE_CHANGE_CAPACITY;
use crate::ui::theme::Theme;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use tokio::sync::broadcast;

/// Top-level dashboards reachable from the sidebar.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Dashboard {
    #[default]
    Trading,
    Risk,
    Executive,
    Compliance,
}

impl Dashboard {
    /// Resolves a navigation id. Unknown ids land on the trading view.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "trading" => Dashboard::Trading,
            "risk" => Dashboard::Risk,
            "executive" => Dashboard::Executive,
            "compliance" => Dashboard::Compliance,
            other => {
                debug!("Unknown dashboard id {:?}, falling back to trading", other);
                Dashboard::Trading
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Dashboard::Trading => "trading",
            Dashboard::Risk => "risk",
            Dashboard::Executive => "executive",
            Dashboard::Compliance => "compliance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dashboard::Trading => "Trading",
            Dashboard::Risk => "Risk",
            Dashboard::Executive => "Executive",
            Dashboard::Compliance => "Compliance",
        }
    }

    pub fn next(self) -> Self {
        step(self, 1)
    }

    pub fn previous(self) -> Self {
        step(self, -1)
    }
}

/// Candle interval shown by the price chart.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
pub enum Timeframe {
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    #[value(name = "1m")]
    OneMinute,
    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    #[value(name = "5m")]
    FiveMinutes,
    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    #[value(name = "15m")]
    FifteenMinutes,
    #[default]
    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    #[value(name = "1h")]
    OneHour,
    #[strum(serialize = "4h")]
    #[serde(rename = "4h")]
    #[value(name = "4h")]
    FourHours,
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    #[value(name = "1d")]
    OneDay,
}

impl Timeframe {
    /// Length of one candle in seconds.
    pub fn interval_secs(self) -> i64 {
        match self {
            Timeframe::OneMinute => 60,
            Timeframe::FiveMinutes => 5 * 60,
            Timeframe::FifteenMinutes => 15 * 60,
            Timeframe::OneHour => 60 * 60,
            Timeframe::FourHours => 4 * 60 * 60,
            Timeframe::OneDay => 24 * 60 * 60,
        }
    }

    pub fn next(self) -> Self {
        step(self, 1)
    }

    pub fn previous(self) -> Self {
        step(self, -1)
    }
}

/// Moves `offset` positions through an enum's variants, wrapping at both ends.
fn step<T: IntoEnumIterator + PartialEq + Copy>(current: T, offset: isize) -> T {
    let all: Vec<T> = T::iter().collect();
    let index = all.iter().position(|v| *v == current).unwrap_or(0) as isize;
    let len = all.len() as isize;
    all[(index + offset).rem_euclid(len) as usize]
}

/// Snapshot of every UI selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current_dashboard: Dashboard,
    pub theme: Theme,
    pub selected_exchange: String,
    pub selected_pair: String,
    pub timeframe: Timeframe,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_dashboard: Dashboard::Trading,
            theme: Theme::Dark,
            selected_exchange: "OKX".to_string(),
            selected_pair: "BTC/USDT".to_string(),
            timeframe: Timeframe::OneHour,
        }
    }
}

/// A single field write, published to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    Dashboard(Dashboard),
    Theme(Theme),
    Exchange(String),
    Pair(String),
    Timeframe(Timeframe),
}

/// Owner of the view state. One per application, passed to the shell.
#[derive(Debug)]
pub struct ViewStore {
    state: ViewState,
    changes: broadcast::Sender<StateChange>,
}

impl ViewStore {
    pub fn new(state: ViewState) -> Self {
        let (changes, _) = broadcast::channel(STATE_CHANGE_CAPACITY);
        Self { state, changes }
    }

    /// Registers an observer. It receives every change written after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_dashboard(&self) -> Dashboard {
        self.state.current_dashboard
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn selected_exchange(&self) -> &str {
        &self.state.selected_exchange
    }

    pub fn selected_pair(&self) -> &str {
        &self.state.selected_pair
    }

    pub fn timeframe(&self) -> Timeframe {
        self.state.timeframe
    }

    pub fn set_dashboard(&mut self, dashboard: Dashboard) {
        if self.state.current_dashboard != dashboard {
            self.state.current_dashboard = dashboard;
            self.publish(StateChange::Dashboard(dashboard));
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.state.theme != theme {
            self.state.theme = theme;
            self.publish(StateChange::Theme(theme));
        }
    }

    pub fn set_exchange(&mut self, exchange: impl Into<String>) {
        let exchange = exchange.into();
        if self.state.selected_exchange != exchange {
            self.state.selected_exchange = exchange.clone();
            self.publish(StateChange::Exchange(exchange));
        }
    }

    pub fn set_pair(&mut self, pair: impl Into<String>) {
        let pair = pair.into();
        if self.state.selected_pair != pair {
            self.state.selected_pair = pair.clone();
            self.publish(StateChange::Pair(pair));
        }
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if self.state.timeframe != timeframe {
            self.state.timeframe = timeframe;
            self.publish(StateChange::Timeframe(timeframe));
        }
    }

    fn publish(&self, change: StateChange) {
        debug!("View state changed: {:?}", change);
        // No observers is fine; the write itself already happened.
        let _ = self.changes.send(change);
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    // A fresh store holds the documented defaults.
    fn test_default_selections() {
        let store = ViewStore::default();
        assert_eq!(store.current_dashboard(), Dashboard::Trading);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.selected_exchange(), "OKX");
        assert_eq!(store.selected_pair(), "BTC/USDT");
        assert_eq!(store.timeframe(), Timeframe::OneHour);
    }

    #[test]
    // Reads observe the latest write.
    fn test_setters_replace_values() {
        let mut store = ViewStore::default();
        store.set_dashboard(Dashboard::Compliance);
        store.set_theme(Theme::Light);
        store.set_exchange("Kraken");
        store.set_pair("ETH/USDT");
        store.set_timeframe(Timeframe::FourHours);

        let state = store.state();
        assert_eq!(state.current_dashboard, Dashboard::Compliance);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.selected_exchange, "Kraken");
        assert_eq!(state.selected_pair, "ETH/USDT");
        assert_eq!(state.timeframe, Timeframe::FourHours);
    }

    #[test]
    // Observers are told which field changed, in write order.
    fn test_observers_receive_changes() {
        let mut store = ViewStore::default();
        let mut rx = store.subscribe();

        store.set_dashboard(Dashboard::Risk);
        store.set_pair("SOL/USDT");

        assert_eq!(rx.try_recv().unwrap(), StateChange::Dashboard(Dashboard::Risk));
        assert_eq!(
            rx.try_recv().unwrap(),
            StateChange::Pair("SOL/USDT".to_string())
        );
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    // Writing the current value again publishes nothing.
    fn test_unchanged_write_is_silent() {
        let mut store = ViewStore::default();
        let mut rx = store.subscribe();

        store.set_dashboard(Dashboard::Trading);
        store.set_exchange("OKX");
        store.set_timeframe(Timeframe::OneHour);

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    // Writes succeed even when nobody is listening.
    fn test_write_without_observers() {
        let mut store = ViewStore::default();
        store.set_theme(Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_dashboard_ids_resolve() {
        for dashboard in Dashboard::iter() {
            assert_eq!(Dashboard::from_id(dashboard.id()), dashboard);
        }
        assert_eq!(Dashboard::from_id(" Risk "), Dashboard::Risk);
    }

    #[test]
    // Anything outside the four known ids falls back to trading.
    fn test_unknown_dashboard_id_falls_back_to_trading() {
        for id in ["", "settings", "portfolio", "trading2", "RISKY"] {
            assert_eq!(Dashboard::from_id(id), Dashboard::Trading, "id {id:?}");
        }
    }

    #[test]
    fn test_dashboard_cycle_wraps() {
        assert_eq!(Dashboard::Trading.next(), Dashboard::Risk);
        assert_eq!(Dashboard::Compliance.next(), Dashboard::Trading);
        assert_eq!(Dashboard::Trading.previous(), Dashboard::Compliance);
    }

    #[test]
    fn test_timeframe_labels_and_intervals() {
        let labels: Vec<String> = Timeframe::iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, ["1m", "5m", "15m", "1h", "4h", "1d"]);
        assert_eq!(Timeframe::OneHour.interval_secs(), 3600);
        assert_eq!(Timeframe::OneDay.next(), Timeframe::OneMinute);
        assert_eq!(Timeframe::OneMinute.previous(), Timeframe::OneDay);
    }
}
