pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard shell,
    //! organized by functional area.

    // =============================================================================
    // EVENT LOOP CONFIGURATION
    // =============================================================================

    /// How long the UI loop waits for terminal input before redrawing (milliseconds)
    pub const TICK_RATE_MS: u64 = 100;

    /// How long the splash screen stays up unless a key is pressed (seconds)
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Buffered view-state change notifications before observers lag
    pub const STATE_CHANGE_CAPACITY: usize = 64;

    /// Helper function to get the input poll interval
    pub const fn tick_rate() -> std::time::Duration {
        std::time::Duration::from_millis(TICK_RATE_MS)
    }

    /// Helper function to get the splash duration
    pub const fn splash_duration() -> std::time::Duration {
        std::time::Duration::from_secs(SPLASH_DURATION_SECS)
    }

    // =============================================================================
    // SHELL LAYOUT
    // =============================================================================

    /// Width of the navigation sidebar in columns
    pub const SIDEBAR_WIDTH: u16 = 24;

    /// Height of the header bar in rows
    pub const HEADER_HEIGHT: u16 = 3;

    /// Height of the footer bar in rows
    pub const FOOTER_HEIGHT: u16 = 2;

    // =============================================================================
    // CONFIGURATION FILE
    // =============================================================================

    /// Directory under $HOME holding the configuration file
    pub const CONFIG_DIR: &str = ".lyra";

    /// Configuration file name
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // PRICE CHART
    // =============================================================================

    /// Sample candlestick generation
    pub mod chart {
        /// Number of synthetic candles fed to a freshly mounted chart
        pub const CANDLE_COUNT: usize = 100;

        /// Opening price of the first synthetic candle
        pub const START_PRICE: f64 = 50_000.0;

        /// Full width of the uniform open-to-close move of one candle
        pub const MAX_CANDLE_MOVE: f64 = 1_000.0;

        /// Maximum wick extension beyond the candle body
        pub const MAX_WICK: f64 = 500.0;

        /// Columns reserved on the right for price labels
        pub const PRICE_AXIS_WIDTH: u16 = 10;
    }

    // =============================================================================
    // HEADLESS RENDERING
    // =============================================================================

    /// Default frame size for the `render` command
    pub mod headless {
        /// Default frame width in columns
        pub const DEFAULT_WIDTH: u16 = 160;

        /// Default frame height in rows
        pub const DEFAULT_HEIGHT: u16 = 48;
    }
}
