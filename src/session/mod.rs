pub mod headless_mode;
pub mod messages;
pub mod tui_mode;

pub use headless_mode::run_headless_mode;
pub use tui_mode::run_tui_mode;
