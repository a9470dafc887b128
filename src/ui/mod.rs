// Module declarations
mod app;
pub mod dashboards;
pub mod icons;
pub mod panels;
pub mod root;
pub mod shell;
pub mod splash;
pub mod store;
pub mod theme;
pub mod utils;
// Re-exports for external use
pub use app::{App, UIConfig, run};
