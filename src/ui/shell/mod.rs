//! Navigation shell: sidebar, header and footer around the active dashboard.

mod footer;
mod header;
mod sidebar;

pub use footer::render_footer;
pub use header::render_header;
pub use sidebar::render_sidebar;
