//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// The message with its colored tag.
    pub fn formatted(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    pub fn print(&self) {
        println!("{}", self.formatted());
    }
}

/// Print session startup message
pub fn print_session_starting(dashboard: &str, log_file: Option<&std::path::Path>) {
    let target = log_file
        .map(|path| format!(", logging to {}", path.display()))
        .unwrap_or_default();
    SessionMessage::info(format!("Starting LYRA on the {} dashboard{}", dashboard, target)).print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("LYRA dashboard exited successfully").print();
}
