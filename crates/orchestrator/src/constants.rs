pub const POLL_INTERVAL_MS: u64 = 50;
pub const MAX_LOG_LINES: usize = 500;

/// The one user-facing failure string. Every failure class maps onto it;
/// details go to the log file only.
pub const ERROR_MESSAGE: &str = "Something went wrong interpreting your dream. Try again.";

pub const LOADING_FRAMES: [&str; 4] = ["   ", ".  ", ".. ", "..."];

pub mod prefixes {
    pub const ERROR: &str = "Error >";
}
