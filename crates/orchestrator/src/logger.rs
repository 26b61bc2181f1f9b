use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use lazy_static::lazy_static;
use std::sync::Mutex;

lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Initialize logging to a timestamped file under logs/. The TUI owns the
/// terminal, so nothing is ever printed to the console after this.
pub fn init_logging() -> anyhow::Result<()> {
    let logs_dir = PathBuf::from("logs");
    if !logs_dir.exists() {
        fs::create_dir_all(&logs_dir)?;
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_file = logs_dir.join(format!("dreamwalk_{}.log", timestamp));

    *LOG_FILE.lock().unwrap() = Some(log_file.clone());
    log_line(&format!("=== Dreamwalk log started at {} ===", Local::now()));
    Ok(())
}

/// Write a line to the log file
pub fn log_line(message: &str) {
    if let Ok(log_path) = LOG_FILE.lock() {
        if let Some(ref path) = *log_path {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                let _ = writeln!(file, "[{}] {}", timestamp, message);
            }
        }
    }
}

/// Log an event with a category
pub fn log_event(category: &str, message: &str) {
    log_line(&format!("[{}] {}", category, message));
}

/// Log an error
pub fn log_error(context: &str, error: &str) {
    log_line(&format!("[ERROR] {}: {}", context, error));
}
