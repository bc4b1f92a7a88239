//! Simple file-based logging for debugging
//!
//! Logging is opt-in: nothing is written until the host calls [`init`] (or
//! [`init_at`] to choose the destination). Every line is timestamped and
//! flushed immediately so a crash loses nothing.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("casement.exe"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Initialize logging to a file next to the executable
pub fn init() {
    init_at(&exe_dir().join("casement.log"));
}

/// Initialize logging to a specific file path
pub fn init_at(log_path: &Path) {
    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
    {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(file);
        }
    }

    log("=== Casement Log Started ===");
}

/// Get current timestamp as milliseconds
fn timestamp() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Log a message to the file
pub fn log(msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let ts = timestamp();
            let _ = writeln!(file, "[{}] {}", ts, msg);
            let _ = file.flush();
        }
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_silent() {
        // Must not panic or create any file
        log("dropped on the floor");
    }

    #[test]
    fn test_init_at_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casement.log");

        init_at(&path);
        log("hello from test");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("=== Casement Log Started ==="));
        assert!(contents.contains("hello from test"));
    }
}
