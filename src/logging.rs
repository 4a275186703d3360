//! src/logging.rs
//!
//! File-backed diagnostic log. The terminal belongs to the UI, so nothing is
//! written to stdout/stderr while the game runs; lines go to the file passed
//! with `--log-file`, or nowhere.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Open (append) the log file. Later `log_*!` calls write to it.
pub fn init_log_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(file);
    }
    Ok(())
}

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Write one `[LEVEL] message` line if a log file is open.
pub fn write_log(level: &str, message: &str) {
    if let Ok(mut slot) = LOG_FILE.lock() {
        if let Some(file) = slot.as_mut() {
            let _ = writeln!(file, "[{level}] {message}");
            let _ = file.flush();
        }
    }
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::write_log("INFO", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::write_log("WARN", &format!($($arg)*))
    };
}

/// Only written with `--verbose`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            $crate::logging::write_log("DEBUG", &format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_levels_to_file_and_respects_verbose() {
        let path = std::env::temp_dir().join(format!("tictactoe-log-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        init_log_file(&path).unwrap();

        set_verbose(false);
        crate::log_info!("round {} started", 1);
        crate::log_debug!("hidden");
        set_verbose(true);
        crate::log_debug!("shown");
        set_verbose(false);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[INFO] round 1 started"));
        assert!(text.contains("[DEBUG] shown"));
        assert!(!text.contains("hidden"));

        if let Ok(mut slot) = LOG_FILE.lock() {
            *slot = None;
        }
        let _ = std::fs::remove_file(&path);
    }
}
