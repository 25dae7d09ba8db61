// src/log.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

use crate::config::consts::LOG_FILE;

static LOG_LOCK: Mutex<()> = Mutex::new(());
static LOG_DIR_READY: OnceLock<bool> = OnceLock::new();

fn ensure_log_dir() -> bool {
    *LOG_DIR_READY.get_or_init(|| match Path::new(LOG_FILE).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).is_ok(),
        _ => true,
    })
}

/// Append one line to the debug log. Best-effort: failures are swallowed,
/// logging must never abort a run.
pub fn write_log(level: &str, msg: &str) {
    if !ensure_log_dir() {
        return;
    }
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("[{stamp}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
