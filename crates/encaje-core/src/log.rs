//! File-based logger with size-based rotation.
//!
//! A background utility has no console, so everything worth keeping
//! goes to `~/.config/encaje/logs/encaje.log`. When the file exceeds
//! [`MAX_BYTES`] it is rotated to `encaje.log.1` (one backup kept).
//! The minimum level comes from the `ENCAJE_LOG` environment variable
//! ("debug", "info", "warn", "error"); the default is info.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "encaje.log";
const BACKUP_NAME: &str = "encaje.log.1";
const MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    fn from_env() -> Self {
        match std::env::var("ENCAJE_LOG").as_deref() {
            Ok("debug") => Self::Debug,
            Ok("warn") => Self::Warn,
            Ok("error") => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min_level: Level,
    written: u64,
}

/// Initialises the global logger. Call once at daemon startup.
///
/// Silently does nothing when the log directory cannot be created;
/// a utility that cannot log must still manage windows.
pub fn init() {
    let Some(dir) = crate::settings::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    let path = log_dir.join(LOG_FILE_NAME);

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    let logger = Logger {
        file,
        path,
        min_level: Level::from_env(),
        written,
    };

    let _ = LOGGER.set(Mutex::new(logger));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }

    let line = format!("{} [{}] {args}\n", timestamp(), level.as_str());
    let _ = logger.file.write_all(line.as_bytes());
    logger.written += line.len() as u64;

    if logger.written >= MAX_BYTES {
        logger.rotate();
    }
}

impl Logger {
    fn rotate(&mut self) {
        let backup = self.path.with_file_name(BACKUP_NAME);
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

fn timestamp() -> String {
    // std::time is enough for a wall-clock-of-day stamp.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
