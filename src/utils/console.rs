// src/utils/console.rs

//! Console output with server-style formatting.
//!
//! Used for the human-readable report; diagnostics go through `log`.

use std::sync::OnceLock;

use chrono::Local;

/// Console level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Current console level
static LEVEL: OnceLock<Level> = OnceLock::new();

/// Set the console level once at start-up.
pub fn init(level: Level) {
    let _ = LEVEL.set(level);
}

fn should_print(level: Level) -> bool {
    let current = LEVEL.get().copied().unwrap_or(Level::Info);
    level >= current
}

/// Format a line with timestamp and level
fn format_line(level: Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] [{}] {}", timestamp, level.as_str(), message)
}

/// Print an info line
pub fn info(message: &str) {
    if should_print(Level::Info) {
        println!("{}", format_line(Level::Info, message));
    }
}

/// Print a warning line
pub fn warn(message: &str) {
    if should_print(Level::Warn) {
        eprintln!("{}", format_line(Level::Warn, message));
    }
}

/// Print an error line
pub fn error(message: &str) {
    if should_print(Level::Error) {
        eprintln!("{}", format_line(Level::Error, message));
    }
}

/// Print a section header
pub fn header(title: &str) {
    if should_print(Level::Info) {
        println!();
        println!("{}", format_line(Level::Info, &format!("### {}", title)));
    }
}

/// Print an indented item
pub fn sub_item(message: &str) {
    if should_print(Level::Info) {
        println!("{}", format_line(Level::Info, &format!("    {}", message)));
    }
}

/// Print a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    if should_print(Level::Info) {
        println!();
        println!("{}", format_line(Level::Info, &format!("[SUMMARY] {}", title)));
        for (key, value) in items {
            println!("{}", format_line(Level::Info, &format!("    {}: {}", key, value)));
        }
    }
}
