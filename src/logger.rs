//! Logging module
//!
//! Thin timestamped logging over stdout/stderr. The server logs one line at
//! startup, one line before a fatal exit, and failure-path warnings while
//! serving. There is no per-request access log.

use chrono::Local;

/// Local-time prefix shared by every log line
fn stamp() -> String {
    Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Announce the listening address at startup
pub fn log_listening(port: u16) {
    println!("{} Listening on http://localhost:{}/", stamp(), port);
}

/// Log a fatal startup error; the caller exits the process afterwards
pub fn log_fatal(err: &dyn std::fmt::Display) {
    eprintln!("{} {}", stamp(), err);
}

pub fn log_error(message: &str) {
    eprintln!("{} [ERROR] {}", stamp(), message);
}

pub fn log_warning(message: &str) {
    eprintln!("{} [WARN] {}", stamp(), message);
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("{} [ERROR] Failed to serve connection: {:?}", stamp(), err);
}
