//! Logger module
//!
//! Stdout/stderr logging for the preview server: the startup banner, access
//! log lines, warnings, and errors. The banner is the only output that cannot
//! be turned off.

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("======================================");
    println!("UTF-8 preview server started");
    println!("Serving directory: {}", root.display());
    println!("Listening on: http://localhost:{}", addr.port());
    println!("All responses labeled: text/html; charset=utf-8");
    println!("======================================\n");
}

/// Write one formatted access log line
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.to_common_log());
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
