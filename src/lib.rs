//! utf8serve — serve the current directory over HTTP, with every response
//! labeled `text/html; charset=utf-8`.
//!
//! The program is an ordinary static-file responder behind a single header
//! override: whatever the responder decides a resource is, the outgoing
//! `Content-Type` is rewritten to UTF-8 HTML on the way out. Useful for quick
//! local preview of static content where correct encoding signaling matters
//! more than MIME accuracy.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
