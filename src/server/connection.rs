// Connection handling module
// Serves a single accepted TCP connection inline

use std::convert::Infallible;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Serve one connection to completion.
///
/// The response produced by the handler passes through the charset override
/// before it is written out, so the `Content-Type` a client observes is
/// always `text/html; charset=utf-8` regardless of what was served.
pub async fn serve_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<AppState>,
) {
    let io = TokioIo::new(stream);

    // One request per connection, like the original preview tool
    let mut builder = http1::Builder::new();
    builder.keep_alive(false);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| {
            let state = Arc::clone(&state);
            async move {
                let method = req.method().to_string();
                let path = req.uri().path().to_string();
                let version = format!("{:?}", req.version());

                let response = handler::handle_request(req, &state).await?;
                let response = http::force_utf8_html(response);

                if state.logging.access_log {
                    let mut entry = AccessLogEntry::new(peer_addr.to_string(), method, path);
                    entry.version = version;
                    entry.status = response.status().as_u16();
                    entry.body_bytes = content_length(response.headers());
                    logger::log_access(&entry);
                }

                Ok::<_, Infallible>(response)
            }
        }),
    );

    if let Err(err) = conn.await {
        logger::log_connection_error(&err);
    }
}

/// Body size as declared by the response's own Content-Length header
fn content_length(headers: &hyper::HeaderMap) -> usize {
    headers
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
