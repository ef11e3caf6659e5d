//! Static file serving module
//!
//! Resolves request paths against the serving root and answers with file
//! bytes, an index file, a listing page, a trailing-slash redirect, or 404.

use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, percent};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Served in place of a listing when a directory carries one of these
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Outcome of resolving a request path against the serving root
#[derive(Debug, PartialEq, Eq)]
enum Resolved {
    /// Serve this file's bytes
    File(PathBuf),
    /// Directory requested without its trailing slash
    Redirect(String),
    /// Generate a listing page for this directory
    Listing(PathBuf),
    NotFound,
}

/// Serve a request path from the serving root
pub async fn serve(ctx: &RequestContext<'_>, root: &Path) -> Response<Full<Bytes>> {
    match resolve(root, ctx.path) {
        Resolved::File(file_path) => serve_file(&file_path, ctx).await,
        Resolved::Redirect(location) => http::build_301_response(&location),
        Resolved::Listing(dir) => serve_listing(&dir, ctx).await,
        Resolved::NotFound => http::build_404_response(),
    }
}

fn resolve(root: &Path, request_path: &str) -> Resolved {
    let Some(decoded) = percent::decode(request_path) else {
        logger::log_warning(&format!("Undecodable request path: {request_path}"));
        return Resolved::NotFound;
    };

    // Remove leading slash and drop traversal segments; the canonicalize
    // check below is the backstop
    let clean = decoded.trim_start_matches('/').replace("..", "");

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_error(&format!(
                "Serving root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return Resolved::NotFound;
        }
    };

    // Missing paths are ordinary 404s, not worth a log line
    let Ok(target) = root_canonical.join(&clean).canonicalize() else {
        return Resolved::NotFound;
    };
    if !target.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            target.display()
        ));
        return Resolved::NotFound;
    }

    if target.is_dir() {
        if !request_path.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }
        for index in INDEX_FILES {
            let candidate = target.join(index);
            if candidate.is_file() {
                return Resolved::File(candidate);
            }
        }
        return Resolved::Listing(target);
    }

    if target.is_file() {
        Resolved::File(target)
    } else {
        Resolved::NotFound
    }
}

async fn serve_file(file_path: &Path, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return http::build_404_response();
        }
    };

    let etag = cache::generate_etag(&content);
    if cache::matches_if_none_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    // Default label from the extension; the charset override rewrites it
    // on the way out
    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    http::build_file_response(Bytes::from(content), content_type, &etag, ctx.is_head)
}

async fn serve_listing(dir: &Path, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    match listing::render(dir, ctx.path).await {
        Ok(page) => http::build_html_response(page, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to list directory '{}': {e}", dir.display()));
            http::build_404_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        std_fs::write(dir.path().join("page.html"), "<p>hi</p>").expect("write");
        std_fs::write(dir.path().join("hello world.txt"), "hi").expect("write");
        std_fs::create_dir(dir.path().join("docs")).expect("mkdir");
        std_fs::write(dir.path().join("docs").join("index.html"), "docs index").expect("write");
        std_fs::create_dir(dir.path().join("assets")).expect("mkdir");
        std_fs::write(dir.path().join("assets").join("app.js"), "js").expect("write");
        dir
    }

    #[test]
    fn test_resolve_file() {
        let root = tree();
        match resolve(root.path(), "/page.html") {
            Resolved::File(p) => assert!(p.ends_with("page.html")),
            other => panic!("expected File, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_missing_is_not_found() {
        let root = tree();
        assert_eq!(resolve(root.path(), "/nope.html"), Resolved::NotFound);
    }

    #[test]
    fn test_resolve_percent_encoded_name() {
        let root = tree();
        match resolve(root.path(), "/hello%20world.txt") {
            Resolved::File(p) => assert!(p.ends_with("hello world.txt")),
            other => panic!("expected File, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_without_slash_redirects() {
        let root = tree();
        assert_eq!(
            resolve(root.path(), "/docs"),
            Resolved::Redirect("/docs/".to_string())
        );
    }

    #[test]
    fn test_directory_with_index_serves_it() {
        let root = tree();
        match resolve(root.path(), "/docs/") {
            Resolved::File(p) => assert!(p.ends_with("docs/index.html")),
            other => panic!("expected File, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_without_index_lists() {
        let root = tree();
        match resolve(root.path(), "/assets/") {
            Resolved::Listing(p) => assert!(p.ends_with("assets")),
            other => panic!("expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn test_traversal_never_escapes_root() {
        let root = tree();
        assert_eq!(resolve(root.path(), "/../etc/passwd"), Resolved::NotFound);
        assert_eq!(
            resolve(root.path(), "/%2e%2e/%2e%2e/etc/passwd"),
            Resolved::NotFound
        );
    }
}
