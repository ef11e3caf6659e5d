//! Content-Type override module
//!
//! The single behavioral quirk this server exists for: every response leaves
//! the process declaring `text/html; charset=utf-8`, no matter what the
//! static-file responder decided the resource was.

use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::Response;

/// The Content-Type every response is rewritten to.
pub const FORCED_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Replace the response's `Content-Type` with the forced UTF-8 HTML label.
///
/// This runs after the responder's own header-setting logic, as a final step
/// on the outgoing response. `insert` discards whatever value was set before,
/// so the forced label is the one a client observes — for PNG bytes and 404
/// pages alike.
pub fn force_utf8_html<B>(mut response: Response<B>) -> Response<B> {
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(FORCED_CONTENT_TYPE));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_type_of<B>(response: &Response<B>) -> &str {
        response
            .headers()
            .get(CONTENT_TYPE)
            .expect("missing Content-Type")
            .to_str()
            .expect("non-ASCII Content-Type")
    }

    #[test]
    fn test_overrides_image_label() {
        let response = Response::builder()
            .status(200)
            .header("Content-Type", "image/png")
            .body(())
            .expect("build failed");

        let forced = force_utf8_html(response);
        assert_eq!(content_type_of(&forced), FORCED_CONTENT_TYPE);
    }

    #[test]
    fn test_sets_label_when_absent() {
        let response = Response::builder().status(304).body(()).expect("build failed");

        let forced = force_utf8_html(response);
        assert_eq!(content_type_of(&forced), FORCED_CONTENT_TYPE);
    }

    #[test]
    fn test_collapses_duplicate_labels() {
        let response = Response::builder()
            .status(200)
            .header("Content-Type", "text/plain")
            .header("Content-Type", "application/octet-stream")
            .body(())
            .expect("build failed");

        let forced = force_utf8_html(response);
        let values: Vec<_> = forced.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(content_type_of(&forced), FORCED_CONTENT_TYPE);
    }

    #[test]
    fn test_status_and_body_untouched() {
        let response = Response::builder()
            .status(404)
            .header("Content-Type", "text/plain")
            .body("404 Not Found")
            .expect("build failed");

        let forced = force_utf8_html(response);
        assert_eq!(forced.status(), 404);
        assert_eq!(*forced.body(), "404 Not Found");
    }
}
