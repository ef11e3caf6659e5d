//! HTTP protocol layer module
//!
//! Response builders, conditional-request helpers, default MIME labeling,
//! path percent-decoding, and the charset override applied to every outgoing
//! response.

pub mod cache;
pub mod charset;
pub mod mime;
pub mod percent;
pub mod response;

// Re-export commonly used entry points
pub use charset::{force_utf8_html, FORCED_CONTENT_TYPE};
pub use response::{
    build_301_response, build_304_response, build_404_response, build_405_response,
    build_file_response, build_html_response,
};
