//! Lookup key derivation.
//!
//! The raw URI path is percent-decoded, then HTML-escaped so markup-unsafe
//! characters never reach any rendering of an unmatched path. The request
//! itself is never modified.

use html_escape::encode_quoted_attribute;
use percent_encoding::percent_decode_str;

/// Derive the table lookup key for a raw request path.
pub fn lookup_key(raw_path: &str) -> String {
    let decoded = percent_decode_str(raw_path).decode_utf8_lossy();
    encode_quoted_attribute(&decoded).into_owned()
}
