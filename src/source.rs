//! Request decoding: base64 body text to raw document bytes

use crate::error::Result;
use base64::Engine;

/// Decode the base64 `body` field of a request or event into raw bytes.
///
/// No validation of the decoded bytes happens here; whether they form a
/// usable PDF only surfaces when the extractor opens them. An absent `body`
/// field deserializes to an empty string upstream, which decodes to an
/// empty buffer.
pub fn decode_body(body: &str) -> Result<Vec<u8>> {
    let engine = base64::engine::general_purpose::STANDARD;
    Ok(engine.decode(body)?)
}
