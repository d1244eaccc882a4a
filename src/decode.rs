//! Data-URI parsing: encoded image string → [`BinaryObject`].
//!
//! The input has the shape `<header>,<payload>` where the header carries a
//! media type (`data:image/png`) and optionally a `base64` token. A `base64`
//! token selects base64 decoding of the payload; otherwise the payload is
//! percent-decoded.
//!
//! Percent-decoding operates directly on bytes, so a payload of percent
//! escapes round-trips exactly. Literal non-ASCII characters in a
//! percent-encoded payload come out as their UTF-8 byte sequences, which is
//! wider than one byte per character; callers that need byte-exact fidelity
//! should stick to base64 payloads (which is what this crate's own
//! serializer emits).

use base64::{Engine as _, engine::general_purpose::STANDARD};
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::error::{CropError, Result};

/// Decoded media type plus raw byte sequence, ready for upload or file-write
/// by the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryObject {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Parse an encoded image string into its media type and raw bytes.
///
/// Fails with [`CropError::MalformedEncodedImage`] when the string lacks the
/// comma separator, the header lacks a colon before the media type, or a
/// base64 payload does not decode.
///
/// # Examples
/// ```
/// # use clipcrop::decode;
/// let obj = decode("data:image/png;base64,AAAA").unwrap();
/// assert_eq!(obj.media_type, "image/png");
/// assert_eq!(obj.bytes, vec![0, 0, 0]);
/// ```
pub fn decode(encoded: &str) -> Result<BinaryObject> {
    let (header, payload) = encoded.split_once(',').ok_or_else(|| {
        CropError::MalformedEncodedImage("missing ',' between header and payload".into())
    })?;

    // Media type sits between the first ':' and the first ';'; the semicolon
    // is optional when no encoding token follows.
    let after_scheme = header
        .split_once(':')
        .map(|(_, rest)| rest)
        .ok_or_else(|| {
            CropError::MalformedEncodedImage("header missing ':' before media type".into())
        })?;
    let media_type = after_scheme.split(';').next().unwrap_or(after_scheme);

    let bytes = if header.contains("base64") {
        STANDARD
            .decode(payload)
            .map_err(|e| CropError::MalformedEncodedImage(format!("bad base64 payload: {e}")))?
    } else {
        percent_decode_str(payload).collect()
    };

    debug!(media_type, len = bytes.len(), "decoded image payload");

    Ok(BinaryObject {
        media_type: media_type.to_string(),
        bytes,
    })
}
