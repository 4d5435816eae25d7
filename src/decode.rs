//! Payload decoding: base64 (optionally a data URL) into a frame.

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use image::DynamicImage;

/// Turns a request payload into a decoded frame
pub trait FrameDecoder: Send + Sync {
    /// Decode one payload
    ///
    /// # Errors
    ///
    /// Returns a decode error if the payload or the image container is malformed
    fn decode(&self, payload: &str) -> Result<DynamicImage>;
}

/// Standard base64 payload holding any container the `image` crate reads
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Decoder;

impl FrameDecoder for Base64Decoder {
    fn decode(&self, payload: &str) -> Result<DynamicImage> {
        let bytes = decode_payload(payload)?;
        decode_image(&bytes)
    }
}

/// Decode the base64 text of a payload into raw image bytes.
///
/// A data URL prefix (`data:image/jpeg;base64,`) is dropped by keeping only
/// the text after the first comma. Whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the payload is empty or not valid base64
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    let data = match payload.split_once(',') {
        Some((_, rest)) => rest.split(',').next().unwrap_or(rest),
        None => payload,
    };
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(Error::Decode("empty image payload".to_string()));
    }
    Ok(STANDARD.decode(compact.as_bytes())?)
}

/// Decode raw image bytes, guessing the container from its magic bytes
///
/// # Errors
///
/// Returns an error if the container is unknown or corrupt
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(Error::Decode("empty image data".to_string()));
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Encode raw image bytes as a standard base64 payload
#[must_use]
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
