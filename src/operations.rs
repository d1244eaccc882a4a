//! High-level crop operations.
//!
//! These functions combine calculations with backend execution: they validate
//! inputs, resolve output dimensions, and delegate the pixel work to a
//! [`SurfaceBackend`]. The source image is always an explicit parameter;
//! nothing here holds image state between calls, and every surface is owned
//! by the call that created it.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;
use tracing::debug;

use crate::backend::{RenderedSurface, SourceImage, SurfaceBackend};
use crate::calculations::{output_dimensions, validate_region};
use crate::decode::{BinaryObject, decode};
use crate::error::{CropError, Result};
use crate::params::{CropRegion, OutputSizing, RenderParams};

/// A self-describing encoded image string:
/// `data:<media type>;base64,<payload>`.
///
/// Ready for direct embedding, e.g. as an image source reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EncodedImage> for String {
    fn from(encoded: EncodedImage) -> Self {
        encoded.0
    }
}

/// Render the crop region of `source` onto a fresh surface at the dimensions
/// resolved from `sizing`.
///
/// Fails with [`CropError::InvalidRegion`] for a bad rectangle (including one
/// reaching outside the source) and [`CropError::InvalidSizing`] for a bad or
/// missing sizing mode.
pub fn render(
    backend: &impl SurfaceBackend,
    source: &SourceImage,
    region: CropRegion,
    sizing: &OutputSizing,
) -> Result<RenderedSurface> {
    let (x, y, crop_w, crop_h) = validate_region(&region)?;

    let (src_w, src_h) = source.dimensions();
    if x + crop_w > src_w || y + crop_h > src_h {
        return Err(CropError::InvalidRegion(format!(
            "region {crop_w}x{crop_h}+{x}+{y} exceeds source bounds {src_w}x{src_h}"
        )));
    }

    let (out_w, out_h) = output_dimensions(crop_w, crop_h, sizing)?;

    backend.render(
        source,
        &RenderParams {
            crop_x: x,
            crop_y: y,
            crop_width: crop_w,
            crop_height: crop_h,
            out_width: out_w,
            out_height: out_h,
        },
    )
}

/// Serialize a rendered surface as a base64 data URI.
///
/// The media type is whatever the backend's encoder picked. A tainted surface
/// fails with [`CropError::TaintedSurface`] before the encoder runs.
pub fn to_encoded_image(
    backend: &impl SurfaceBackend,
    surface: &RenderedSurface,
) -> Result<EncodedImage> {
    if surface.is_tainted() {
        return Err(CropError::TaintedSurface);
    }

    let payload = backend.encode(surface)?;
    debug!(
        media_type = %payload.media_type,
        len = payload.bytes.len(),
        "encoded surface"
    );

    Ok(EncodedImage(format!(
        "data:{};base64,{}",
        payload.media_type,
        STANDARD.encode(&payload.bytes)
    )))
}

/// Crop and serialize in one call: render the region, then encode the surface
/// as a data URI.
pub fn crop_to_encoded_image(
    backend: &impl SurfaceBackend,
    source: &SourceImage,
    region: CropRegion,
    sizing: &OutputSizing,
) -> Result<EncodedImage> {
    let surface = render(backend, source, region, sizing)?;
    to_encoded_image(backend, &surface)
}

/// Crop all the way to a binary object: render, serialize, then decode the
/// data URI back into media type plus raw bytes.
pub fn crop_to_binary_object(
    backend: &impl SurfaceBackend,
    source: &SourceImage,
    region: CropRegion,
    sizing: &OutputSizing,
) -> Result<BinaryObject> {
    let encoded = crop_to_encoded_image(backend, source, region, sizing)?;
    decode(encoded.as_str())
}
