//! Pure Rust surface backend on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Scale to output | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode | `image` PNG codec through an in-memory `Cursor` |
//!
//! PNG is the one compiled-in output format: it is lossless, so the bytes a
//! caller decodes back out of the data URI are exactly the bytes the encoder
//! produced, with no generational loss if the host re-encodes.

use crate::backend::{EncodedPayload, PixelAccess, RenderedSurface, SourceImage, SurfaceBackend};
use crate::error::Result;
use crate::params::RenderParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, imageops};
use std::io::Cursor;

/// Media type of every payload this backend produces.
pub const MEDIA_TYPE: &str = "image/png";

/// Production backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RasterBackend;

impl RasterBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceBackend for RasterBackend {
    fn render(&self, source: &SourceImage, params: &RenderParams) -> Result<RenderedSurface> {
        let cropped = source.image().crop_imm(
            params.crop_x,
            params.crop_y,
            params.crop_width,
            params.crop_height,
        );

        // Stretch the crop to fill the full output area. resize_exact-style
        // behavior: no letterboxing, aspect distortion is the caller's choice.
        let surface = imageops::resize(
            &cropped.to_rgba8(),
            params.out_width,
            params.out_height,
            FilterType::Lanczos3,
        );

        Ok(RenderedSurface::new(
            surface,
            source.access() == PixelAccess::Restricted,
        ))
    }

    fn encode(&self, surface: &RenderedSurface) -> Result<EncodedPayload> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(surface.image().clone())
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        Ok(EncodedPayload {
            media_type: MEDIA_TYPE.to_string(),
            bytes,
        })
    }
}
