//! Surface backend trait and shared types.
//!
//! The [`SurfaceBackend`] trait defines the two operations every backend must
//! support: render (draw a crop onto a fresh surface) and encode (read the
//! surface back out as bytes in the backend's own format).
//!
//! The production implementation is
//! [`RasterBackend`](crate::raster_backend::RasterBackend) — pure Rust on the
//! `image` crate, emitting PNG. Everything is statically linked.

use crate::error::Result;
use crate::params::RenderParams;
use image::{DynamicImage, RgbaImage};

/// Whether a source's pixels may be read back after drawing.
///
/// Models the host drawing environment's cross-origin rule: a restricted
/// source can still be drawn, but any surface it touches becomes tainted and
/// refuses serialization. The library cannot recover from this; the host
/// application must supply a readable source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelAccess {
    Readable,
    Restricted,
}

/// An already-decoded source image plus its pixel-access marker.
///
/// Acquiring and decoding the image is the host application's job; this type
/// only carries the result. The image is read-only input, never mutated.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
    access: PixelAccess,
}

impl SourceImage {
    /// A source whose pixels may be freely read back.
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            access: PixelAccess::Readable,
        }
    }

    /// A source with an explicit access marker, for cross-origin images.
    pub fn with_access(image: DynamicImage, access: PixelAccess) -> Self {
        Self { image, access }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn access(&self) -> PixelAccess {
        self.access
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// An ephemeral RGBA pixel buffer at the resolved output dimensions.
///
/// Owned solely by the call that created it and discarded after serialization.
/// The taint flag is inherited from the source's access marker at render time.
#[derive(Debug, Clone)]
pub struct RenderedSurface {
    image: RgbaImage,
    tainted: bool,
}

impl RenderedSurface {
    pub(crate) fn new(image: RgbaImage, tainted: bool) -> Self {
        Self { image, tainted }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// True when the surface was drawn from a restricted source and its
    /// pixels must not be read back.
    pub fn is_tainted(&self) -> bool {
        self.tainted
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Raw encoder output: the media type the backend chose plus the encoded
/// bytes. The backend, not the caller, picks the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Trait for surface backends.
///
/// Both operations are synchronous and run to completion on the calling
/// thread. `Sync` so a single backend instance can be shared by a
/// multi-threaded host.
pub trait SurfaceBackend: Sync {
    /// Draw exactly the crop rectangle of `source`, scaled to fill the full
    /// output area of a fresh surface. No letterboxing.
    fn render(&self, source: &SourceImage, params: &RenderParams) -> Result<RenderedSurface>;

    /// Read the surface back as encoded bytes in the backend's own format.
    fn encode(&self, surface: &RenderedSurface) -> Result<EncodedPayload>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations and produces blank surfaces.
    /// Uses Mutex (not RefCell) so it stays Sync like real backends.
    #[derive(Default)]
    pub struct MockBackend {
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RecordedOp {
        Render {
            crop_x: u32,
            crop_y: u32,
            crop_width: u32,
            crop_height: u32,
            out_width: u32,
            out_height: u32,
        },
        Encode {
            width: u32,
            height: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl SurfaceBackend for MockBackend {
        fn render(&self, source: &SourceImage, params: &RenderParams) -> Result<RenderedSurface> {
            self.operations.lock().unwrap().push(RecordedOp::Render {
                crop_x: params.crop_x,
                crop_y: params.crop_y,
                crop_width: params.crop_width,
                crop_height: params.crop_height,
                out_width: params.out_width,
                out_height: params.out_height,
            });
            let blank = RgbaImage::new(params.out_width, params.out_height);
            Ok(RenderedSurface::new(
                blank,
                source.access() == PixelAccess::Restricted,
            ))
        }

        fn encode(&self, surface: &RenderedSurface) -> Result<EncodedPayload> {
            self.operations.lock().unwrap().push(RecordedOp::Encode {
                width: surface.width(),
                height: surface.height(),
            });
            Ok(EncodedPayload {
                media_type: "image/png".to_string(),
                bytes: vec![0, 0, 0],
            })
        }
    }

    #[test]
    fn mock_records_render_with_params() {
        let backend = MockBackend::new();
        let source = SourceImage::new(DynamicImage::new_rgba8(400, 300));

        let surface = backend
            .render(
                &source,
                &RenderParams {
                    crop_x: 10,
                    crop_y: 20,
                    crop_width: 100,
                    crop_height: 50,
                    out_width: 200,
                    out_height: 100,
                },
            )
            .unwrap();

        assert_eq!(surface.dimensions(), (200, 100));
        assert!(!surface.is_tainted());

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Render {
                crop_x: 10,
                out_width: 200,
                ..
            }
        ));
    }

    #[test]
    fn mock_taints_surface_from_restricted_source() {
        let backend = MockBackend::new();
        let source = SourceImage::with_access(
            DynamicImage::new_rgba8(400, 300),
            PixelAccess::Restricted,
        );

        let surface = backend
            .render(
                &source,
                &RenderParams {
                    crop_x: 0,
                    crop_y: 0,
                    crop_width: 100,
                    crop_height: 50,
                    out_width: 100,
                    out_height: 50,
                },
            )
            .unwrap();

        assert!(surface.is_tainted());
    }

    #[test]
    fn source_image_defaults_to_readable() {
        let source = SourceImage::new(DynamicImage::new_rgba8(10, 10));
        assert_eq!(source.access(), PixelAccess::Readable);
        assert_eq!(source.dimensions(), (10, 10));
    }
}
