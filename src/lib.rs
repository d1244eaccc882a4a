//! # clipcrop
//!
//! Crop a rectangular region out of an in-memory image, rescale it, and emit
//! the result as a self-describing data URI or as a raw binary object. The
//! host application owns everything around this: acquiring and decoding the
//! source image, picking the region, and uploading or persisting the output.
//!
//! # Architecture: Calculations → Backend → Operations
//!
//! The crate is split along the same seam throughout:
//!
//! ```text
//! 1. Calculations  region + sizing  →  output dimensions   (pure math)
//! 2. Backend       source + params  →  surface → payload   (pixel work)
//! 3. Operations    compose 1 and 2, assemble the data URI
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: dimension math and operation flow are unit-tested
//!   without encoding a single pixel, via a recording mock backend.
//! - **Swappable pixel work**: [`SurfaceBackend`] is a trait; the production
//!   [`RasterBackend`] runs on the `image` crate, but a host with its own
//!   drawing surface can supply one.
//! - **Explicit failure**: validation happens before the backend is touched,
//!   so every bad input surfaces as a typed [`CropError`] rather than a
//!   half-rendered surface.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`params`] | Input types: [`CropRegion`], [`OutputSizing`], validated [`RenderParams`] |
//! | [`calculations`] | Pure dimension math: region validation, sizing priority resolution |
//! | [`backend`] | [`SurfaceBackend`] trait, [`SourceImage`], [`RenderedSurface`], [`EncodedPayload`] |
//! | [`raster_backend`] | Production backend: crop + Lanczos3 resample + PNG encode |
//! | [`operations`] | High-level flows: [`render`], [`to_encoded_image`], [`crop_to_encoded_image`], [`crop_to_binary_object`] |
//! | [`decode`] | Data-URI string → [`BinaryObject`] |
//! | [`error`] | [`CropError`] taxonomy and crate [`Result`] alias |
//!
//! # Sizing priority
//!
//! [`OutputSizing`] carries three optional modes resolved in fixed priority
//! order `scale > width > height`; only the first present one is honored.
//! The `width` and `height` modes preserve the *crop region's* aspect ratio,
//! not the full source image's.
//!
//! # Tainted surfaces
//!
//! A [`SourceImage`] carries a [`PixelAccess`] marker modeling the host
//! environment's cross-origin rule: a `Restricted` source can still be drawn,
//! but the resulting surface is tainted and [`to_encoded_image`] refuses it
//! with [`CropError::TaintedSurface`]. That restriction is the environment's,
//! not this crate's; the only fix is a readable source.
//!
//! # Example
//!
//! ```
//! use clipcrop::{
//!     CropRegion, OutputSizing, RasterBackend, SourceImage, crop_to_encoded_image,
//! };
//! use image::DynamicImage;
//!
//! let backend = RasterBackend::new();
//! let source = SourceImage::new(DynamicImage::new_rgba8(400, 300));
//!
//! let encoded = crop_to_encoded_image(
//!     &backend,
//!     &source,
//!     CropRegion::new(0, 0, 100, 50),
//!     &OutputSizing::scale(2.0),
//! )
//! .unwrap();
//!
//! assert!(encoded.as_str().starts_with("data:image/png;base64,"));
//! ```

pub mod backend;
pub mod calculations;
pub mod decode;
pub mod error;
pub mod operations;
pub mod params;
pub mod raster_backend;

pub use backend::{EncodedPayload, PixelAccess, RenderedSurface, SourceImage, SurfaceBackend};
pub use calculations::{output_dimensions, validate_region};
pub use decode::{BinaryObject, decode};
pub use error::{CropError, Result};
pub use operations::{
    EncodedImage, crop_to_binary_object, crop_to_encoded_image, render, to_encoded_image,
};
pub use params::{CropRegion, OutputSizing, RenderParams};
pub use raster_backend::RasterBackend;
