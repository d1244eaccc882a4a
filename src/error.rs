//! Error taxonomy for the crop pipeline.
//!
//! Every failure is local and synchronous: the library performs no I/O of its
//! own, so there is no retry policy and nothing transient. Callers get a typed
//! error immediately and decide what to do with it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    /// The crop rectangle has a negative origin, a non-positive extent, or
    /// reaches outside the source image.
    #[error("invalid crop region: {0}")]
    InvalidRegion(String),

    /// No sizing mode was supplied, the active value is non-positive, or the
    /// resolved output dimensions collapse to zero pixels.
    #[error("invalid output sizing: {0}")]
    InvalidSizing(String),

    /// The surface was rendered from a source whose pixels may not be read
    /// back (cross-origin restriction). Drawing succeeded; serialization is
    /// what the restriction forbids.
    #[error("surface is tainted: cross-origin source denies pixel read-back")]
    TaintedSurface,

    /// The decoder was given a string that does not have the
    /// `<header>,<payload>` data-URI shape.
    #[error("malformed encoded image: {0}")]
    MalformedEncodedImage(String),

    /// The surface encoder itself failed.
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CropError>;
