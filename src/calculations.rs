//! Pure calculation functions for crop validation and output dimensions.
//!
//! All functions here are pure and testable without any images or backends.

use crate::error::{CropError, Result};
use crate::params::{CropRegion, OutputSizing};

/// Validate a crop region and return it as an unsigned rectangle
/// `(x, y, width, height)`.
///
/// The origin must be non-negative and both extents strictly positive.
pub fn validate_region(region: &CropRegion) -> Result<(u32, u32, u32, u32)> {
    if region.x < 0 || region.y < 0 {
        return Err(CropError::InvalidRegion(format!(
            "origin ({}, {}) must be non-negative",
            region.x, region.y
        )));
    }
    if region.width <= 0 || region.height <= 0 {
        return Err(CropError::InvalidRegion(format!(
            "dimensions {}x{} must be positive",
            region.width, region.height
        )));
    }
    Ok((
        region.x as u32,
        region.y as u32,
        region.width as u32,
        region.height as u32,
    ))
}

/// Resolve output dimensions from crop dimensions and a sizing configuration.
///
/// Exactly one sizing mode is honored, in fixed priority order
/// `scale > width > height`. Fractional results round to nearest.
///
/// # Examples
/// ```
/// # use clipcrop::{OutputSizing, output_dimensions};
/// // 100x50 crop at scale 2 → 200x100
/// assert_eq!(output_dimensions(100, 50, &OutputSizing::scale(2.0)).unwrap(), (200, 100));
///
/// // 80x40 crop pinned to width 160 → 160x80
/// assert_eq!(output_dimensions(80, 40, &OutputSizing::width(160)).unwrap(), (160, 80));
/// ```
pub fn output_dimensions(
    crop_width: u32,
    crop_height: u32,
    sizing: &OutputSizing,
) -> Result<(u32, u32)> {
    let (out_w, out_h) = if let Some(scale) = sizing.scale {
        if scale <= 0.0 {
            return Err(CropError::InvalidSizing(format!(
                "scale must be positive, got {scale}"
            )));
        }
        (
            (crop_width as f64 * scale).round() as u32,
            (crop_height as f64 * scale).round() as u32,
        )
    } else if let Some(width) = sizing.width {
        if width == 0 {
            return Err(CropError::InvalidSizing("width must be positive".into()));
        }
        let h = (width as f64 * crop_height as f64 / crop_width as f64).round() as u32;
        (width, h)
    } else if let Some(height) = sizing.height {
        if height == 0 {
            return Err(CropError::InvalidSizing("height must be positive".into()));
        }
        let w = (height as f64 * crop_width as f64 / crop_height as f64).round() as u32;
        (w, height)
    } else {
        return Err(CropError::InvalidSizing(
            "one of scale, width, or height must be set".into(),
        ));
    };

    // A dimension that rounds to zero cannot back a surface.
    if out_w == 0 || out_h == 0 {
        return Err(CropError::InvalidSizing(format!(
            "resolved output dimensions {out_w}x{out_h} are empty"
        )));
    }

    Ok((out_w, out_h))
}
