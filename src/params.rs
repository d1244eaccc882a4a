//! Input value types for crop operations.
//!
//! These structs describe *what* to do, not *how* to do it. [`CropRegion`] and
//! [`OutputSizing`] are the caller-facing inputs (serde-derived, since they
//! typically arrive from host-application config or a UI payload), while
//! [`RenderParams`] is the already-validated block that
//! [`operations`](crate::operations) hands to the backend.

use serde::{Deserialize, Serialize};

/// Sub-rectangle of the source image to extract, in source pixel coordinates
/// with the origin at the top-left corner.
///
/// Fields are signed so that out-of-range input can be represented and
/// rejected with a typed error instead of wrapping at construction.
/// Validation requires `x >= 0`, `y >= 0`, `width > 0`, `height > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Output-dimension configuration, evaluated in fixed priority order
/// `scale > width > height`.
///
/// Only the first present field is honored, even when several are set:
///
/// - `scale`: output = crop dimensions × scale
/// - `width`: output width fixed, height preserves the crop aspect ratio
/// - `height`: output height fixed, width preserves the crop aspect ratio
///
/// The aspect ratio preserved is the *crop region's*, not the full source
/// image's. Supplying none of the three is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputSizing {
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl OutputSizing {
    /// Scale both crop dimensions by `factor`.
    pub fn scale(factor: f64) -> Self {
        Self {
            scale: Some(factor),
            ..Self::default()
        }
    }

    /// Fix the output width; height follows the crop aspect ratio.
    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    /// Fix the output height; width follows the crop aspect ratio.
    pub fn height(height: u32) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }
}

/// Validated parameters for a single render: the unsigned crop rectangle plus
/// the resolved output dimensions.
///
/// Built by [`operations::render`](crate::operations::render) after region
/// validation and sizing resolution; backends can trust every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub crop_x: u32,
    pub crop_y: u32,
    pub crop_width: u32,
    pub crop_height: u32,
    pub out_width: u32,
    pub out_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_constructors_set_single_field() {
        assert_eq!(
            OutputSizing::scale(2.0),
            OutputSizing {
                scale: Some(2.0),
                width: None,
                height: None,
            }
        );
        assert_eq!(OutputSizing::width(160).width, Some(160));
        assert_eq!(OutputSizing::height(80).height, Some(80));
    }

    #[test]
    fn sizing_deserializes_with_missing_fields() {
        let sizing: OutputSizing = serde_json::from_str(r#"{"scale": 0.5}"#).unwrap();
        assert_eq!(sizing.scale, Some(0.5));
        assert_eq!(sizing.width, None);
        assert_eq!(sizing.height, None);
    }

    #[test]
    fn region_roundtrips_through_serde() {
        let region = CropRegion::new(10, 20, 80, 40);
        let json = serde_json::to_string(&region).unwrap();
        let back: CropRegion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
    }
}
