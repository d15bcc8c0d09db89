//! Border Cropper
//!
//! Trims the dark background around a showcase screenshot so the image edge
//! sits on the white border of the component. The crop box comes from the
//! bright-pixel scan in [`crate::bbox`], optionally shrunk inward.
//!
//! The whole cropped image is encoded in memory before the original file is
//! overwritten; images that would not shrink are never written.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;
use crate::bbox::{find_bright_bbox, BoundingBox};
use crate::error::{CropError, Result};

// ============================================================================
// SETTINGS
// ============================================================================

/// Pixels at least this bright define the component edge.
/// Lower (e.g. 180) includes more; higher (e.g. 240) crops tighter to the border.
pub const WHITE_BORDER_THRESHOLD: u8 = 200;

/// Pixels to shrink inward from the border box (0 = edge at border; 1 = just inside).
pub const PADDING_INSIDE: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSettings {
    /// Minimum max(R, G, B) for a pixel to count as border (default: 200)
    pub threshold: u8,
    /// Inward padding applied to each side of the box (default: 0)
    pub padding_inside: u32,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            threshold: WHITE_BORDER_THRESHOLD,
            padding_inside: PADDING_INSIDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropOutcome {
    Cropped { from: (u32, u32), to: (u32, u32) },
    Unchanged,
}

// ============================================================================
// IN-MEMORY CROP
// ============================================================================

/// Final crop box for `img`, or `None` when there is nothing to trim.
///
/// Alpha is ignored for the scan: the brightness test only looks at RGB.
pub fn crop_box(img: &DynamicImage, settings: &CropSettings) -> Option<BoundingBox> {
    let (width, height) = img.dimensions();

    let bbox = find_bright_bbox(&img.to_rgb8(), settings.threshold)?
        .shrink_inward(settings.padding_inside, width, height);

    if bbox.is_full(width, height) {
        return None;
    }

    Some(bbox)
}

/// Crop `img` to its border box, keeping the original color type (and alpha).
pub fn crop_image(img: &DynamicImage, settings: &CropSettings) -> Option<DynamicImage> {
    let bbox = crop_box(img, settings)?;
    Some(img.crop_imm(bbox.left, bbox.top, bbox.width(), bbox.height()))
}

// ============================================================================
// FILE ENTRY POINT
// ============================================================================

/// Crop the PNG at `path` in place.
pub fn crop_to_border(path: &Path, settings: &CropSettings) -> Result<CropOutcome> {
    let img = image::open(path)
        .map_err(|e| CropError::Processing(format!("Failed to load {}: {}", path.display(), e)))?;

    let Some(cropped) = crop_image(&img, settings) else {
        tracing::debug!(path = %path.display(), "no trim needed");
        return Ok(CropOutcome::Unchanged);
    };

    let bytes = encode_png(&cropped)?;
    fs::write(path, &bytes)?;

    let from = img.dimensions();
    let to = cropped.dimensions();
    tracing::debug!(
        path = %path.display(),
        ?from,
        ?to,
        bytes = bytes.len(),
        "cropped to border"
    );

    Ok(CropOutcome::Cropped { from, to })
}

/// Encode as PNG with maximum compression and adaptive row filtering.
fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)?;
    Ok(buf)
}
