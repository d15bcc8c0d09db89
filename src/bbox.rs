//! Bright-Pixel Bounding Box
//!
//! Finds the smallest axis-aligned rectangle enclosing every pixel whose
//! brightest channel reaches the threshold. Disjoint bright regions are
//! merged into a single box; there is no connected-component analysis.

use image::{Rgb, RgbImage};

// ============================================================================
// BOUNDING BOX
// ============================================================================

/// Rectangle in half-open pixel coordinates: `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True if the box covers the whole `width` x `height` image.
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        *self == Self::new(0, 0, width, height)
    }

    /// Shrink the box by `padding` pixels on each side.
    ///
    /// Left/top never pass `size - 1` and the box never collapses below one
    /// pixel, so the result is always croppable from a non-empty image.
    pub fn shrink_inward(&self, padding: u32, width: u32, height: u32) -> Self {
        let left = (self.left + padding).min(width.saturating_sub(1));
        let top = (self.top + padding).min(height.saturating_sub(1));
        let right = self.right.saturating_sub(padding).max(left + 1);
        let bottom = self.bottom.saturating_sub(padding).max(top + 1);

        Self { left, top, right, bottom }
    }
}

// ============================================================================
// SCANNER
// ============================================================================

/// A pixel is bright when its strongest RGB channel meets the threshold.
pub fn is_bright(pixel: &Rgb<u8>, threshold: u8) -> bool {
    let [r, g, b] = pixel.0;
    r.max(g).max(b) >= threshold
}

/// Scan every pixel once and return the box around all bright pixels,
/// or `None` if nothing qualifies.
pub fn find_bright_bbox(img: &RgbImage, threshold: u8) -> Option<BoundingBox> {
    let (width, height) = img.dimensions();

    let mut min_x = width;
    let mut max_x = 0;
    let mut min_y = height;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if is_bright(pixel, threshold) {
            found = true;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return None;
    }

    Some(BoundingBox::new(min_x, min_y, max_x + 1, max_y + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn square_on_black(size: u32, from: u32, to: u32) -> RgbImage {
        let mut img: RgbImage = ImageBuffer::from_pixel(size, size, BLACK);
        for y in from..=to {
            for x in from..=to {
                img.put_pixel(x, y, WHITE);
            }
        }
        img
    }

    #[test]
    fn test_all_dark_has_no_bbox() {
        let img: RgbImage = ImageBuffer::from_pixel(10, 10, Rgb([199, 120, 30]));
        assert_eq!(find_bright_bbox(&img, 200), None);
    }

    #[test]
    fn test_white_square_bbox() {
        let img = square_on_black(10, 3, 6);
        assert_eq!(find_bright_bbox(&img, 200), Some(BoundingBox::new(3, 3, 7, 7)));
    }

    #[test]
    fn test_single_channel_reaches_threshold() {
        let mut img: RgbImage = ImageBuffer::from_pixel(5, 5, BLACK);
        img.put_pixel(4, 0, Rgb([0, 200, 0]));
        assert!(is_bright(&Rgb([0, 0, 200]), 200));
        assert!(!is_bright(&Rgb([199, 199, 199]), 200));
        assert_eq!(find_bright_bbox(&img, 200), Some(BoundingBox::new(4, 0, 5, 1)));
    }

    #[test]
    fn test_disjoint_regions_merge_into_one_box() {
        let mut img: RgbImage = ImageBuffer::from_pixel(20, 12, BLACK);
        img.put_pixel(2, 9, WHITE);
        img.put_pixel(15, 1, WHITE);
        assert_eq!(find_bright_bbox(&img, 200), Some(BoundingBox::new(2, 1, 16, 10)));
    }

    #[test]
    fn test_fully_bright_is_full() {
        let img: RgbImage = ImageBuffer::from_pixel(8, 6, WHITE);
        let bbox = find_bright_bbox(&img, 200).unwrap();
        assert!(bbox.is_full(8, 6));
        assert_eq!((bbox.width(), bbox.height()), (8, 6));
    }

    #[test]
    fn test_shrink_inward_by_one() {
        let bbox = BoundingBox::new(2, 2, 8, 8);
        assert_eq!(bbox.shrink_inward(1, 10, 10), BoundingBox::new(3, 3, 7, 7));
    }

    #[test]
    fn test_shrink_inward_zero_is_identity() {
        let bbox = BoundingBox::new(2, 3, 8, 9);
        assert_eq!(bbox.shrink_inward(0, 10, 10), bbox);
    }

    #[test]
    fn test_shrink_inward_clamps_to_one_pixel() {
        // 2px wide box padded by 5 collapses to a single pixel at the clamped left edge
        let bbox = BoundingBox::new(4, 4, 6, 6);
        assert_eq!(bbox.shrink_inward(5, 10, 10), BoundingBox::new(9, 9, 10, 10));

        let single = BoundingBox::new(0, 0, 1, 1);
        assert_eq!(single.shrink_inward(3, 1, 1), BoundingBox::new(0, 0, 1, 1));
    }
}
