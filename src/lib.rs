pub mod error;
pub mod bbox;
pub mod cropper;
pub mod batch;

use std::io;
use batch::BatchSummary;
use cropper::CropSettings;
use error::Result;

pub use bbox::{find_bright_bbox, BoundingBox};
pub use cropper::{crop_image, crop_to_border, CropOutcome};
pub use error::CropError;

/// Crop every screenshot in the showcase folder with the default settings,
/// reporting one line per file on stdout.
pub fn run() -> Result<BatchSummary> {
    let dir = batch::showcase_dir();
    tracing::debug!(dir = %dir.display(), "cropping showcase screenshots");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    batch::run_batch(&dir, &CropSettings::default(), &mut out)
}
