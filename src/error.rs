use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Showcase dir not found: {}", .0.display())]
    ShowcaseDirNotFound(PathBuf),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, CropError>;
