use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    /// The fixed source path does not exist. The only failure this tool
    /// recognizes; everything else is the imaging library's or the
    /// filesystem's problem.
    #[error("Source icon not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
