//! Error types for the native image boundary.
//!
//! The simulation itself never fails; only loading images from disk,
//! writing frames back out, and parsing driver arguments can.

use std::fmt;

#[derive(Debug)]
pub enum SwarmError {
    /// Failed to decode or encode an image.
    ImageLoad(image::ImageError),
    /// Failed to read or write a file.
    Io(std::io::Error),
    /// Bad command-line arguments.
    Args(String),
}

impl fmt::Display for SwarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwarmError::ImageLoad(e) => write!(f, "Failed to process image: {}", e),
            SwarmError::Io(e) => write!(f, "I/O error: {}", e),
            SwarmError::Args(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl std::error::Error for SwarmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwarmError::ImageLoad(e) => Some(e),
            SwarmError::Io(e) => Some(e),
            SwarmError::Args(_) => None,
        }
    }
}

impl From<image::ImageError> for SwarmError {
    fn from(e: image::ImageError) -> Self {
        SwarmError::ImageLoad(e)
    }
}

impl From<std::io::Error> for SwarmError {
    fn from(e: std::io::Error) -> Self {
        SwarmError::Io(e)
    }
}
