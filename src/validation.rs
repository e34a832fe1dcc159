use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use crate::formats::ImageKind;
use std::path::Path;

/// Checks the quality setting. Performs no I/O.
pub fn validate_quality(quality: u8) -> Result<()> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(CompressionError::InvalidQuality(quality));
    }
    Ok(())
}

/// Checks an optional size bound. Performs no I/O.
pub fn validate_bound(bound: Option<u32>, name: &'static str) -> Result<()> {
    if bound == Some(0) {
        return Err(CompressionError::InvalidDimension(name));
    }
    Ok(())
}

/// Validate that the input exists, is a regular file and has a supported
/// extension. Returns the format implied by the extension.
pub fn validate_input_path(path: &Path) -> Result<ImageKind> {
    if !path.is_file() {
        return Err(CompressionError::FileNotFound(path.to_path_buf()));
    }
    ImageKind::from_path(path)
}
