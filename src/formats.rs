//! Type-safe handling of the two image formats this tool reads and writes.

use crate::constants::SUPPORTED_INPUT_EXTENSIONS;
use crate::error::{CompressionError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Lossless, re-optimized with oxipng
    Png,
    /// Lossy, honours the quality setting
    Jpeg,
}

impl ImageKind {
    /// Strict lookup used to validate input files: only `.png`, `.jpg` and
    /// `.jpeg` (any case) are accepted.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = lowercase_extension(path);
        if !SUPPORTED_INPUT_EXTENSIONS.contains(&ext.as_str()) {
            let shown = if ext.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{}", ext)
            };
            return Err(CompressionError::UnsupportedFormat(shown));
        }
        ImageKind::from_str(&ext)
    }

    /// Output format selection. Anything that is not `.png` is written as JPEG.
    pub fn for_output(path: &Path) -> Self {
        match lowercase_extension(path).as_str() {
            "png" => ImageKind::Png,
            _ => ImageKind::Jpeg,
        }
    }

    pub fn supports_alpha(&self) -> bool {
        matches!(self, ImageKind::Png)
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageKind::Png => "PNG",
            ImageKind::Jpeg => "JPEG",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ImageKind {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ImageKind::Png),
            "jpeg" | "jpg" => Ok(ImageKind::Jpeg),
            _ => Err(CompressionError::UnsupportedFormat(s.to_string())),
        }
    }
}

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default()
}
