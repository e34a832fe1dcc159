use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported file format: {0}. Supported: .png, .jpg, .jpeg")]
    UnsupportedFormat(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid {0}: must be a positive number of pixels")]
    InvalidDimension(&'static str),

    #[error("Error opening image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Error encoding compressed image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Cannot write output file {path}: {source}")]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`CompressionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing input, unsupported format, or an out-of-range parameter.
    InvalidInput,
    /// The codec failed while resizing or encoding.
    Encode,
    /// Reading metadata or writing the output failed.
    Io,
}

impl CompressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompressionError::FileNotFound(_)
            | CompressionError::UnsupportedFormat(_)
            | CompressionError::InvalidQuality(_)
            | CompressionError::InvalidDimension(_)
            | CompressionError::Decode { .. } => ErrorKind::InvalidInput,
            CompressionError::Encode(_) | CompressionError::PngOptimization(_) => {
                ErrorKind::Encode
            }
            CompressionError::OutputNotWritable { .. } | CompressionError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
