pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod utils;
pub mod validation;

pub use error::{CompressionError, ErrorKind, Result};
pub use formats::ImageKind;
pub use processing::{
    compress, default_output_path, encode_image, fit_dimensions, flatten_alpha,
    load_image_with_metadata, prepare_for_jpeg, resize_image, CompressionRequest,
    CompressionResult,
};
pub use utils::{calculate_compression_ratio, format_file_size, print_compression_result};
