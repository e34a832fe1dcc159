pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Inserted between the input stem and extension when no output path is given.
pub const COMPRESSED_SUFFIX: &str = "_compressed";

pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// oxipng preset 2 is the library default: a good size/speed tradeoff
pub const PNG_OPTIMIZATION_PRESET: u8 = 2;

/// Background that alpha is composited over before JPEG encoding.
pub const FLATTEN_BACKGROUND: [u8; 3] = [255, 255, 255];

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️ ";
pub const INPUT_PREFIX: &str = "📁 Input: ";
pub const OUTPUT_PREFIX: &str = "📁 Output:";
pub const DIMENSIONS_PREFIX: &str = "📏 Dimensions:";
pub const RATIO_PREFIX: &str = "🎯 Size reduction:";
