use crate::constants::{
    COMPRESSED_SUFFIX, DEFAULT_QUALITY, FLATTEN_BACKGROUND, PNG_OPTIMIZATION_PRESET,
};
use crate::error::{CompressionError, Result};
use crate::formats::ImageKind;
use crate::utils::calculate_compression_ratio;
use crate::validation::{validate_bound, validate_input_path, validate_quality};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageReader, Rgb, RgbImage};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A single compression job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// JPEG quality, 1..=100. Ignored for PNG output.
    pub quality: u8,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

impl CompressionRequest {
    /// Builds and validates a request without touching the filesystem.
    ///
    /// A missing `output_path` becomes `<stem>_compressed<.ext>` next to the input.
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: Option<PathBuf>,
        quality: Option<u8>,
        max_width: Option<u32>,
        max_height: Option<u32>,
    ) -> Result<Self> {
        let input_path = input_path.into();
        let output_path = output_path.unwrap_or_else(|| default_output_path(&input_path));

        let request = Self {
            input_path,
            output_path,
            quality: quality.unwrap_or(DEFAULT_QUALITY),
            max_width,
            max_height,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        validate_quality(self.quality)?;
        validate_bound(self.max_width, "max width")?;
        validate_bound(self.max_height, "max height")?;
        Ok(())
    }
}

/// Outcome of a successful [`compress`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub output_path: PathBuf,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
}

impl CompressionResult {
    pub fn reduction_percent(&self) -> f64 {
        calculate_compression_ratio(self.original_bytes, self.compressed_bytes)
    }

    pub fn was_resized(&self) -> bool {
        self.original_dimensions != self.output_dimensions
    }
}

/// `dir/photo.JPG` -> `dir/photo_compressed.JPG`
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(COMPRESSED_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Decode, optionally downscale, re-encode and write one image.
///
/// # Returns
/// * `Ok(CompressionResult)` - byte sizes before and after, plus the output path
/// * `Err(CompressionError)` - see [`crate::ErrorKind`] for how failures are classified
///
/// Exactly one file is written, and only after encoding has fully succeeded
/// in memory. The bytes are staged next to the output and renamed into place,
/// so a failed write leaves no partial file behind. The input is not modified
/// unless it is also the output.
pub fn compress(request: &CompressionRequest) -> Result<CompressionResult> {
    request.validate()?;

    let input_kind = validate_input_path(&request.input_path)?;
    let (mut img, original_bytes) = load_image_with_metadata(&request.input_path)?;
    let original_dimensions = (img.width(), img.height());
    debug!(
        "Loaded {} image {:?}: {}x{}, {:?}, {} bytes",
        input_kind,
        request.input_path,
        original_dimensions.0,
        original_dimensions.1,
        img.color(),
        original_bytes
    );

    resize_image(&mut img, request);
    let output_dimensions = (img.width(), img.height());

    let output_kind = ImageKind::for_output(&request.output_path);
    let encoded = encode_image(img, output_kind, request.quality)?;
    debug!("Encoded {} output: {} bytes", output_kind, encoded.len());

    let compressed_bytes = write_output(&request.output_path, &encoded, &request.input_path)?;

    Ok(CompressionResult {
        original_bytes,
        compressed_bytes,
        output_path: request.output_path.clone(),
        original_dimensions,
        output_dimensions,
    })
}

/// Loads an image file and returns it along with its size on disk.
///
/// The decoder is picked from the file content, falling back to the extension.
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();

    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| CompressionError::Decode {
            path: input_path.to_path_buf(),
            source,
        })?;

    Ok((img, file_size))
}

/// Target size for a `width`x`height` image bounded by the optional limits.
///
/// Both sides are scaled by `min(max_w / w, max_h / h, 1.0)`, so the image is
/// never enlarged. The limiting side lands exactly on its bound and the other
/// side is floored, never below 1px. Integer arithmetic keeps this exact.
pub fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let bound_w = max_width.filter(|&m| m > 0).map_or(width, |m| m.min(width));
    let bound_h = max_height.filter(|&m| m > 0).map_or(height, |m| m.min(height));

    let (w, h) = (u64::from(width), u64::from(height));
    let (bw, bh) = (u64::from(bound_w), u64::from(bound_h));

    // bw / w <= bh / h, cross-multiplied
    if bw * h <= bh * w {
        let new_h = (h * bw / w).max(1);
        (bound_w, new_h as u32)
    } else {
        let new_w = (w * bh / h).max(1);
        (new_w as u32, bound_h)
    }
}

/// Downscale in place to fit the request's bounds. Returns whether a resize happened.
pub fn resize_image(img: &mut DynamicImage, request: &CompressionRequest) -> bool {
    let (width, height) = (img.width(), img.height());
    let (new_width, new_height) =
        fit_dimensions(width, height, request.max_width, request.max_height);

    if (new_width, new_height) == (width, height) {
        return false;
    }

    debug!(
        "Resizing {}x{} -> {}x{}",
        width, height, new_width, new_height
    );
    *img = img.resize_exact(new_width, new_height, FilterType::Lanczos3);
    true
}

/// Composite the alpha channel over [`FLATTEN_BACKGROUND`].
pub fn flatten_alpha(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let [bg_r, bg_g, bg_b] = FLATTEN_BACKGROUND;

    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([blend(r, bg_r, a), blend(g, bg_g, a), blend(b, bg_b, a)])
    })
}

fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(fg) * a + u32::from(bg) * (255 - a) + 127) / 255) as u8
}

/// Convert to a colour type the JPEG encoder accepts: L8 or RGB8, never alpha.
pub fn prepare_for_jpeg(img: DynamicImage) -> DynamicImage {
    let color = img.color();
    if color.has_alpha() {
        debug!("Flattening {:?} onto white background for JPEG", color);
        return DynamicImage::ImageRgb8(flatten_alpha(&img));
    }

    match color {
        ColorType::L8 | ColorType::Rgb8 => img,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

pub fn encode_image(img: DynamicImage, kind: ImageKind, quality: u8) -> Result<Vec<u8>> {
    let img = if kind.supports_alpha() {
        img
    } else {
        prepare_for_jpeg(img)
    };

    match kind {
        ImageKind::Jpeg => encode_jpeg(&img, quality),
        ImageKind::Png => encode_png(&img),
    }
}

pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality))?;
    Ok(buf)
}

/// Lossless: the `image` PNG encoder followed by an oxipng pass.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    img.write_with_encoder(PngEncoder::new(&mut raw))?;

    let options = oxipng::Options::from_preset(PNG_OPTIMIZATION_PRESET);
    oxipng::optimize_from_memory(&raw, &options)
        .map_err(|e| CompressionError::PngOptimization(e.to_string()))
}

/// Stage `data` in a temp file beside `output_path`, then rename it over the
/// target. Permissions come from the existing output, else from `template`.
fn write_output(output_path: &Path, data: &[u8], template: &Path) -> Result<u64> {
    let not_writable = |source: io::Error| CompressionError::OutputNotWritable {
        path: output_path.to_path_buf(),
        source,
    };

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(not_writable)?;
    staged.write_all(data).map_err(not_writable)?;
    staged.as_file().sync_all().map_err(not_writable)?;

    if let Ok(metadata) = fs::metadata(output_path).or_else(|_| fs::metadata(template)) {
        staged
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(not_writable)?;
    }

    // On failure the PersistError still owns the temp file and removes it on drop
    staged
        .persist(output_path)
        .map_err(|e| not_writable(e.error))?;
    debug!("Wrote {:?}", output_path);

    Ok(fs::metadata(output_path)?.len())
}
