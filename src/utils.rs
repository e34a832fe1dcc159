//! Helpers for the human-readable compression report.
use crate::constants::{
    DIMENSIONS_PREFIX, INPUT_PREFIX, OUTPUT_PREFIX, PROGRESS_SPINNER_TEMPLATE, RATIO_PREFIX,
    SUCCESS_PREFIX, WARNING_PREFIX,
};
use crate::processing::CompressionResult;
use crate::report;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Create a progress spinner with consistent styling. Hidden in quiet mode.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// `512 B`, `1.5 KB`, `3.2 MB`: binary units, one decimal above bytes.
pub fn format_file_size(bytes: u64) -> String {
    const STEP: f64 = 1024.0;
    const SCALED_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / STEP;
    let mut unit = SCALED_UNITS[0];
    for &next in &SCALED_UNITS[1..] {
        if size < STEP {
            break;
        }
        size /= STEP;
        unit = next;
    }
    format!("{:.1} {}", size, unit)
}

/// Percentage saved relative to the original; negative when the output grew.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    match original_size {
        0 => 0.0,
        before => (before as f64 - compressed_size as f64) * 100.0 / before as f64,
    }
}

pub fn print_compression_result(input: &Path, result: &CompressionResult) {
    let ratio = calculate_compression_ratio(result.original_bytes, result.compressed_bytes);

    report!("{} Image compressed successfully!", SUCCESS_PREFIX);
    report!(
        "  {} {} ({})",
        INPUT_PREFIX,
        input.display(),
        format_file_size(result.original_bytes)
    );
    report!(
        "  {} {} ({})",
        OUTPUT_PREFIX,
        result.output_path.display(),
        format_file_size(result.compressed_bytes)
    );

    if result.was_resized() {
        let (ow, oh) = result.original_dimensions;
        let (nw, nh) = result.output_dimensions;
        report!("  {} {}x{} -> {}x{}", DIMENSIONS_PREFIX, ow, oh, nw, nh);
    }

    if ratio >= 0.0 {
        report!("  {} {:.1}%", RATIO_PREFIX, ratio);
    } else {
        report!(
            "  {} File size increased by {:.1}%",
            WARNING_PREFIX,
            ratio.abs()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024 / 2), "2.5 MB");
        assert_eq!(format_file_size(3 << 30), "3.0 GB");
        assert_eq!(format_file_size(2048 << 40), "2048.0 TB");
    }

    #[test]
    fn test_compression_ratio_sign() {
        assert_eq!(calculate_compression_ratio(4000, 1000), 75.0);
        assert_eq!(calculate_compression_ratio(500, 750), -50.0);
        assert_eq!(calculate_compression_ratio(0, 10), 0.0);
    }
}
