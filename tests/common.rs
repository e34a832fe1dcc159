#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
}

/// Write a gradient JPEG at high quality so re-encoding has room to shrink it.
pub fn create_test_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, 100);
    image::DynamicImage::ImageRgb8(gradient_rgb(width, height))
        .write_with_encoder(encoder)
        .unwrap();
    writer.flush().unwrap();
    path
}

pub fn create_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient_rgb(width, height).save(&path).unwrap();
    path
}

/// Semi-transparent red, the classic case that must survive JPEG output.
pub fn create_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 128]))
        .save(&path)
        .unwrap();
    path
}

pub fn create_fake_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(contents).unwrap();
    path
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
