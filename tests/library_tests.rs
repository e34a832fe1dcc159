mod common;

use common::{create_rgba_png, create_temp_directory, create_test_jpeg, create_test_png};
use image::GenericImageView;
use img_compress::{compress, CompressionError, CompressionRequest, ErrorKind};
use std::fs;

#[test]
fn test_compress_jpeg_reports_sizes() {
    let temp_dir = create_temp_directory();
    let input = create_test_jpeg(temp_dir.path(), "photo.jpg", 320, 240);
    let before = fs::read(&input).unwrap();

    let request = CompressionRequest::new(&input, None, Some(60), None, None).unwrap();
    let result = compress(&request).unwrap();

    assert_eq!(result.output_path, temp_dir.path().join("photo_compressed.jpg"));
    assert!(result.output_path.is_file());
    assert_eq!(result.original_bytes, before.len() as u64);
    assert_eq!(
        result.compressed_bytes,
        fs::metadata(&result.output_path).unwrap().len()
    );
    assert!(result.compressed_bytes > 0);
    assert!(result.reduction_percent() > 0.0);
    assert!(!result.was_resized());

    // input untouched
    assert_eq!(fs::read(&input).unwrap(), before);
}

#[test]
fn test_compress_png_keeps_alpha() {
    let temp_dir = create_temp_directory();
    let input = create_rgba_png(temp_dir.path(), "icon.png", 48, 48);

    let request = CompressionRequest::new(&input, None, None, None, None).unwrap();
    let result = compress(&request).unwrap();

    let decoded = image::open(&result.output_path).unwrap();
    assert!(decoded.color().has_alpha());
    assert_eq!(decoded.dimensions(), (48, 48));
}

#[test]
fn test_compress_png_resize_both_bounds() {
    let temp_dir = create_temp_directory();
    let input = create_test_png(temp_dir.path(), "wide.png", 300, 100);
    let output = temp_dir.path().join("wide_small.png");

    let request =
        CompressionRequest::new(&input, Some(output.clone()), None, Some(150), Some(80)).unwrap();
    let result = compress(&request).unwrap();

    assert_eq!(result.original_dimensions, (300, 100));
    assert_eq!(result.output_dimensions, (150, 50));
    assert_eq!(image::image_dimensions(&output).unwrap(), (150, 50));
}

#[test]
fn test_compress_in_place_overwrite() {
    let temp_dir = create_temp_directory();
    let input = create_test_jpeg(temp_dir.path(), "same.jpg", 64, 64);

    let request =
        CompressionRequest::new(&input, Some(input.clone()), Some(50), None, None).unwrap();
    let result = compress(&request).unwrap();

    assert_eq!(result.output_path, input);
    assert_eq!(image::image_dimensions(&input).unwrap(), (64, 64));
}

#[test]
fn test_unknown_output_extension_writes_jpeg() {
    let temp_dir = create_temp_directory();
    let input = create_test_png(temp_dir.path(), "in.png", 32, 32);
    let output = temp_dir.path().join("out.img");

    let request = CompressionRequest::new(&input, Some(output.clone()), None, None, None).unwrap();
    compress(&request).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_unsupported_input_format() {
    let temp_dir = create_temp_directory();
    let input = temp_dir.path().join("test.gif");
    fs::write(&input, b"GIF89a").unwrap();

    let request = CompressionRequest::new(&input, None, None, None, None).unwrap();
    let err = compress(&request).unwrap_err();

    assert!(matches!(err, CompressionError::UnsupportedFormat(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
