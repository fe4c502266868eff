//! End-to-end tests for file conversion and batch processing.
//!
//! These tests write real image files into temporary directories and run
//! them through the public conversion API:
//! - Output shape for every dimension mode
//! - Format and path validation before decoding
//! - Idempotent output
//! - Per-file failure isolation in batches

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glyphcast::batch::{collect_images, convert_dir};
use glyphcast::{
    convert, convert_file, ConversionConfig, ConversionError, DimensionMode, FixedViewport,
    ImageHandle, ResolutionTier,
};
use image::{Rgb, RgbImage};
use tempfile::{tempdir, TempDir};

/// Helper to create a test image with the specified pattern.
fn make_test_image(pattern: &str, width: u32, height: u32) -> RgbImage {
    match pattern {
        "gradient_h" => RgbImage::from_fn(width, height, |x, _| {
            let v = (x * 255 / (width - 1)) as u8;
            Rgb([v, v, v])
        }),
        "face_like" => {
            // Bright center, dark edges
            let cx = width as f32 / 2.0;
            let cy = height as f32 / 2.0;
            let max_dist = (cx * cx + cy * cy).sqrt();
            RgbImage::from_fn(width, height, |x, y| {
                let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                let v = (255.0 * (1.0 - dist / max_dist)).max(0.0) as u8;
                Rgb([v, v, v])
            })
        }
        "color_bars" => RgbImage::from_fn(width, height, |x, _| match x * 3 / width {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        }),
        _ => panic!("Unknown pattern: {}", pattern),
    }
}

fn write_image(dir: &TempDir, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    image.save(&path).unwrap();
    path
}

fn assert_shape(art: &str, width: usize, height: usize, ramp: &[char]) {
    let lines: Vec<&str> = art.split_terminator('\n').collect();
    assert_eq!(lines.len(), height, "line count");
    assert!(art.ends_with('\n'));
    for line in lines {
        assert_eq!(line.chars().count(), 2 * width, "line width");
        assert!(line.chars().all(|c| ramp.contains(&c)), "glyph outside ramp: {:?}", line);
    }
}

fn manual(width: u32, height: u32) -> ConversionConfig {
    ConversionConfig {
        mode: DimensionMode::Manual { width, height },
        ..Default::default()
    }
}

// ==================== Single File Tests ====================

#[test]
fn test_png_manual_mode_shape() {
    let dir = tempdir().unwrap();
    let path = write_image(&dir, "face.png", &make_test_image("face_like", 320, 240));

    let config = ConversionConfig {
        tier: ResolutionTier::Mid,
        ..manual(100, 50)
    };
    let art = convert_file(&path, &config, &FixedViewport::unavailable()).unwrap();
    assert_shape(&art, 50, 50, config.ramp());
}

#[test]
fn test_fit_height_shape() {
    let dir = tempdir().unwrap();
    let path = write_image(&dir, "wide.bmp", &make_test_image("gradient_h", 200, 100));

    let config = ConversionConfig {
        mode: DimensionMode::FitViewportHeight,
        ..Default::default()
    };
    let art = convert_file(&path, &config, &FixedViewport::new(120, 40)).unwrap();
    assert_shape(&art, 80, 36, config.ramp());
}

#[test]
fn test_fit_width_shape() {
    let dir = tempdir().unwrap();
    let path = write_image(&dir, "bars.tiff", &make_test_image("color_bars", 200, 100));

    let config = ConversionConfig {
        tier: ResolutionTier::High,
        ..Default::default()
    };
    let art = convert_file(&path, &config, &FixedViewport::new(120, 40)).unwrap();
    assert_shape(&art, 59, 30, config.ramp());
}

#[test]
fn test_every_tier_and_polarity_stays_in_ramp() {
    let image = ImageHandle::from_rgb(make_test_image("face_like", 90, 60));
    for tier in ResolutionTier::ALL {
        for invert in [false, true] {
            let config = ConversionConfig {
                tier,
                invert,
                ..manual(30, 10)
            };
            let art = convert(&image, &config, &FixedViewport::unavailable()).unwrap();
            assert_shape(&art, 15, 10, tier.ramp(invert));
        }
    }
}

#[test]
fn test_face_has_meaningful_variation() {
    let image = ImageHandle::from_rgb(make_test_image("face_like", 160, 120));
    let config = ConversionConfig {
        tier: ResolutionTier::High,
        ..manual(80, 30)
    };
    let art = convert(&image, &config, &FixedViewport::unavailable()).unwrap();
    let distinct: HashSet<char> = art.chars().filter(|c| *c != '\n').collect();
    assert!(distinct.len() >= 8, "only {} distinct glyphs", distinct.len());
}

#[test]
fn test_pure_colors_share_a_glyph() {
    // Channel averaging treats red, green and blue alike
    let image = ImageHandle::from_rgb(make_test_image("color_bars", 300, 40));
    let art = convert(&image, &manual(6, 1), &FixedViewport::unavailable()).unwrap();
    let glyphs: Vec<char> = art.trim_end().chars().step_by(2).collect();
    // Each bar averages to gray 85, the second Low bucket
    assert_eq!(glyphs, vec!['.', '.', '.']);
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = write_image(&dir, "face.png", &make_test_image("face_like", 123, 77));
    let config = ConversionConfig {
        tier: ResolutionTier::High,
        invert: true,
        ..Default::default()
    };
    let viewport = FixedViewport::new(100, 30);

    let first = convert_file(&path, &config, &viewport).unwrap();
    let second = convert_file(&path, &config, &viewport).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_width_one_still_renders() {
    let image = ImageHandle::from_rgb(make_test_image("gradient_h", 10, 10));
    let art = convert(&image, &manual(1, 2), &FixedViewport::unavailable()).unwrap();
    assert_shape(&art, 1, 2, ResolutionTier::Low.ramp(false));
}

// ==================== Validation Tests ====================

#[test]
fn test_svg_rejected_before_decode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vector.svg");
    // Valid PNG bytes under an svg name must still be refused
    make_test_image("gradient_h", 4, 4)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();

    let err = convert_file(&path, &ConversionConfig::default(), &FixedViewport::new(80, 24))
        .unwrap_err();
    assert_eq!(err.path, path);
    assert!(matches!(
        err.kind,
        ConversionError::UnsupportedFormat { ref extension } if extension == "svg"
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghost.jpg");
    let err = convert_file(&path, &manual(10, 10), &FixedViewport::unavailable()).unwrap_err();
    assert!(matches!(err.kind, ConversionError::FileNotFound));
    assert!(err.to_string().contains("ghost.jpg"));
}

#[test]
fn test_auto_mode_without_terminal() {
    let dir = tempdir().unwrap();
    let path = write_image(&dir, "a.png", &make_test_image("gradient_h", 8, 8));
    let err = convert_file(&path, &ConversionConfig::default(), &FixedViewport::unavailable())
        .unwrap_err();
    assert!(matches!(err.kind, ConversionError::MissingViewportInfo));
}

// ==================== Batch Tests ====================

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

#[test]
fn test_batch_isolates_corrupt_file() {
    let dir = tempdir().unwrap();
    write_image(&dir, "1.png", &make_test_image("face_like", 64, 48));
    std::fs::write(dir.path().join("2.png"), b"\x89PNG\r\n\x1a\nnot really").unwrap();
    write_image(&dir, "3.png", &make_test_image("gradient_h", 64, 48));

    let config = manual(20, 6);
    let report = convert_dir(dir.path(), &config, &FixedViewport::unavailable()).unwrap();

    let names: Vec<String> = report.items.iter().map(|i| file_name(&i.path)).collect();
    assert_eq!(names, vec!["1.png", "2.png", "3.png"]);

    let ok: Vec<String> = report.successes().map(|(p, _)| file_name(p)).collect();
    assert_eq!(ok, vec!["1.png", "3.png"]);
    for (_, art) in report.successes() {
        assert_shape(art, 10, 6, config.ramp());
    }

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(file_name(&failures[0].path), "2.png");
    assert!(matches!(failures[0].kind, ConversionError::DecodeError(_)));
}

#[test]
fn test_batch_matches_single_file_output() {
    let dir = tempdir().unwrap();
    let a = write_image(&dir, "a.gif", &make_test_image("face_like", 50, 50));
    let b = write_image(&dir, "b.jpg", &make_test_image("gradient_h", 50, 50));

    let config = ConversionConfig {
        tier: ResolutionTier::Mid,
        ..Default::default()
    };
    let viewport = FixedViewport::new(60, 20);
    let report = convert_dir(dir.path(), &config, &viewport).unwrap();
    let arts: Vec<&str> = report.successes().map(|(_, art)| art).collect();

    assert_eq!(arts.len(), 2);
    assert_eq!(arts[0], convert_file(&a, &config, &viewport).unwrap());
    assert_eq!(arts[1], convert_file(&b, &config, &viewport).unwrap());
}

#[test]
fn test_batch_skips_unsupported_files() {
    let dir = tempdir().unwrap();
    write_image(&dir, "keep.png", &make_test_image("gradient_h", 8, 8));
    std::fs::write(dir.path().join("drawing.svg"), b"<svg/>").unwrap();
    std::fs::write(dir.path().join("readme.md"), b"# hi").unwrap();

    let images = collect_images(dir.path()).unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(file_name(&images[0]), "keep.png");
}
