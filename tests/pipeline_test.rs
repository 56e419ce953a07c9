// End-to-end tests for the file front end and the sampler's index range.
use grass_tint::{
    colormap_coordinates, BiomeCoordinate, OutputTargets, TextureSet, TintError,
};
use image::{Rgba, RgbaImage};
use proptest::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn write_png(path: &Path, img: &RgbaImage) {
    img.save(path).unwrap();
}

/// Colormap whose lower-left triangle is solid (200, 100, 50).
fn triangle_colormap() -> RgbaImage {
    RgbaImage::from_fn(256, 256, |x, y| {
        if y >= x {
            Rgba([200, 100, 50, 255])
        } else {
            Rgba([255, 0, 255, 255])
        }
    })
}

fn write_inputs(dir: &Path, side_size: u32, overlay_size: u32) -> TextureSet {
    let textures = TextureSet {
        top: dir.join("top.png"),
        side_overlay: dir.join("overlay.png"),
        side_base: dir.join("side.png"),
        colormap: dir.join("colormap.png"),
    };

    write_png(&textures.top, &RgbaImage::from_pixel(16, 16, Rgba([128, 128, 128, 255])));

    // top half is opaque white grass, bottom half transparent
    let overlay = RgbaImage::from_fn(overlay_size, overlay_size, |_, y| {
        if y < overlay_size / 2 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    write_png(&textures.side_overlay, &overlay);
    write_png(
        &textures.side_base,
        &RgbaImage::from_pixel(side_size, side_size, Rgba([120, 80, 40, 255])),
    );
    write_png(&textures.colormap, &triangle_colormap());
    textures
}

#[test]
fn test_tint_files_writes_both_outputs() {
    let dir = tempdir().unwrap();
    let textures = write_inputs(dir.path(), 16, 16);
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        ..OutputTargets::default()
    };

    let report = grass_tint::tint_files(&textures, 0.8, 0.4, &outputs).unwrap();

    assert_eq!(report.colour.0, [200, 100, 50]);
    assert_eq!(report.top, dir.path().join("out/grass_block_top_0.8_0.4.png"));
    assert_eq!(report.side, dir.path().join("out/grass_block_side_0.8_0.4.png"));

    let top = image::open(&report.top).unwrap().to_rgba8();
    assert_eq!(top.dimensions(), (16, 16));
    assert!(top.pixels().all(|p| p.0 == [100, 50, 25, 255]));

    let side = image::open(&report.side).unwrap().to_rgba8();
    assert_eq!(side.get_pixel(0, 0).0, [200, 100, 50, 255]);
    assert_eq!(side.get_pixel(0, 15).0, [120, 80, 40, 255]);
}

#[test]
fn test_explicit_output_paths() {
    let dir = tempdir().unwrap();
    let textures = write_inputs(dir.path(), 16, 16);
    let outputs = OutputTargets {
        dir: dir.path().join("unused"),
        top: Some(dir.path().join("nested/a/top.png")),
        side: Some(dir.path().join("side.out.png")),
    };

    let report = grass_tint::tint_files(&textures, 1.0, 1.0, &outputs).unwrap();

    assert!(report.top.is_file());
    assert!(report.side.is_file());
    assert!(!dir.path().join("unused").exists());
}

#[test]
fn test_dimension_mismatch_writes_nothing() {
    let dir = tempdir().unwrap();
    let textures = write_inputs(dir.path(), 512, 256);
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        ..OutputTargets::default()
    };

    let err = grass_tint::tint_files(&textures, 0.5, 0.5, &outputs).unwrap_err();

    match err {
        TintError::DimensionMismatch {
            expected_width,
            expected_height,
            width,
            height,
            ..
        } => {
            assert_eq!((expected_width, expected_height), (512, 512));
            assert_eq!((width, height), (256, 256));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_invalid_coordinate_checked_before_io() {
    let dir = tempdir().unwrap();
    // none of these files exist
    let textures = TextureSet {
        top: dir.path().join("missing_top.png"),
        side_overlay: dir.path().join("missing_overlay.png"),
        side_base: dir.path().join("missing_side.png"),
        colormap: dir.path().join("missing_colormap.png"),
    };
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        ..OutputTargets::default()
    };

    let err = grass_tint::tint_files(&textures, 1.5, 0.5, &outputs).unwrap_err();
    assert!(matches!(
        err,
        TintError::InvalidCoordinate { name: "temperature", .. }
    ));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_missing_input_reports_path() {
    let dir = tempdir().unwrap();
    let mut textures = write_inputs(dir.path(), 16, 16);
    textures.colormap = dir.path().join("nope.png");
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        ..OutputTargets::default()
    };

    let err = grass_tint::tint_files(&textures, 0.5, 0.5, &outputs).unwrap_err();
    assert!(matches!(err, TintError::Read { .. }));
    assert!(err.to_string().contains("nope.png"));
}

#[test]
fn test_same_output_path_rejected() {
    let dir = tempdir().unwrap();
    let textures = write_inputs(dir.path(), 16, 16);
    let shared = dir.path().join("out/both.png");
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        top: Some(shared.clone()),
        side: Some(shared.clone()),
    };

    let err = grass_tint::tint_files(&textures, 0.5, 0.5, &outputs).unwrap_err();
    assert!(matches!(err, TintError::OutputCollision { ref path } if *path == shared));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_failed_side_write_removes_top() {
    let dir = tempdir().unwrap();
    let textures = write_inputs(dir.path(), 16, 16);
    // a directory where the side file should go makes its write fail
    let side = dir.path().join("side_is_a_dir");
    std::fs::create_dir(&side).unwrap();
    let top = dir.path().join("top_out.png");
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        top: Some(top.clone()),
        side: Some(side.clone()),
    };

    let err = grass_tint::tint_files(&textures, 0.5, 0.5, &outputs).unwrap_err();
    assert!(matches!(err, TintError::Write { ref path, .. } if *path == side));
    assert!(!top.exists());
    assert!(side.is_dir());
}

#[test]
fn test_failed_top_write_leaves_nothing() {
    let dir = tempdir().unwrap();
    let textures = write_inputs(dir.path(), 16, 16);
    let top = dir.path().join("top_is_a_dir");
    std::fs::create_dir(&top).unwrap();
    let side = dir.path().join("side_out.png");
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        top: Some(top.clone()),
        side: Some(side.clone()),
    };

    let err = grass_tint::tint_files(&textures, 0.5, 0.5, &outputs).unwrap_err();
    assert!(matches!(err, TintError::Write { ref path, .. } if *path == top));
    assert!(top.is_dir());
    assert!(!side.exists());
}

#[test]
fn test_wrong_colormap_size() {
    let dir = tempdir().unwrap();
    let textures = write_inputs(dir.path(), 16, 16);
    write_png(&textures.colormap, &RgbaImage::new(128, 128));
    let outputs = OutputTargets {
        dir: dir.path().join("out"),
        ..OutputTargets::default()
    };

    let err = grass_tint::tint_files(&textures, 0.5, 0.5, &outputs).unwrap_err();
    assert!(matches!(err, TintError::DimensionMismatch { what: "colormap", .. }));
}

proptest! {
    #[test]
    fn prop_indices_stay_in_bounds(t in 0.0f64..=1.0, d in 0.0f64..=1.0) {
        let (x, y) = colormap_coordinates(BiomeCoordinate::new(t, d).unwrap());
        prop_assert!(x <= 255);
        prop_assert!(y <= 255);
        // adjusted downfall never exceeds temperature: always in the lower-left triangle
        prop_assert!(y >= x);
    }
}
