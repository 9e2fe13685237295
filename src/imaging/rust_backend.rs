//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header only, no full decode) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Sharpening | `image::imageops::unsharpen` |
//! | Padding | `image::imageops::overlay` onto a transparent `RgbaImage` |
//! | Encode | PNG (keeps the transparent padding) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::vertical_offset;
use super::params::ThumbnailParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk. The file handle is dropped on return.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

fn save_png(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    img.save_with_format(path, ImageFormat::Png).map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to write {}: {}", path.display(), e))
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        let scaled = if (img.width(), img.height()) == (params.width, params.height) {
            img
        } else {
            img.resize_exact(params.width, params.height, FilterType::Lanczos3)
        };

        let sharpened = match params.sharpening {
            Some(s) => DynamicImage::from(image::imageops::unsharpen(&scaled, s.sigma, s.threshold)),
            None => scaled,
        };

        let final_img = match params.canvas_height {
            Some(canvas_height) => {
                let mut canvas = RgbaImage::new(params.width, canvas_height);
                let top = vertical_offset(params.height, canvas_height);
                image::imageops::overlay(&mut canvas, &sharpened.to_rgba8(), 0, top as i64);
                DynamicImage::ImageRgba8(canvas)
            }
            None => sharpened,
        };

        save_png(&final_img, &params.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Sharpening;
    use crate::test_helpers::create_test_jpeg;

    #[test]
    fn identify_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 200, 150);

        let backend = RustBackend::new();
        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let backend = RustBackend::new();
        let result = backend.identify(Path::new("/nonexistent/image.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn identify_garbage_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("fake.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(RustBackend::new().identify(&path).is_err());
    }

    #[test]
    fn thumbnail_padded_landscape_is_centered() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 800, 400);

        let output = tmp.path().join("thumb.png");
        RustBackend::new()
            .thumbnail(&ThumbnailParams {
                source,
                output: output.clone(),
                width: 200,
                height: 100,
                canvas_height: Some(200),
                sharpening: Some(Sharpening::light()),
            })
            .unwrap();

        let thumb = image::open(&output).unwrap().to_rgba8();
        assert_eq!(thumb.dimensions(), (200, 200));
        // 50px transparent band above and below the content
        assert_eq!(thumb.get_pixel(100, 10)[3], 0);
        assert_eq!(thumb.get_pixel(100, 190)[3], 0);
        assert_eq!(thumb.get_pixel(100, 100)[3], 255);
        assert_eq!(thumb.get_pixel(100, 50)[3], 255);
        assert_eq!(thumb.get_pixel(100, 49)[3], 0);
    }

    #[test]
    fn thumbnail_unpadded_keeps_fit_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 300, 600);

        let output = tmp.path().join("thumb.png");
        RustBackend::new()
            .thumbnail(&ThumbnailParams {
                source,
                output: output.clone(),
                width: 100,
                height: 200,
                canvas_height: None,
                sharpening: None,
            })
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (100, 200));
    }

    #[test]
    fn thumbnail_small_source_not_resized() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("small.jpg");
        create_test_jpeg(&source, 40, 20);

        let output = tmp.path().join("thumb.png");
        RustBackend::new()
            .thumbnail(&ThumbnailParams {
                source,
                output: output.clone(),
                width: 40,
                height: 20,
                canvas_height: Some(200),
                sharpening: None,
            })
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (40, 200));
    }

    #[test]
    fn thumbnail_missing_source_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = RustBackend::new().thumbnail(&ThumbnailParams {
            source: tmp.path().join("missing.jpg"),
            output: tmp.path().join("thumb.png"),
            width: 10,
            height: 10,
            canvas_height: None,
            sharpening: None,
        });
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}
