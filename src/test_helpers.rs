//! Shared test utilities for the variant-catalog test suite.
//!
//! Provides synthetic image writers, sheet directory builders, and catalog
//! lookups that panic with a clear message on a miss.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_sheet(tmp.path(), "00_cover", &[("clear_fr_01.jpg", 400, 300)]);
//!
//! let mut config = SiteConfig::default();
//! config.sheets = vec![sheet_config("00_cover", "Cover", &[("clear", "Clear")])];
//! ```

use image::{ImageEncoder, RgbImage};
use std::path::Path;

use crate::catalog::{Catalog, Sheet, Variant};
use crate::config::{SheetConfig, VariantConfig};

// =========================================================================
// Synthetic images
// =========================================================================

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a sheet directory under `root` holding JPEGs of the given sizes.
pub fn write_sheet(root: &Path, directory: &str, images: &[(&str, u32, u32)]) {
    let dir = root.join(directory);
    std::fs::create_dir_all(&dir).unwrap();
    for (name, width, height) in images {
        create_test_jpeg(&dir.join(name), *width, *height);
    }
}

/// Build a sheet config entry from `(ident, description)` pairs.
pub fn sheet_config(directory: &str, name: &str, variants: &[(&str, &str)]) -> SheetConfig {
    SheetConfig {
        directory: directory.to_string(),
        name: name.to_string(),
        variants: variants
            .iter()
            .map(|(ident, description)| VariantConfig {
                ident: ident.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

// =========================================================================
// Catalog lookups (panic with a clear message on miss)
// =========================================================================

/// Find a sheet by display name. Panics if not found.
pub fn find_sheet<'a>(catalog: &'a Catalog, name: &str) -> &'a Sheet {
    catalog
        .sheets
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = catalog.sheets.iter().map(|s| s.name.as_str()).collect();
            panic!("sheet '{name}' not found. Available: {names:?}")
        })
}

/// Find a variant by ident within a sheet. Panics if not found.
pub fn find_variant<'a>(sheet: &'a Sheet, ident: &str) -> &'a Variant {
    sheet
        .variants
        .iter()
        .find(|v| v.ident == ident)
        .unwrap_or_else(|| {
            let idents: Vec<&str> = sheet.variants.iter().map(|v| v.ident.as_str()).collect();
            panic!(
                "variant '{ident}' not found in sheet '{}'. Available: {idents:?}",
                sheet.name
            )
        })
}

/// Front image filenames of a variant, in order.
pub fn front_filenames(variant: &Variant) -> Vec<&str> {
    variant.front.iter().map(|i| i.filename.as_str()).collect()
}
