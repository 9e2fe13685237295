//! End-to-end test: config file on disk → catalog → thumbnails → index.html.
//!
//! Drives the library the same way the `build` command does, against a
//! content tree of synthetic JPEGs in a temp directory.

use image::{ImageEncoder, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use variant_catalog::catalog::{BuildOptions, Catalog};
use variant_catalog::config;
use variant_catalog::imaging::RustBackend;
use variant_catalog::render;

const CATALOG_TOML: &str = r#"
title = "NTAE Packaging"

[[sheets]]
directory = "00_cover"
name = "Cover"

[[sheets.variants]]
ident = "clear"
description = "Clear Transparency"

[[sheets]]
directory = "01_branches_bones"
name = "01. Branches & Bones"

[[sheets.variants]]
ident = "blue"
description = "Blue with black text"

[[sheets.variants]]
ident = "white"
description = "White with black text"
"#;

fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    });
    let file = fs::File::create(path).unwrap();
    image::codecs::jpeg::JpegEncoder::new(std::io::BufWriter::new(file))
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn content_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join(config::CONFIG_FILENAME), CATALOG_TOML).unwrap();

    let cover = root.join("00_cover");
    fs::create_dir(&cover).unwrap();
    write_jpeg(&cover.join("clear_fr_01.jpg"), 600, 400);
    write_jpeg(&cover.join("clear_bk_01.jpg"), 400, 600);
    fs::write(
        cover.join("clear_fr_01.txt"),
        "Photo: A. Photographer\nPrinted by: Press Co\n",
    )
    .unwrap();

    let track = root.join("01_branches_bones");
    fs::create_dir(&track).unwrap();
    write_jpeg(&track.join("blue_fr_01.jpg"), 320, 320);

    tmp
}

fn build(root: &Path) -> (Catalog, String) {
    let site_config = config::load_config(root).unwrap();
    let options = BuildOptions::from_site_config(&site_config, false);
    let catalog = Catalog::build(root, &site_config, &RustBackend::new(), &options).unwrap();
    let output = root.join(&site_config.output);
    render::write_page(&catalog, &site_config, &output, "June 1, 2025").unwrap();
    let html = fs::read_to_string(output).unwrap();
    (catalog, html)
}

#[test]
fn page_lists_sheets_in_order_with_descriptions() {
    let tmp = content_tree();
    let (_, html) = build(tmp.path());

    let cover = html.find("<h2>Cover</h2>").expect("cover heading");
    let track = html
        .find("<h2>01. Branches &amp; Bones</h2>")
        .expect("track heading");
    assert!(cover < track);

    assert!(html.contains("Clear Transparency"));
    assert!(html.contains("Blue with black text"));
    assert!(html.contains("White with black text"));
    assert!(html.contains("Last updated June 1, 2025"));
    assert!(html.contains("<title>NTAE Packaging</title>"));
}

#[test]
fn page_links_images_and_thumbnails_relative_to_root() {
    let tmp = content_tree();
    let (_, html) = build(tmp.path());

    assert!(html.contains(r#"href="00_cover/clear_fr_01.jpg""#));
    assert!(html.contains(r#"src="00_cover/thumbs/clear_fr_01.jpg.png""#));
    assert!(html.contains(r#"src="01_branches_bones/thumbs/blue_fr_01.jpg.png""#));
    assert!(html.contains("A. Photographer"));
    assert!(html.contains("600×400"));
}

#[test]
fn thumbnails_fit_box_with_centered_padding() {
    let tmp = content_tree();
    build(tmp.path());

    let wide = image::open(tmp.path().join("00_cover/thumbs/clear_fr_01.jpg.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(wide.dimensions(), (200, 200));
    // 600x400 scales to 200x133, leaving transparent bands above and below
    assert_eq!(wide.get_pixel(100, 0)[3], 0);
    assert_eq!(wide.get_pixel(100, 199)[3], 0);
    assert_eq!(wide.get_pixel(100, 100)[3], 255);

    let tall = image::open(tmp.path().join("00_cover/thumbs/clear_bk_01.jpg.png")).unwrap();
    assert_eq!((tall.width(), tall.height()), (133, 200));

    let square = image::open(tmp.path().join("01_branches_bones/thumbs/blue_fr_01.jpg.png"))
        .unwrap();
    assert_eq!((square.width(), square.height()), (200, 200));
}

#[test]
fn second_build_reuses_thumbnails() {
    let tmp = content_tree();
    let (first, _) = build(tmp.path());
    assert_eq!(first.generated_count(), 3);

    let thumb = tmp.path().join("00_cover/thumbs/clear_fr_01.jpg.png");
    let before = fs::read(&thumb).unwrap();

    let (second, _) = build(tmp.path());
    assert_eq!(second.generated_count(), 0);
    assert_eq!(second.image_count(), 3);
    assert_eq!(fs::read(&thumb).unwrap(), before);
}

#[test]
fn catalog_serializes_to_json() {
    let tmp = content_tree();
    let (catalog, _) = build(tmp.path());

    let json: serde_json::Value = serde_json::to_value(&catalog).unwrap();
    let cover = &json["sheets"][0];
    assert_eq!(cover["name"], "Cover");
    let front = &cover["variants"][0]["front"][0];
    assert_eq!(front["filename"], "clear_fr_01.jpg");
    assert_eq!(front["width"], 600);
    assert_eq!(front["attributions"][0]["key"], "Photo");
    assert_eq!(front["attributions"][1]["value"], "Press Co");
}
