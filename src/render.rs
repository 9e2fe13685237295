//! HTML page generation.
//!
//! Renders the whole catalog into one static page:
//!
//! - **Header**: site title and the date the page was generated
//! - **Sheet index**: in-page links to every sheet, in catalog order
//! - **Sheet sections**: each variant with its description, then one row of
//!   thumbnails per side ("Front", and "Back" when photographed). Every
//!   thumbnail links to the full image and is captioned with its pixel
//!   dimensions, file size, and attribution lines.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.
//!
//! The stylesheet is embedded at compile time from `static/style.css`, with
//! color custom properties generated from config prepended.

use crate::attribution::Attribution;
use crate::catalog::{Catalog, Sheet, Variant, VariantImage};
use crate::config::{self, SiteConfig};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Today's date in long form, e.g. "March 4, 2025".
pub fn current_date() -> String {
    chrono::Local::now().format("%B %-d, %Y").to_string()
}

/// Render the catalog and write it to `output`, replacing any existing file.
pub fn write_page(
    catalog: &Catalog,
    config: &SiteConfig,
    output: &Path,
    generated_on: &str,
) -> Result<(), RenderError> {
    let page = render_page(catalog, config, generated_on);
    fs::write(output, page.into_string())?;
    Ok(())
}

/// Render the full catalog page.
pub fn render_page(catalog: &Catalog, config: &SiteConfig, generated_on: &str) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    let content = html! {
        header.site-header {
            h1 { (config.title) }
            p.updated { "Last updated " (generated_on) }
            (sheet_index(&catalog.sheets))
        }
        main {
            @for sheet in &catalog.sheets {
                (render_sheet(sheet))
            }
        }
    };

    base_document(&config.title, &css, content)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn sheet_index(sheets: &[Sheet]) -> Markup {
    html! {
        nav.sheet-index {
            ul {
                @for sheet in sheets {
                    li { a href={ "#" (anchor_id(&sheet.directory)) } { (sheet.name) } }
                }
            }
        }
    }
}

fn render_sheet(sheet: &Sheet) -> Markup {
    html! {
        section.sheet id=(anchor_id(&sheet.directory)) {
            h2 { (sheet.name) }
            @for variant in &sheet.variants {
                (render_variant(sheet, variant))
            }
        }
    }
}

fn render_variant(sheet: &Sheet, variant: &Variant) -> Markup {
    let id = format!("{}-{}", anchor_id(&sheet.directory), slug(&variant.ident));

    html! {
        article.variant id=(id) {
            h3 {
                (variant.description)
                " "
                span.ident { "(" (variant.ident) ")" }
            }
            @if !variant.has_front() && !variant.has_back() {
                p.no-images { "No photos yet" }
            } @else {
                @for (side, images) in variant.sides() {
                    div.side {
                        h4 { (side) }
                        @if images.is_empty() {
                            p.no-images { "No photos yet" }
                        } @else {
                            div.thumb-row {
                                @for image in images {
                                    (render_image(image))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_image(image: &VariantImage) -> Markup {
    html! {
        figure.thumb {
            a href=(url_path(&image.image_path)) {
                img src=(url_path(&image.thumb_path)) alt=(image.filename) loading="lazy";
            }
            figcaption {
                span.dims { (image.width) "×" (image.height) " · " (image.human_size()) }
                @if image.has_attributions() {
                    (render_attributions(&image.attributions))
                }
            }
        }
    }
}

fn render_attributions(attributions: &[Attribution]) -> Markup {
    html! {
        ul.attributions {
            @for entry in attributions {
                li {
                    @match &entry.value {
                        Some(value) => {
                            span.key { (entry.key) ":" }
                            " "
                            (value)
                        }
                        None => { (entry.key) }
                    }
                }
            }
        }
    }
}

/// HTML id for a sheet directory.
fn anchor_id(directory: &str) -> String {
    format!("s-{}", slug(directory))
}

/// Lowercase ASCII alphanumerics; everything else becomes `-`.
fn slug(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    slug.trim_matches('-').to_string()
}

/// Percent-encode a relative path for use in `href`/`src`, keeping `/`.
///
/// Filenames may hold `#`, `?`, `%`, spaces, or non-ASCII text, all of which
/// would otherwise change what the browser requests.
fn url_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => encoded.push(byte as char),
            b'-' | b'.' | b'_' | b'~' | b'/' => encoded.push(byte as char),
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
            | b':' | b'@' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

// ============================================================================
// Tests
// ============================================================================
