//! # Variant Catalog
//!
//! A static catalog generator for physical album packaging. Every printed
//! sheet of an album (envelope, cover, one page per track, credits) exists in
//! several color or print variants, and each variant is photographed front
//! and back. This crate turns a directory of those photographs into a single
//! browsable HTML page.
//!
//! # Architecture: Scan → Thumbnail → Render
//!
//! ```text
//! 1. Scan       catalog.toml + sheet dirs  →  plan     (filenames classified, nothing decoded)
//! 2. Thumbnail  plan                       →  Catalog  (dimensions, sizes, thumbs/*.png)
//! 3. Render     Catalog                    →  index.html
//! ```
//!
//! The whole run is one synchronous pass. Any error aborts it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Catalog model (sheet → variant → image), directory planning and loading |
//! | [`naming`] | `<ident>_fr_` / `<ident>_bk_` filename convention and entry classification |
//! | [`attribution`] | `key: value` sidecar parsing and sidecar-to-image matching |
//! | [`imaging`] | Pure-Rust thumbnailing behind the [`imaging::ImageBackend`] trait |
//! | [`config`] | `catalog.toml` loading, validation, stock defaults, and color CSS |
//! | [`render`] | Single-page HTML rendering with Maud |
//! | [`units`] | Human-readable byte sizes |
//! | [`output`] | CLI output formatting for build and check reports |
//!
//! # Design Decisions
//!
//! ## The Catalog Lives in Config
//!
//! Which sheets exist, their display names, and which variants each one was
//! printed in are declared in `catalog.toml` as ordered `[[sheets]]` and
//! `[[sheets.variants]]` tables. The filesystem only supplies photographs.
//! Order in the file is order on the page.
//!
//! ## Sidecars Match by Name
//!
//! An attribution file belongs to the image whose name it shares
//! (`clear_fr_01.txt` or `clear_fr_01.jpg.txt` for `clear_fr_01.jpg`), so
//! directory listing order never decides which photo gets the credit. A sidecar
//! that matches no image is reported, not fatal.
//!
//! ## PNG Thumbnails
//!
//! Thumbnails are scaled to fit a square box without upscaling, then centered
//! vertically on a transparent canvas of the box height so every row lines up.
//! Transparency needs an alpha channel, so thumbnails are always PNG and named
//! after the full source filename (`thumbs/clear_fr_01.jpg.png`). An existing
//! thumbnail is reused, so a second build leaves the `thumbs/` directories
//! byte-identical.

pub mod attribution;
pub mod catalog;
pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod render;
pub mod units;

#[cfg(test)]
pub(crate) mod test_helpers;
