//! Image processing in pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Thumbnail** | fit in box (`Lanczos3`) + `unsharpen` + transparent vertical padding |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{fit_within, vertical_offset};
pub use operations::{ThumbnailConfig, ThumbnailStatus, ensure_thumbnail, get_dimensions};
pub use params::{Sharpening, ThumbnailParams};
pub use rust_backend::RustBackend;
