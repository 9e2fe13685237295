//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! [`operations`](super::operations), which decides which thumbnails to
//! create, and the [`backend`](super::backend), which does the pixel work.
//! Swapping the backend for a mock in tests leaves operation logic untouched.

use std::path::PathBuf;

/// Sharpening parameters for unsharp mask.
///
/// - `sigma`: Standard deviation of the Gaussian blur (higher = more sharpening)
/// - `threshold`: Minimum brightness difference to sharpen (0 = sharpen all pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sharpening {
    pub sigma: f32,
    pub threshold: i32,
}

impl Sharpening {
    /// Light sharpening suitable for downscaled thumbnails.
    pub fn light() -> Self {
        Self {
            sigma: 0.5,
            threshold: 0,
        }
    }
}

/// Parameters for a thumbnail operation (fit resize + optional padding).
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Scaled content dimensions.
    pub width: u32,
    pub height: u32,
    /// When set, the content is centered vertically on a transparent canvas
    /// of this height (canvas width = `width`).
    pub canvas_height: Option<u32>,
    pub sharpening: Option<Sharpening>,
}
