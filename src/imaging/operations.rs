//! High-level image operations.
//!
//! These functions combine calculations with backend execution. They take
//! configuration, compute parameters, decide whether work is needed at all,
//! and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::fit_within;
use super::params::{Sharpening, ThumbnailParams};
use crate::config::ThumbnailsConfig;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Configuration for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Edge of the bounding square.
    pub box_size: u32,
    /// Center the scaled image on a transparent canvas `box_size` tall.
    pub pad_to_box: bool,
    /// Regenerate when the source is newer than an existing thumbnail.
    pub refresh_stale: bool,
    pub sharpening: Option<Sharpening>,
}

impl ThumbnailConfig {
    pub fn from_site_config(config: &ThumbnailsConfig) -> Self {
        Self {
            box_size: config.box_size,
            pad_to_box: config.pad_to_box,
            refresh_stale: config.refresh_stale,
            sharpening: config.sharpen.then(Sharpening::light),
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self::from_site_config(&ThumbnailsConfig::default())
    }
}

/// What happened to a thumbnail during this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailStatus {
    Generated,
    Reused,
}

/// Plan a thumbnail operation without executing it.
pub fn plan_thumbnail(
    source: &Path,
    output: &Path,
    source_dims: (u32, u32),
    config: &ThumbnailConfig,
) -> ThumbnailParams {
    let (width, height) = fit_within(source_dims, config.box_size);

    ThumbnailParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
        canvas_height: config.pad_to_box.then_some(config.box_size),
        sharpening: config.sharpening,
    }
}

/// Make sure a thumbnail exists at `output`.
///
/// An existing file is reused as-is unless `force` is set, or
/// `refresh_stale` is enabled and the source was modified after it.
pub fn ensure_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    source_dims: (u32, u32),
    config: &ThumbnailConfig,
    force: bool,
) -> Result<ThumbnailStatus> {
    if !force && output.exists() && !(config.refresh_stale && is_stale(source, output)?) {
        return Ok(ThumbnailStatus::Reused);
    }

    let params = plan_thumbnail(source, output, source_dims, config);
    backend.thumbnail(&params)?;
    Ok(ThumbnailStatus::Generated)
}

fn is_stale(source: &Path, output: &Path) -> Result<bool> {
    let source_modified = fs::metadata(source)?.modified()?;
    let thumb_modified = fs::metadata(output)?.modified()?;
    Ok(source_modified > thumb_modified)
}
