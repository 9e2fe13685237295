//! Catalog model and directory scanning.
//!
//! The catalog is a strict containment tree:
//!
//! ```text
//! Catalog
//! └── Sheet            one physical page category (cover, a track, credits)
//!     └── Variant      one color/print version of that sheet
//!         ├── front    VariantImage, VariantImage, ...
//!         └── back     VariantImage, ...
//! ```
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── catalog.toml
//! ├── 00_cover/
//! │   ├── thumbs/                     # Created on first build
//! │   │   └── clear_fr_01.jpg.png
//! │   ├── clear_fr_01.jpg
//! │   ├── clear_fr_01.txt             # Attribution for clear_fr_01.jpg
//! │   └── clear_bk_01.jpg
//! └── 01_branches_bones/
//!     ├── blue_fr_01.jpg
//!     └── white_fr_01.jpg
//! ```
//!
//! Each sheet directory is listed once, sorted by filename, and every variant
//! filters that listing by its own prefix. Scanning a variant happens in two
//! steps: [`plan_variant`] classifies filenames without touching any image,
//! then loading identifies each image and makes sure its thumbnail exists.

use crate::attribution::{self, Attribution};
use crate::config::SiteConfig;
use crate::imaging::{
    BackendError, ImageBackend, ThumbnailConfig, ThumbnailStatus, ensure_thumbnail,
    get_dimensions,
};
use crate::naming::{self, EntryKind, Side};
use crate::units;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-sheet thumbnail subdirectory.
pub const THUMBS_DIR: &str = "thumbs";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image {path}: {source}")]
    Imaging {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("Sheet directory not found: {0}")]
    MissingDirectory(PathBuf),
}

/// Options that affect a single build run rather than the catalog itself.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub thumbnails: ThumbnailConfig,
    /// Regenerate every thumbnail regardless of what is on disk.
    pub force: bool,
}

impl BuildOptions {
    pub fn from_site_config(config: &SiteConfig, force: bool) -> Self {
        Self {
            thumbnails: ThumbnailConfig::from_site_config(&config.thumbnails),
            force,
        }
    }
}

// ============================================================================
// Model
// ============================================================================

/// The whole catalog, sheets in configured order.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub sheets: Vec<Sheet>,
}

/// A physical page category and its variants.
#[derive(Debug, Serialize)]
pub struct Sheet {
    /// Directory as configured, relative to the content root.
    pub directory: String,
    pub name: String,
    pub variants: Vec<Variant>,
    /// Sidecar files that matched a variant prefix but no image.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphans: Vec<String>,
    #[serde(skip)]
    paths: SheetPaths,
    #[serde(skip)]
    listing: Vec<String>,
}

/// Resolved filesystem locations of a sheet.
#[derive(Debug, Clone, Default)]
struct SheetPaths {
    dir: PathBuf,
    thumb_dir: PathBuf,
}

/// A color/print version of a sheet.
#[derive(Debug, Serialize)]
pub struct Variant {
    pub ident: String,
    pub description: String,
    pub front: Vec<VariantImage>,
    pub back: Vec<VariantImage>,
}

/// One photographed side of a variant.
#[derive(Debug, Serialize)]
pub struct VariantImage {
    pub filename: String,
    /// Image path relative to the content root.
    pub image_path: String,
    /// Thumbnail path relative to the content root.
    pub thumb_path: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributions: Vec<Attribution>,
    pub thumbnail: ThumbnailStatus,
}

impl VariantImage {
    pub fn has_attributions(&self) -> bool {
        !self.attributions.is_empty()
    }

    pub fn human_size(&self) -> String {
        units::human_size(self.size_bytes)
    }
}

impl Variant {
    /// Sides to display: front always, back only when photographed.
    pub fn sides(&self) -> Vec<(Side, &[VariantImage])> {
        let mut sides = vec![(Side::Front, self.front.as_slice())];
        if self.has_back() {
            sides.push((Side::Back, self.back.as_slice()));
        }
        sides
    }

    pub fn has_front(&self) -> bool {
        !self.front.is_empty()
    }

    pub fn has_back(&self) -> bool {
        !self.back.is_empty()
    }
}

// ============================================================================
// Planning (pure)
// ============================================================================

/// An image and the sidecars that annotate it, by filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedImage {
    pub filename: String,
    pub sidecars: Vec<String>,
}

/// Which files in a sheet listing make up a variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantPlan {
    pub front: Vec<PlannedImage>,
    pub back: Vec<PlannedImage>,
    /// Sidecars with no image of the same name on their side.
    pub orphans: Vec<String>,
}

impl VariantPlan {
    pub fn side(&self, side: Side) -> &[PlannedImage] {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }
}

/// Classify a sorted directory listing for one variant.
///
/// Sidecars are matched to images by name, so their position in the listing
/// does not matter.
pub fn plan_variant(listing: &[String], ident: &str) -> VariantPlan {
    let mut plan = VariantPlan::default();
    let mut sidecars: Vec<(Side, &str)> = Vec::new();

    for filename in listing {
        let Some(classified) = naming::classify(filename, ident) else {
            continue;
        };
        match classified.kind {
            EntryKind::Image => {
                let planned = PlannedImage {
                    filename: filename.clone(),
                    sidecars: Vec::new(),
                };
                match classified.side {
                    Side::Front => plan.front.push(planned),
                    Side::Back => plan.back.push(planned),
                }
            }
            EntryKind::Attribution => sidecars.push((classified.side, filename.as_str())),
        }
    }

    for (side, sidecar) in sidecars {
        let images = match side {
            Side::Front => &mut plan.front,
            Side::Back => &mut plan.back,
        };
        match images
            .iter_mut()
            .find(|img| attribution::annotates(sidecar, &img.filename))
        {
            Some(img) => img.sidecars.push(sidecar.to_string()),
            None => plan.orphans.push(sidecar.to_string()),
        }
    }

    plan
}

/// Plan for one configured sheet: its variants classified, nothing decoded.
#[derive(Debug, Clone)]
pub struct SheetPlan {
    pub directory: String,
    pub name: String,
    pub variants: Vec<PlannedVariant>,
}

#[derive(Debug, Clone)]
pub struct PlannedVariant {
    pub ident: String,
    pub description: String,
    pub plan: VariantPlan,
}

impl SheetPlan {
    pub fn image_count(&self) -> usize {
        self.variants
            .iter()
            .map(|v| v.plan.front.len() + v.plan.back.len())
            .sum()
    }

    pub fn orphans(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .flat_map(|v| v.plan.orphans.iter().map(String::as_str))
    }
}

/// Plan every configured sheet from directory listings alone.
///
/// Reads directories but never decodes images or writes anything, so it is
/// safe to run against a content tree that has never been built.
pub fn plan_catalog(root: &Path, config: &SiteConfig) -> Result<Vec<SheetPlan>, CatalogError> {
    config
        .sheets
        .iter()
        .map(|sheet| {
            let listing = list_directory(&root.join(&sheet.directory))?;
            let variants = sheet
                .variants
                .iter()
                .map(|v| PlannedVariant {
                    ident: v.ident.clone(),
                    description: v.description.clone(),
                    plan: plan_variant(&listing, &v.ident),
                })
                .collect();
            Ok(SheetPlan {
                directory: sheet.directory.clone(),
                name: sheet.name.clone(),
                variants,
            })
        })
        .collect()
}

/// Sorted names of the regular files in `dir`.
///
/// Symlinks count as the file they point to; dangling links are skipped.
pub fn list_directory(dir: &Path) -> Result<Vec<String>, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::MissingDirectory(dir.to_path_buf()));
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}

// ============================================================================
// Loading
// ============================================================================

impl Catalog {
    /// Build every configured sheet under `root`, in configured order.
    pub fn build(
        root: &Path,
        config: &SiteConfig,
        backend: &impl ImageBackend,
        options: &BuildOptions,
    ) -> Result<Self, CatalogError> {
        let mut sheets = Vec::with_capacity(config.sheets.len());
        for sheet_config in &config.sheets {
            let mut sheet = Sheet::open(root, &sheet_config.directory, &sheet_config.name)?;
            for variant in &sheet_config.variants {
                sheet.add_variant(&variant.ident, &variant.description, backend, options)?;
            }
            sheets.push(sheet);
        }
        Ok(Self { sheets })
    }

    pub fn image_count(&self) -> usize {
        self.sheets
            .iter()
            .flat_map(|s| &s.variants)
            .map(|v| v.front.len() + v.back.len())
            .sum()
    }

    pub fn generated_count(&self) -> usize {
        self.sheets
            .iter()
            .flat_map(|s| &s.variants)
            .flat_map(|v| v.front.iter().chain(&v.back))
            .filter(|img| img.thumbnail == ThumbnailStatus::Generated)
            .count()
    }
}

impl Sheet {
    /// Resolve the sheet directory, create its `thumbs/` subdirectory if
    /// absent, and cache the directory listing.
    pub fn open(root: &Path, directory: &str, name: &str) -> Result<Self, CatalogError> {
        let dir = root.join(directory);
        let listing = list_directory(&dir)?;
        let thumb_dir = dir.join(THUMBS_DIR);
        if !thumb_dir.exists() {
            fs::create_dir(&thumb_dir)?;
        }

        Ok(Self {
            directory: directory.to_string(),
            name: name.to_string(),
            variants: Vec::new(),
            orphans: Vec::new(),
            paths: SheetPaths { dir, thumb_dir },
            listing,
        })
    }

    /// Scan a new variant against this sheet, append it, and return it.
    pub fn add_variant(
        &mut self,
        ident: &str,
        description: &str,
        backend: &impl ImageBackend,
        options: &BuildOptions,
    ) -> Result<&Variant, CatalogError> {
        let plan = plan_variant(&self.listing, ident);
        let front = self.load_side(&plan, Side::Front, backend, options)?;
        let back = self.load_side(&plan, Side::Back, backend, options)?;
        self.orphans.extend(plan.orphans);

        self.variants.push(Variant {
            ident: ident.to_string(),
            description: description.to_string(),
            front,
            back,
        });
        Ok(&self.variants[self.variants.len() - 1])
    }

    fn load_side(
        &self,
        plan: &VariantPlan,
        side: Side,
        backend: &impl ImageBackend,
        options: &BuildOptions,
    ) -> Result<Vec<VariantImage>, CatalogError> {
        plan.side(side)
            .iter()
            .map(|planned| self.load_image(planned, backend, options))
            .collect()
    }

    fn load_image(
        &self,
        planned: &PlannedImage,
        backend: &impl ImageBackend,
        options: &BuildOptions,
    ) -> Result<VariantImage, CatalogError> {
        let image_path = self.paths.dir.join(&planned.filename);
        let thumb_name = thumbnail_filename(&planned.filename);
        let thumb_path = self.paths.thumb_dir.join(&thumb_name);

        let imaging_err = |source| CatalogError::Imaging {
            path: image_path.clone(),
            source,
        };

        let dims = get_dimensions(backend, &image_path).map_err(imaging_err)?;
        let size_bytes = fs::metadata(&image_path)?.len();
        let thumbnail = ensure_thumbnail(
            backend,
            &image_path,
            &thumb_path,
            dims,
            &options.thumbnails,
            options.force,
        )
        .map_err(imaging_err)?;

        let mut attributions = Vec::new();
        for sidecar in &planned.sidecars {
            attributions.extend(attribution::read(&self.paths.dir.join(sidecar))?);
        }

        Ok(VariantImage {
            filename: planned.filename.clone(),
            image_path: format!("{}/{}", self.directory, planned.filename),
            thumb_path: format!("{}/{}/{}", self.directory, THUMBS_DIR, thumb_name),
            width: dims.0,
            height: dims.1,
            size_bytes,
            attributions,
            thumbnail,
        })
    }
}

/// Thumbnail filename for an image: keyed by the full original filename.
pub fn thumbnail_filename(image_filename: &str) -> String {
    format!("{image_filename}.png")
}
