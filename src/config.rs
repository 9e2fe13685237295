//! Catalog configuration module.
//!
//! Handles loading, validating, and layering `catalog.toml`. The file holds
//! both presentation settings and the catalog definition itself: which sheet
//! directories exist, what they are called, and which variants each one has.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All top-level options are optional - defaults shown below
//!
//! title = "Packaging Variants"
//! output = "index.html"     # File name, written to the content root
//!
//! [thumbnails]
//! box_size = 200            # Thumbnails fit inside box_size x box_size
//! pad_to_box = true         # Center on a transparent canvas box_size tall
//! refresh_stale = false     # Regenerate thumbnails older than their source
//! sharpen = true            # Light unsharp mask after downscaling
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! link = "#333333"
//! link_hover = "#000000"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! link = "#cccccc"
//! link_hover = "#ffffff"
//!
//! # Sheets render in the order they are listed here.
//! [[sheets]]
//! directory = "00_cover"
//! name = "Cover"
//!
//! [[sheets.variants]]
//! ident = "clear"
//! description = "Clear Transparency"
//! ```
//!
//! Config files are sparse: values not given keep their stock defaults.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the config file looked up in the content root.
pub const CONFIG_FILENAME: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `catalog.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title shown in the header and `<title>`.
    pub title: String,
    /// Output HTML file name, written to the content root.
    pub output: String,
    /// Thumbnail generation settings.
    pub thumbnails: ThumbnailsConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// The catalog: sheets in render order.
    pub sheets: Vec<SheetConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Packaging Variants".to_string(),
            output: "index.html".to_string(),
            thumbnails: ThumbnailsConfig::default(),
            colors: ColorConfig::default(),
            sheets: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thumbnails.box_size == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.box_size must be non-zero".into(),
            ));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        // Image links are relative to the content root, so the page must live there.
        let mut components = Path::new(&self.output).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) || self.output.contains('\\')
        {
            return Err(ConfigError::Validation(format!(
                "output '{}' must be a file name in the content root",
                self.output
            )));
        }
        for (idx, sheet) in self.sheets.iter().enumerate() {
            if sheet.directory.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sheets[{idx}].directory must not be empty"
                )));
            }
            if sheet.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sheets[{idx}].name must not be empty"
                )));
            }
            let mut seen = HashSet::new();
            for variant in &sheet.variants {
                if variant.ident.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "sheet '{}' has a variant with an empty ident",
                        sheet.name
                    )));
                }
                if !seen.insert(variant.ident.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "sheet '{}' lists variant '{}' more than once",
                        sheet.name, variant.ident
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One sheet of the catalog: a directory of variant photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetConfig {
    /// Directory holding the photos, relative to the content root.
    pub directory: String,
    /// Display name.
    pub name: String,
    /// Variants in render order.
    #[serde(default)]
    pub variants: Vec<VariantConfig>,
}

/// One variant of a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantConfig {
    /// Filename prefix (`<ident>_fr_*`, `<ident>_bk_*`).
    pub ident: String,
    /// Human-readable description.
    pub description: String,
}

/// Thumbnail generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    /// Thumbnails fit within a `box_size` x `box_size` square.
    pub box_size: u32,
    /// Pad thumbnails to exactly `box_size` tall, content vertically centered.
    pub pad_to_box: bool,
    /// Regenerate a thumbnail when its source file is newer.
    pub refresh_stale: bool,
    /// Apply light sharpening after downscaling.
    pub sharpen: bool,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            box_size: 200,
            pad_to_box: true,
            refresh_stale: false,
            sharpen: true,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Muted/secondary text (captions, dimensions, timestamps).
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#333333".to_string(),
            link_hover: "#000000".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#cccccc".to_string(),
            link_hover: "#ffffff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (including the `sheets` array) replace base
///   values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicitly named file, which must exist.
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    resolve_config(stock_defaults_value(), Some(toml::from_str(&content)?))
}

/// Load `catalog.toml` from the content root.
///
/// A missing file yields the stock defaults (an empty catalog).
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILENAME);
    if path.exists() {
        load_config_file(&path)
    } else {
        resolve_config(stock_defaults_value(), None)
    }
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn scheme_vars(scheme: &ColorScheme, pad: &str) -> String {
        [
            ("bg", &scheme.background),
            ("text", &scheme.text),
            ("text-muted", &scheme.text_muted),
            ("border", &scheme.border),
            ("link", &scheme.link),
            ("link-hover", &scheme.link_hover),
        ]
        .iter()
        .map(|(name, value)| format!("{pad}--color-{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}\n    }}\n}}",
        scheme_vars(&colors.light, "    "),
        scheme_vars(&colors.dark, "        "),
    )
}

/// Returns a fully-commented stock `catalog.toml`.
///
/// The catalog section is a complete worked example: the eight sheets of the
/// packaging this tool was first written for. Used by the `gen-config` command.
pub fn stock_config_toml() -> &'static str {
    r##"# Variant Catalog Configuration
# =============================
# Values shown for title/output/thumbnails/colors are the defaults.
# Unknown keys will cause an error.

# Page title.
title = "Packaging Variants"

# Output HTML file name, written to the content root. Overwritten on every build.
output = "index.html"

# ---------------------------------------------------------------------------
# Thumbnails (written to <sheet>/thumbs/<filename>.png)
# ---------------------------------------------------------------------------
[thumbnails]
# Thumbnails fit inside a box_size x box_size square (never upscaled).
box_size = 200

# Center each thumbnail on a transparent canvas exactly box_size tall so
# rows line up regardless of aspect ratio.
pad_to_box = true

# Existing thumbnails are reused. Set to true to regenerate any thumbnail
# whose source image was modified after it. `build --force` regenerates all.
refresh_stale = false

# Light unsharp mask after downscaling.
sharpen = true

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"
border = "#e0e0e0"
link = "#333333"
link_hover = "#000000"

[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
link = "#cccccc"
link_hover = "#ffffff"

# ---------------------------------------------------------------------------
# Catalog
# ---------------------------------------------------------------------------
# Sheets render in the order listed. Each variant's photos live in the sheet
# directory as <ident>_fr_<anything>.<ext> (front) and <ident>_bk_<...> (back).
# Attribution sidecars share the image name with a .txt extension, one
# "key: value" pair per line.

[[sheets]]
directory = "warning"
name = "Envelope Warning"

[[sheets.variants]]
ident = "common"
description = "Identical on all packages"

[[sheets]]
directory = "00_cover"
name = "Cover"

[[sheets.variants]]
ident = "clear"
description = "Clear Transparency"

[[sheets]]
directory = "01_branches_bones"
name = "01. Branches/Bones"

[[sheets.variants]]
ident = "blue"
description = "Blue with black text"

[[sheets.variants]]
ident = "white"
description = "White with black text"

[[sheets]]
directory = "02_dear_world"
name = "02. Dear World,"

[[sheets.variants]]
ident = "black"
description = "Black with white text"

[[sheets.variants]]
ident = "green"
description = "Green with black text"

[[sheets.variants]]
ident = "white"
description = "White with black text"

[[sheets]]
directory = "03_shes_gone_away"
name = "03. She's Gone Away"

[[sheets.variants]]
ident = "black"
description = "Black with white text"

[[sheets.variants]]
ident = "red"
description = "Red with blue text"

[[sheets]]
directory = "04_the_idea_of_you"
name = "04. The Idea of You"

[[sheets.variants]]
ident = "bluered"
description = "Blue with red text"

[[sheets.variants]]
ident = "white"
description = "White with black text"

[[sheets]]
directory = "05_burning_bright"
name = "05. Burning Bright (Field on Fire)"

[[sheets.variants]]
ident = "white"
description = "White with black text"

[[sheets.variants]]
ident = "multicolor"
description = "White with multicolored text"

[[sheets.variants]]
ident = "blackred"
description = "Black with red text"

[[sheets]]
directory = "06_credits"
name = "Credits"

[[sheets.variants]]
ident = "white"
description = "White with black text, portrait (has a faint NIN logo / Halo designation on back)"

[[sheets.variants]]
ident = "blue"
description = "Blue/Purple with white text, portrait (has a faint NIN logo / Halo designation on back)"

[[sheets.variants]]
ident = "black"
description = "Black with white text, landscape (NIN logo / Halo designation may be present but extremely faint)"
"##
}
