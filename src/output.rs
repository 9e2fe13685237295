//! CLI output formatting for the build and check commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Sheets and variants
//! lead with a positional index and their display name; directories and
//! idents follow as secondary context. Images are identified by filename
//! since that is what carries their variant and side.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 Cover (3 photos)
//!     Source: 00_cover/
//!     001 Clear Transparency (clear)
//!         Front
//!             001 clear_fr_01.jpg 4032×3024 · 2 MB
//!                 Attributions: 2
//!                 Thumbnail: generated
//!         Back
//!             001 clear_bk_01.jpg 4032×3024 · 1 MB
//!                 Thumbnail: reused
//!     Warning: orphan sidecar clear_fr_02.txt
//!
//! Built 1 sheet, 2 photos (1 thumbnail generated) → index.html
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 Cover (3 photos)
//!     Source: 00_cover/
//!     001 Clear Transparency (clear): 2 front, 1 back
//!     Warning: orphan sidecar clear_fr_02.txt
//!
//! Checked 1 sheet, 3 photos, 1 orphan sidecar
//! ==> Content is usable with 1 warning
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::catalog::{Catalog, SheetPlan, VariantImage};
use crate::imaging::ThumbnailStatus;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a sheet header: positional index + name + photo count.
///
/// ```text
/// 001 Cover (3 photos)
/// 002 Credits (1 photo)
/// ```
fn sheet_header(index: usize, name: &str, photos: usize) -> String {
    format!("{} {} ({})", format_index(index), name, plural(photos, "photo"))
}

/// `1 photo`, `2 photos`.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn image_line(index: usize, image: &VariantImage) -> String {
    format!(
        "{} {} {}×{} · {}",
        format_index(index),
        image.filename,
        image.width,
        image.height,
        image.human_size()
    )
}

fn status_label(status: ThumbnailStatus) -> &'static str {
    match status {
        ThumbnailStatus::Generated => "generated",
        ThumbnailStatus::Reused => "reused",
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the build report: every sheet, variant, and image with its
/// thumbnail status, followed by a summary line naming the output file.
pub fn format_build_output(catalog: &Catalog, output: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for (s, sheet) in catalog.sheets.iter().enumerate() {
        let photos: usize = sheet
            .variants
            .iter()
            .map(|v| v.front.len() + v.back.len())
            .sum();
        lines.push(sheet_header(s + 1, &sheet.name, photos));
        lines.push(format!("{}Source: {}/", indent(1), sheet.directory));

        for (v, variant) in sheet.variants.iter().enumerate() {
            lines.push(format!(
                "{}{} {} ({})",
                indent(1),
                format_index(v + 1),
                variant.description,
                variant.ident
            ));
            if !variant.has_front() && !variant.has_back() {
                lines.push(format!("{}No photos", indent(2)));
                continue;
            }
            for (side, images) in variant.sides() {
                lines.push(format!("{}{}", indent(2), side));
                for (i, image) in images.iter().enumerate() {
                    lines.push(format!("{}{}", indent(3), image_line(i + 1, image)));
                    if image.has_attributions() {
                        lines.push(format!(
                            "{}Attributions: {}",
                            indent(4),
                            image.attributions.len()
                        ));
                    }
                    lines.push(format!(
                        "{}Thumbnail: {}",
                        indent(4),
                        status_label(image.thumbnail)
                    ));
                }
            }
        }

        for orphan in &sheet.orphans {
            lines.push(format!("{}Warning: orphan sidecar {}", indent(1), orphan));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Built {}, {} ({} generated) \u{2192} {}",
        plural(catalog.sheets.len(), "sheet"),
        plural(catalog.image_count(), "photo"),
        plural(catalog.generated_count(), "thumbnail"),
        output
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(catalog: &Catalog, output: &str) {
    for line in format_build_output(catalog, output) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the check report from sheet plans: per-variant front/back counts
/// and orphan sidecar warnings.
pub fn format_check_output(plans: &[SheetPlan]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut orphan_total = 0;

    for (s, sheet) in plans.iter().enumerate() {
        lines.push(sheet_header(s + 1, &sheet.name, sheet.image_count()));
        lines.push(format!("{}Source: {}/", indent(1), sheet.directory));

        for (v, variant) in sheet.variants.iter().enumerate() {
            lines.push(format!(
                "{}{} {} ({}): {} front, {} back",
                indent(1),
                format_index(v + 1),
                variant.description,
                variant.ident,
                variant.plan.front.len(),
                variant.plan.back.len()
            ));
        }

        for orphan in sheet.orphans() {
            orphan_total += 1;
            lines.push(format!("{}Warning: orphan sidecar {}", indent(1), orphan));
        }
    }

    let photos: usize = plans.iter().map(SheetPlan::image_count).sum();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Checked {}, {}, {}",
        plural(plans.len(), "sheet"),
        plural(photos, "photo"),
        plural(orphan_total, "orphan sidecar")
    ));

    lines
}

/// Final line of `check`: clean, or how many warnings were printed above.
pub fn format_check_verdict(plans: &[SheetPlan]) -> String {
    let warnings: usize = plans.iter().map(|p| p.orphans().count()).sum();
    if warnings == 0 {
        "==> Content is valid".to_string()
    } else {
        format!("==> Content is usable with {}", plural(warnings, "warning"))
    }
}

/// Print check output to stdout.
pub fn print_check_output(plans: &[SheetPlan]) {
    for line in format_check_output(plans) {
        println!("{}", line);
    }
    println!("{}", format_check_verdict(plans));
}

// ============================================================================
// Tests
// ============================================================================
