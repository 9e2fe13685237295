//! Pure calculation functions for thumbnail geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Scale `source` down to fit inside a `box_size` × `box_size` square.
///
/// Aspect ratio is preserved and images already inside the box are left at
/// their original size (never upscaled). Neither output dimension drops
/// below 1px.
///
/// # Examples
/// ```
/// # use variant_catalog::imaging::fit_within;
/// // 800x600 landscape → 200x150
/// assert_eq!(fit_within((800, 600), 200), (200, 150));
///
/// // 600x1200 portrait → 100x200
/// assert_eq!(fit_within((600, 1200), 200), (100, 200));
///
/// // Already small → unchanged
/// assert_eq!(fit_within((120, 80), 200), (120, 80));
/// ```
pub fn fit_within(source: (u32, u32), box_size: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    let longer = src_w.max(src_h);

    if longer <= box_size || longer == 0 {
        return (src_w, src_h);
    }

    let ratio = box_size as f64 / longer as f64;
    let w = ((src_w as f64 * ratio).round() as u32).clamp(1, box_size);
    let h = ((src_h as f64 * ratio).round() as u32).clamp(1, box_size);
    (w, h)
}

/// Top offset that vertically centers `content_height` on a canvas.
///
/// Odd leftovers go to the bottom edge.
pub fn vertical_offset(content_height: u32, canvas_height: u32) -> u32 {
    canvas_height.saturating_sub(content_height) / 2
}
