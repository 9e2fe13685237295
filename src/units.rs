//! Human-readable byte sizes.

const SUFFIXES: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with a binary suffix, truncating to whole units.
///
/// ```
/// # use variant_catalog::units::human_size;
/// assert_eq!(human_size(0), "0 B");
/// assert_eq!(human_size(1536), "1 KB");
/// assert_eq!(human_size(2_097_152), "2 MB");
/// ```
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes;
    let mut idx = 0;
    while value >= 1024 && idx < SUFFIXES.len() - 1 {
        value /= 1024;
        idx += 1;
    }
    format!("{} {}", value, SUFFIXES[idx])
}
