//! Filename classification for the `<ident>_fr_` / `<ident>_bk_` convention.
//!
//! Every file in a sheet directory that belongs to a variant starts with the
//! variant identifier followed by a side marker:
//!
//! ```text
//! blue_fr_01.jpg     → variant "blue", front, image
//! blue_fr_01.txt     → variant "blue", front, attribution sidecar
//! blue_bk_main.png   → variant "blue", back, image
//! bluered_fr_01.jpg  → variant "bluered" (not "blue": the marker must follow the ident)
//! ```
//!
//! Classification is purely by prefix and extension; file contents are never
//! inspected here.

use std::fmt;

/// One of the two printable sides of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    /// Filename marker that follows the variant identifier.
    pub fn marker(self) -> &'static str {
        match self {
            Side::Front => "_fr_",
            Side::Back => "_bk_",
        }
    }

    /// Full filename prefix for a variant on this side.
    pub fn prefix(self, ident: &str) -> String {
        format!("{}{}", ident, self.marker())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Front => f.write_str("Front"),
            Side::Back => f.write_str("Back"),
        }
    }
}

/// What a matching file contributes to a variant side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Image,
    Attribution,
}

/// Result of classifying a filename against a variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub side: Side,
    pub kind: EntryKind,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "webp"];

/// Classify `filename` for the variant `ident`.
///
/// Returns `None` if the file does not carry either side prefix, or if it has
/// an extension that is neither a sidecar (`.txt`) nor a supported image.
pub fn classify(filename: &str, ident: &str) -> Option<Classified> {
    let side = [Side::Front, Side::Back]
        .into_iter()
        .find(|side| filename.starts_with(&side.prefix(ident)))?;

    let ext = extension(filename)?.to_ascii_lowercase();
    let kind = if ext == "txt" {
        EntryKind::Attribution
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        EntryKind::Image
    } else {
        return None;
    };

    Some(Classified { side, kind })
}

/// Everything before the last `.`, or the whole name if there is none.
pub fn stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos > 0 => &filename[..pos],
        _ => filename,
    }
}

fn extension(filename: &str) -> Option<&str> {
    match filename.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < filename.len() => Some(&filename[pos + 1..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_image() {
        assert_eq!(
            classify("blue_fr_01.jpg", "blue"),
            Some(Classified {
                side: Side::Front,
                kind: EntryKind::Image
            })
        );
    }

    #[test]
    fn back_attribution() {
        assert_eq!(
            classify("blue_bk_01.txt", "blue"),
            Some(Classified {
                side: Side::Back,
                kind: EntryKind::Attribution
            })
        );
    }

    #[test]
    fn extension_is_case_insensitive() {
        let c = classify("white_fr_scan.JPG", "white").unwrap();
        assert_eq!(c.kind, EntryKind::Image);
    }

    #[test]
    fn longer_ident_does_not_match_shorter() {
        assert_eq!(classify("bluered_fr_01.jpg", "blue"), None);
        assert!(classify("bluered_fr_01.jpg", "bluered").is_some());
    }

    #[test]
    fn unrelated_files_ignored() {
        assert_eq!(classify("thumbs", "blue"), None);
        assert_eq!(classify("notes.txt", "blue"), None);
        assert_eq!(classify("blue_fr_01.psd", "blue"), None);
        assert_eq!(classify("blue_fr_", "blue"), None);
    }

    #[test]
    fn side_display_and_prefix() {
        assert_eq!(Side::Front.to_string(), "Front");
        assert_eq!(Side::Back.to_string(), "Back");
        assert_eq!(Side::Back.prefix("black"), "black_bk_");
    }

    #[test]
    fn stem_strips_last_extension() {
        assert_eq!(stem("x_fr_a.jpg"), "x_fr_a");
        assert_eq!(stem("x_fr_a.jpg.txt"), "x_fr_a.jpg");
        assert_eq!(stem("noext"), "noext");
        assert_eq!(stem(".hidden"), ".hidden");
    }
}
