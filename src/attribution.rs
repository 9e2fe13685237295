//! Attribution sidecar files.
//!
//! An attribution file is plain text, one `key: value` pair per line:
//!
//! ```text
//! Photo: Jane Doe
//! Source: https://example.org/thread/1234
//! ```
//!
//! Lines are split on the first `": "`, so values may themselves contain
//! colons (URLs). A line without the separator is kept as a bare note with no
//! value. Blank lines are skipped.
//!
//! A sidecar belongs to an image by name, not by position in the directory
//! listing: for `x_fr_a.jpg` both `x_fr_a.txt` and `x_fr_a.jpg.txt` match.

use crate::naming;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// A single line of attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Parse attribution text into entries.
pub fn parse(content: &str) -> Vec<Attribution> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(": ") {
            Some((key, value)) => Attribution {
                key: key.trim().to_string(),
                value: Some(value.trim().to_string()),
            },
            None => Attribution {
                key: line.to_string(),
                value: None,
            },
        })
        .collect()
}

/// Read and parse an attribution file.
pub fn read(path: &Path) -> io::Result<Vec<Attribution>> {
    Ok(parse(&fs::read_to_string(path)?))
}

/// Whether `sidecar` annotates `image_filename`.
pub fn annotates(sidecar: &str, image_filename: &str) -> bool {
    let target = naming::stem(sidecar);
    target == image_filename || target == naming::stem(image_filename)
}
