//! Cleans up the table exported from AirTable.
//!
//! The export carries symbols (trademark signs, smart quotes, byte order marks)
//! that get in the way of matching sample ids later on. Everything outside a
//! small set of characters is dropped, the rest is left untouched and in order.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{RelabelError, Result};

/// Strips every character that is not an ASCII letter or digit, whitespace,
/// `.`, `,`, `-`, `_`, or one of the Latin-1 readings of the UTF-8 BOM bytes
/// (`ï`, `»`, `¿`) that survive some exports.
///
/// Whitespace includes the information separators U+001C to U+001F.
pub fn clean_text(raw: &str) -> String {
    lazy_static! {
        static ref RE_DISALLOWED: Regex =
            Regex::new(r"[^a-zA-Z0-9\s\x{1C}-\x{1F}.,\-_\x{EF}\x{BB}\x{BF}]").unwrap();
    }
    RE_DISALLOWED.replace_all(raw, "").into_owned()
}

/// Reads the export at `source` and writes its cleaned version to `target`.
///
/// A `target` left over from an earlier run is removed before anything else,
/// so a missing `source` never leaves a stale table behind.
pub fn normalize(source: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target).map_err(|e| RelabelError::io(target, e))?;
        info!("Preexisting {} deleted.", target.display());
    }

    let raw = fs::read_to_string(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RelabelError::SourceMissing {
            path: source.to_path_buf(),
        },
        _ => RelabelError::io(source, e),
    })?;

    let cleaned = clean_text(&raw);
    debug!(
        "Dropped {} characters from {}",
        raw.chars().count() - cleaned.chars().count(),
        source.display()
    );

    fs::write(target, cleaned).map_err(|e| RelabelError::io(target, e))?;
    Ok(())
}
