//! Protection of hand-edited files on re-runs.
//! Paths listed in `.fledgeignore` are never overwritten once they exist, similar to
//! how `.gitignore` keeps files out of version control.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Reads the ignore file and compiles its patterns.
///
/// # Arguments
/// * `ignore_path` - Path to the `.fledgeignore` file
///
/// # Returns
/// * `Result<GlobSet>` - Patterns matched against paths relative to the project root
///
/// # Notes
/// - A missing file yields an empty set
/// - Blank lines and lines starting with `#` are skipped
///
/// # Example
/// ```ignore
/// # Contents of .fledgeignore:
/// README.md
/// lib/core/theme/*.dart
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    match read_to_string(ignore_path.as_ref()) {
        Ok(contents) => {
            for line in contents.lines().map(str::trim) {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                builder.add(Glob::new(line).map_err(|e| {
                    Error::IgnoreError(format!(".fledgeignore loading failed: {e}"))
                })?);
            }
        }
        Err(_) => debug!("{} does not exist", ignore_path.as_ref().display()),
    }
    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!(".fledgeignore loading failed: {e}")))
}
