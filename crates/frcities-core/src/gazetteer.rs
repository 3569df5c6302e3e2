//! Reading a generated dictionary back, the way keyword extraction consumes it.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a newline-delimited dictionary: trimmed lines, blanks and `#` comments skipped.
/// A missing file yields an empty set.
pub fn load_lines(path: &Path) -> Result<BTreeSet<String>> {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
        Err(e) => return Err(e).with_context(|| format!("open {}", path.display())),
    };

    let mut entries = BTreeSet::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("read {}", path.display()))?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        entries.insert(entry.to_string());
    }
    Ok(entries)
}
