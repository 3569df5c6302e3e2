//! `frcities inspect [path]` – summarize a generated dictionary.

use anyhow::Result;
use frcities_core::{checksum, gazetteer};
use std::path::Path;

pub fn run_inspect(path: &Path, show: Option<usize>) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("no dictionary at {}", path.display());
    }
    let entries = gazetteer::load_lines(path)?;
    let digest = checksum::sha256_path(path)?;
    println!("{} entries in {}", entries.len(), path.display());
    println!("sha256 {}", digest);
    if let Some(n) = show {
        for entry in entries.iter().take(n) {
            println!("{}", entry);
        }
    }
    Ok(())
}
