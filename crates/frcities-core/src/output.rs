//! Writes the dictionary: one name per line, LF-terminated, UTF-8, no BOM.
//!
//! Lines go to `<output>.part` first, which is synced, closed, and then
//! renamed over the destination, so a failed write never leaves a truncated
//! dictionary behind.

use crate::error::GeneratorError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sibling temp path used while writing (`fr_cities.txt` -> `fr_cities.txt.part`).
pub fn part_path(output: &Path) -> PathBuf {
    let mut name: OsString = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    output.with_file_name(name)
}

/// Replace `output` with `names`, in iteration order. Returns the number of lines written.
pub fn write_lines<'a, I>(output: &Path, names: I) -> Result<usize, GeneratorError>
where
    I: IntoIterator<Item = &'a String>,
{
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
    }

    let part = part_path(output);
    let written = match write_part(&part, names) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&part);
            return Err(GeneratorError::io(&part, e));
        }
    };

    if let Err(e) = fs::rename(&part, output) {
        let _ = fs::remove_file(&part);
        return Err(GeneratorError::io(output, e));
    }
    Ok(written)
}

fn write_part<'a, I>(part: &Path, names: I) -> std::io::Result<usize>
where
    I: IntoIterator<Item = &'a String>,
{
    let file = File::create(part)?;
    let mut w = BufWriter::new(file);
    let mut n = 0;
    for name in names {
        w.write_all(name.as_bytes())?;
        w.write_all(b"\n")?;
        n += 1;
    }
    let file = w.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn part_path_appends_suffix() {
        assert_eq!(
            part_path(Path::new("src/main/resources/fr_cities.txt")),
            PathBuf::from("src/main/resources/fr_cities.txt.part")
        );
    }

    #[test]
    fn writes_one_name_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fr_cities.txt");
        let n = write_lines(&out, &set(&["Paris", "Lyon"])).unwrap();
        assert_eq!(n, 2);
        assert_eq!(fs::read_to_string(&out).unwrap(), "Lyon\nParis\n");
        assert!(!part_path(&out).exists());
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fr_cities.txt");
        fs::write(&out, "Ancienne\nListe\nPlus\nLongue\n").unwrap();
        write_lines(&out, &set(&["Nice"])).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "Nice\n");
    }

    #[test]
    fn empty_set_gives_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fr_cities.txt");
        assert_eq!(write_lines(&out, &BTreeSet::<String>::new()).unwrap(), 0);
        assert_eq!(fs::read(&out).unwrap(), b"");
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("src/main/resources/fr_cities.txt");
        write_lines(&out, &set(&["Albi"])).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "Albi\n");
    }

    #[test]
    fn utf8_without_bom() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fr_cities.txt");
        write_lines(&out, &set(&["Évreux"])).unwrap();
        assert_eq!(fs::read(&out).unwrap(), "Évreux\n".as_bytes());
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory sits where the file should go; the rename fails.
        let out = dir.path().join("taken");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("keep"), "x").unwrap();
        let err = write_lines(&out, &set(&["Pau"])).unwrap_err();
        assert!(matches!(err, GeneratorError::Io { .. }));
        assert!(!part_path(&out).exists());
    }
}
