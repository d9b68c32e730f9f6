//! Python source discovery — one recursive glob under the scan root.

use anyhow::{ensure, Context, Result};
use std::path::{Path, PathBuf};

/// Find every `.py` file below `root`, at any nesting depth.
///
/// Hidden and ignored directories are not filtered. The result is sorted
/// so that output file names map deterministically to inputs.
pub fn find_python_files(root: &Path) -> Result<Vec<PathBuf>> {
    ensure!(
        root.is_dir(),
        "scan root is not a directory: {}",
        root.display()
    );

    let pattern = format!("{}/**/*.py", root.display());
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid scan pattern: {}", pattern))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                eprintln!("warning: skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_nested_python_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();
        fs::create_dir_all(dir.path().join("sub/deep")).unwrap();
        fs::write(dir.path().join("sub/b.py"), "y = 2\n").unwrap();
        fs::write(dir.path().join("sub/deep/c.py"), "z = 3\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not python\n").unwrap();

        let files = find_python_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.py", "sub/b.py", "sub/deep/c.py"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(find_python_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(find_python_files(&gone).is_err());
    }
}
