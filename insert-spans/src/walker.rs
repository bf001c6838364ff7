//! Directory walker for discovering markdown files

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix of file names selected for processing
const MARKDOWN_SUFFIX: &str = ".md";

/// Errors that can occur during discovery
#[derive(Debug)]
pub enum WalkerError {
    /// IO error while reading the root directory
    Io(std::io::Error),
    /// The supplied root is not a directory
    NotADirectory(PathBuf),
}

impl From<std::io::Error> for WalkerError {
    fn from(err: std::io::Error) -> Self {
        WalkerError::Io(err)
    }
}

impl std::fmt::Display for WalkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkerError::Io(e) => write!(f, "IO error: {}", e),
            WalkerError::NotADirectory(path) => {
                write!(f, "'{}' is not a valid directory", path.display())
            }
        }
    }
}

impl std::error::Error for WalkerError {}

/// Check that `root` exists and is a directory
pub fn ensure_directory(root: &Path) -> Result<(), WalkerError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(WalkerError::NotADirectory(root.to_path_buf()))
    }
}

/// Recursively collect all `*.md` files under `root`
///
/// Entries are visited in file-name order within each directory. Entries
/// below the root that cannot be read are logged and skipped; failing to
/// read the root itself is an error.
pub fn find_markdown_files(root: &Path) -> Result<Vec<PathBuf>, WalkerError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(std::io::Error::other(e).into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // Symlinked files are followed; symlinked directories are not descended
        if entry.path().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    log::debug!(
        "Discovered {} markdown file(s) under {}",
        files.len(),
        root.display()
    );
    Ok(files)
}

/// Whether the file name ends in `.md`, including a file named just `.md`
fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(MARKDOWN_SUFFIX.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_markdown_recursively() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("guide/advanced")).unwrap();
        fs::write(root.join("index.md"), "# Index").unwrap();
        fs::write(root.join("guide/intro.md"), "# Intro").unwrap();
        fs::write(root.join("guide/advanced/deep.md"), "# Deep").unwrap();
        fs::write(root.join("guide/notes.txt"), "not markdown").unwrap();
        fs::write(root.join("README.MD"), "upper-case extension").unwrap();

        let files = find_markdown_files(root).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("guide/advanced/deep.md"),
                PathBuf::from("guide/intro.md"),
                PathBuf::from("index.md"),
            ]
        );
    }

    #[test]
    fn test_matches_bare_md_file_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(".md"), "hidden").unwrap();
        fs::write(temp_dir.path().join("notes.mdx"), "not markdown").unwrap();

        let files = find_markdown_files(temp_dir.path()).unwrap();
        assert_eq!(files, vec![temp_dir.path().join(".md")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_symlinked_files_but_not_directories() {
        use std::os::unix::fs::symlink;

        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("docs");
        let outside = temp_dir.path().join("outside");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(root.join("real.txt"), "A\n\nB\n\nC").unwrap();
        fs::write(outside.join("other.md"), "elsewhere").unwrap();
        symlink(root.join("real.txt"), root.join("link.md")).unwrap();
        symlink(&outside, root.join("linked-dir")).unwrap();

        let files = find_markdown_files(&root).unwrap();
        assert_eq!(files, vec![root.join("link.md")]);
    }

    #[test]
    fn test_skips_directories_named_like_markdown() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("chapter.md")).unwrap();

        let files = find_markdown_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_ensure_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("page.md");
        fs::write(&file, "text").unwrap();

        assert!(ensure_directory(temp_dir.path()).is_ok());
        assert!(matches!(
            ensure_directory(&file),
            Err(WalkerError::NotADirectory(_))
        ));
        assert!(matches!(
            ensure_directory(&temp_dir.path().join("missing")),
            Err(WalkerError::NotADirectory(_))
        ));
    }
}
