//! File handling around the extraction engine: locating the input snapshot,
//! reading its bytes, and writing the JSON artifact beside it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Resolve an input path. Relative paths are joined onto `files_dir` when
/// one is given. Fails with [`Error::DocumentNotFound`] if nothing exists
/// at the resolved location.
pub fn resolve_input(path: &Path, files_dir: Option<&Path>) -> Result<PathBuf> {
    let resolved = match files_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    };

    if resolved.is_file() {
        Ok(resolved)
    } else {
        Err(Error::DocumentNotFound(resolved))
    }
}

/// Read the raw bytes of a document.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::DocumentNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })
}

/// Write text to a file, replacing any existing content.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

/// Artifact location for an input: same directory, same base name with
/// `suffix` appended, `.json` extension.
///
/// ```rust
/// use std::path::Path;
/// use rs_kc_carousel::storage::output_path_for;
///
/// assert_eq!(
///     output_path_for(Path::new("files/dog-breeds.html"), "-actual"),
///     Path::new("files/dog-breeds-actual.json")
/// );
/// ```
#[must_use]
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{stem}{suffix}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_directory() {
        assert_eq!(
            output_path_for(Path::new("/tmp/snapshots/van-gogh-paintings.html"), "-actual"),
            PathBuf::from("/tmp/snapshots/van-gogh-paintings-actual.json")
        );
    }

    #[test]
    fn output_path_without_extension() {
        assert_eq!(
            output_path_for(Path::new("page"), "-out"),
            PathBuf::from("page-out.json")
        );
    }

    #[test]
    fn resolve_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = resolve_input(Path::new("absent.html"), Some(dir.path()));
        match result {
            Err(Error::DocumentNotFound(path)) => assert_eq!(path, dir.path().join("absent.html")),
            other => panic!("expected DocumentNotFound, got {other:?}"),
        }
    }

    #[test]
    fn resolve_relative_against_files_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("a.html"), "<html></html>").expect("write");

        let resolved = resolve_input(Path::new("a.html"), Some(dir.path())).expect("resolve");
        assert_eq!(resolved, dir.path().join("a.html"));
    }

    #[test]
    fn resolve_absolute_ignores_files_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("b.html");
        fs::write(&file, "<html></html>").expect("write");

        let resolved = resolve_input(&file, Some(Path::new("/nonexistent"))).expect("resolve");
        assert_eq!(resolved, file);
    }

    #[test]
    fn directories_are_not_documents() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            resolve_input(dir.path(), None),
            Err(Error::DocumentNotFound(_))
        ));
    }

    #[test]
    fn read_and_write_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");

        write_text(&path, "[]").expect("write");
        assert_eq!(read_bytes(&path).expect("read"), b"[]");
    }

    #[test]
    fn read_missing_is_document_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            read_bytes(&dir.path().join("nope.html")),
            Err(Error::DocumentNotFound(_))
        ));
    }
}
