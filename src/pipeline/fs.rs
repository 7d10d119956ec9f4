//! File system helpers for installing build artifacts.

use std::{io, path::Path};
use tokio::fs;

use super::error::{Error, ErrorExt, Result};

/// Removes a file if it exists.
///
/// Returns whether a file was removed; a missing file is not an error.
pub async fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).fs_context("removing previous artifact", path),
    }
}

/// Replaces `to` with a byte-for-byte copy of `from`.
///
/// Any existing file at `to` is deleted first and the destination's parent
/// directories are created. Fails with the source path if `from` is missing
/// or is not a regular file.
pub async fn replace_file(from: &Path, to: &Path) -> Result<u64> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading build artifact", from)?;
    if !metadata.is_file() {
        return Err(Error::Fs {
            context: "build artifact is not a file",
            path: from.to_path_buf(),
            error: io::Error::new(io::ErrorKind::InvalidInput, "expected a regular file"),
        });
    }

    if remove_file_if_exists(to).await? {
        log::debug!("Removed previous {}", to.display());
    }
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating artifact destination directory", parent)?;
    }

    fs::copy(from, to)
        .await
        .fs_context("copying build artifact to", to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replaces_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("src.a");
        let to = dir.path().join("out/dest.a");
        std::fs::write(&from, b"new library").unwrap();
        std::fs::create_dir_all(to.parent().unwrap()).unwrap();
        std::fs::write(&to, b"a much longer stale library body").unwrap();

        let copied = replace_file(&from, &to).await.unwrap();

        assert_eq!(copied, 11);
        assert_eq!(std::fs::read(&to).unwrap(), b"new library");
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("src.a");
        let to = dir.path().join("a/b/dest.a");
        std::fs::write(&from, b"lib").unwrap();

        replace_file(&from, &to).await.unwrap();
        assert_eq!(std::fs::read(&to).unwrap(), b"lib");
    }

    #[tokio::test]
    async fn missing_source_keeps_destination_and_names_source() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("missing.a");
        let to = dir.path().join("dest.a");
        std::fs::write(&to, b"old").unwrap();

        let err = replace_file(&from, &to).await.unwrap_err();

        assert!(err.to_string().contains("missing.a"));
        assert_eq!(std::fs::read(&to).unwrap(), b"old");
    }

    #[tokio::test]
    async fn directory_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = replace_file(dir.path(), &dir.path().join("dest.a"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fs { .. }));
    }

    #[tokio::test]
    async fn removing_absent_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!remove_file_if_exists(&dir.path().join("nope")).await.unwrap());
    }
}
