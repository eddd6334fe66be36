//! Media library: file name resolution inside the media root and directory
//! scanning for the catalog.
//!
//! The library holds no state beyond the root path. Existence, sizes, and
//! directory contents are read from the filesystem on every call, so the
//! catalog always reflects the directory as it is right now.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use matinee_core::{media, Error, Result};

/// A file name resolved to a real file inside the media root.
#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    /// Root-joined path to the file.
    pub path: PathBuf,
    /// File size in bytes at resolution time.
    pub len: u64,
}

/// One playable entry discovered by [`MediaLibrary::scan`].
#[derive(Debug, Clone, Serialize)]
pub struct LibraryEntry {
    /// File name inside the media root.
    pub file_name: String,
    /// Display title: the file name without its extension.
    pub title: String,
    /// Thumbnail file name, when the companion `<base>thumbnail.png` exists.
    pub thumbnail: Option<String>,
}

/// Filesystem-backed media library rooted at a single directory.
#[derive(Debug)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The directory this library serves from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a client-supplied file name to a file inside the root.
    ///
    /// Only plain file names are accepted. Anything that could step outside
    /// the root (separators, `..`, absolute paths) gets the same `NotFound`
    /// as a missing file, so probing cannot tell the two apart.
    pub async fn resolve(&self, name: &str) -> Result<ResolvedMedia> {
        if !is_plain_file_name(name) {
            return Err(Error::not_found("file", name));
        }

        let path = self.root.join(name);
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|_| Error::not_found("file", name))?;
        if !metadata.is_file() {
            return Err(Error::not_found("file", name));
        }

        Ok(ResolvedMedia {
            path,
            len: metadata.len(),
        })
    }

    /// List playable media files directly inside the root.
    ///
    /// Subdirectories and files without a recognized media extension are
    /// skipped. Order follows directory enumeration and is not guaranteed
    /// stable across runs.
    pub async fn scan(&self) -> Result<Vec<LibraryEntry>> {
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|source| Error::LibraryUnavailable { source })?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|source| Error::LibraryUnavailable { source })?
        {
            let file_type = match entry.file_type().await {
                Ok(ft) => ft,
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry in {}: {e}", self.root.display());
                    continue;
                }
            };
            if !file_type.is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str().map(String::from) else {
                tracing::debug!("Skipping non-UTF-8 file name in {}", self.root.display());
                continue;
            };
            if !media::is_media_file(&file_name) {
                continue;
            }

            let thumbnail = self.existing_thumbnail(&file_name).await;
            entries.push(LibraryEntry {
                title: media::title(&file_name),
                thumbnail,
                file_name,
            });
        }

        Ok(entries)
    }

    /// The companion thumbnail name, if such a file exists next to `file_name`.
    async fn existing_thumbnail(&self, file_name: &str) -> Option<String> {
        let candidate = media::thumbnail_name(file_name);
        match tokio::fs::metadata(self.root.join(&candidate)).await {
            Ok(m) if m.is_file() => Some(candidate),
            _ => None,
        }
    }
}

/// A valid client-supplied name is exactly one normal path component.
///
/// Backslashes are rejected outright; they are path separators on Windows
/// and never appear in the names this server is meant to expose.
fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
