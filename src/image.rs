//! Icon file reading and displayable scratch-file handles.
//!
//! Two conversions: a picked file becomes a binary buffer plus MIME type
//! ([`read_image`]), and a stored buffer becomes a file on disk that an image
//! viewer can open ([`IconStore::create`]). Scratch files are the one
//! manually managed resource in the system — a handle that is never passed to
//! [`IconStore::release`] leaves its file behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A picked icon file read into memory.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub buffer: Vec<u8>,
    pub mime_type: String,
}

/// Read an icon file into a binary buffer, guessing the MIME type from the
/// file extension.
pub async fn read_image(path: &Path) -> Result<ImageData> {
    let buffer = tokio::fs::read(path).await?;
    Ok(ImageData {
        buffer,
        mime_type: mime_for_path(path).to_string(),
    })
}

/// MIME type for a file path, by extension. Unknown extensions fall back to
/// `application/octet-stream`.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        "image/x-icon" => "ico",
        "image/bmp" => "bmp",
        _ => "bin",
    }
}

/// A displayable reference to icon bytes materialized on disk.
#[derive(Debug)]
pub struct IconHandle {
    id: u64,
    path: PathBuf,
}

impl IconHandle {
    /// Location of the scratch file while the handle is live.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Materializes icon blobs as scratch files under a fixed directory.
///
/// There is no automatic cleanup: callers release handles explicitly, and an
/// unreleased handle's file stays on disk after the process exits.
pub struct IconStore {
    dir: PathBuf,
    next_id: u64,
    live: HashMap<u64, PathBuf>,
}

impl IconStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_id: 1,
            live: HashMap::new(),
        }
    }

    /// Write the buffer to a fresh scratch file and return its handle.
    pub fn create(&mut self, buffer: &[u8], mime_type: &str) -> Result<IconHandle> {
        std::fs::create_dir_all(&self.dir)?;

        let id = self.next_id;
        self.next_id += 1;

        let path = self
            .dir
            .join(format!("icon-{id}.{}", extension_for_mime(mime_type)));
        std::fs::write(&path, buffer)?;
        self.live.insert(id, path.clone());

        Ok(IconHandle { id, path })
    }

    /// Delete the handle's scratch file. Releasing an already-released handle
    /// is a no-op.
    pub fn release(&mut self, handle: IconHandle) -> Result<()> {
        if let Some(path) = self.live.remove(&handle.id) {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Number of handles that have not been released.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_guessing_covers_common_extensions() {
        assert_eq!(mime_for_path(Path::new("logo.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("logo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(
            mime_for_path(Path::new("mystery")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn read_image_returns_buffer_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"not-a-real-png").unwrap();

        let data = read_image(&path).await.unwrap();
        assert_eq!(data.buffer, b"not-a-real-png");
        assert_eq!(data.mime_type, "image/png");
    }

    #[tokio::test]
    async fn read_image_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_image(&dir.path().join("absent.png")).await;
        assert!(result.is_err());
    }

    #[test]
    fn create_then_release_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = IconStore::new(dir.path());

        let handle = store.create(b"\x89PNG", "image/png").unwrap();
        assert!(handle.path().exists());
        assert_eq!(store.live_count(), 1);

        let path = handle.path().to_path_buf();
        store.release(handle).unwrap();
        assert!(!path.exists());
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn unreleased_handles_leave_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = {
            let mut store = IconStore::new(dir.path());
            let handle = store.create(b"bytes", "image/png").unwrap();
            handle.path().to_path_buf()
            // store dropped with the handle still live
        };
        assert!(path.exists());
    }
}
