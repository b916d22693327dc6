use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Narrow file-storage seam. The database record is the source of truth
/// for "does this media exist"; implementations only move bytes.
pub trait BlobStore: Send + Sync {
    fn write(&self, filename: &str, bytes: &[u8]) -> io::Result<String>;

    /// Best-effort removal. Callers tolerate (and log) failures.
    fn delete(&self, filename: &str) -> io::Result<()>;
}

/// Local-disk store serving files from a single upload directory.
pub struct FsBlobStore {
    root: PathBuf,
    public_prefix: String,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BlobStore for FsBlobStore {
    fn write(&self, filename: &str, bytes: &[u8]) -> io::Result<String> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.root.join(filename), bytes)?;

        Ok(format!("{}/{}", self.public_prefix, filename))
    }

    fn delete(&self, filename: &str) -> io::Result<()> {
        std::fs::remove_file(self.root.join(filename))
    }
}

/// A collision-free stored filename keeping only a sanitized extension of
/// the original name.
pub fn unique_filename(original: &str) -> String {
    let extension = Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            e.chars()
                .filter(char::is_ascii_alphanumeric)
                .take(8)
                .collect::<String>()
        })
        .filter(|e| !e.is_empty());

    match extension {
        Some(ext) => format!("{}.{}", Uuid::new_v4().simple(), ext.to_lowercase()),
        None => Uuid::new_v4().simple().to_string(),
    }
}
