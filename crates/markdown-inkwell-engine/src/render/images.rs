use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolves an image reference from the document to a readable file.
///
/// The render pipeline only calls this in Preview mode and turns every
/// error into a visible placeholder.
pub trait ImageResolver {
    fn resolve(&self, path: &str) -> Result<PathBuf, ImageError>;
}

/// Resolves relative references against a base directory on disk.
#[derive(Debug, Clone)]
pub struct FsImageResolver {
    base_dir: PathBuf,
}

impl FsImageResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn set_base_dir(&mut self, base_dir: impl Into<PathBuf>) {
        self.base_dir = base_dir.into();
    }

    /// Absolute references are used as-is; anything else is joined onto the base.
    pub fn full_path(&self, path: &str) -> PathBuf {
        let as_path = Path::new(path);
        if as_path.is_absolute() {
            as_path.to_path_buf()
        } else {
            RelativePath::new(path).to_path(&self.base_dir)
        }
    }
}

impl ImageResolver for FsImageResolver {
    fn resolve(&self, path: &str) -> Result<PathBuf, ImageError> {
        let full = self.full_path(path);
        let meta = fs::metadata(&full).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ImageError::NotFound(full.clone()),
            _ => ImageError::Unreadable {
                path: full.clone(),
                source,
            },
        })?;
        if !meta.is_file() {
            return Err(ImageError::NotAFile(full));
        }
        File::open(&full).map_err(|source| ImageError::Unreadable {
            path: full.clone(),
            source,
        })?;
        Ok(full)
    }
}
