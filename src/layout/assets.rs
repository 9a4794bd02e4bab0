//! Read-only access to logo bytes.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use tracing::warn;

use super::page::RasterImage;
use crate::core::FakturaError;

/// Resolves an asset reference (path, key) to raw bytes. `None` means
/// "not found"; the engine then renders without the asset.
///
/// Only logos are loaded through this trait. Text is always set in the
/// built-in Helvetica pair; font files are never requested.
pub trait AssetLoader: Send + Sync {
    fn load(&self, reference: &str) -> Option<Vec<u8>>;
}

/// Loader that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetLoader for NoAssets {
    fn load(&self, _reference: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Loads assets from files below a root directory. References that are
/// absolute or climb out of the root are refused.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let relative = Path::new(reference);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if reference.is_empty() || !contained {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, reference: &str) -> Option<Vec<u8>> {
        let Some(path) = self.resolve(reference) else {
            warn!(reference, "asset reference outside the asset root");
            return None;
        };
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "asset not readable");
                None
            }
        }
    }
}

/// In-memory assets keyed by reference.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reference: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.entries.insert(reference.into(), bytes);
        self
    }
}

impl AssetLoader for MemoryAssets {
    fn load(&self, reference: &str) -> Option<Vec<u8>> {
        self.entries.get(reference).cloned()
    }
}

/// Decode PNG/JPEG/... bytes into an RGB raster. Transparency is dropped.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, FakturaError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| FakturaError::Asset(format!("cannot decode image: {e}")))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    if width == 0 || height == 0 {
        return Err(FakturaError::Asset("image has no pixels".into()));
    }
    Ok(RasterImage {
        width,
        height,
        rgb: rgb.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_loader_refuses_escapes() {
        let loader = FsAssetLoader::new("/srv/assets");
        assert!(loader.resolve("../etc/passwd").is_none());
        assert!(loader.resolve("/etc/passwd").is_none());
        assert!(loader.resolve("").is_none());
        assert_eq!(
            loader.resolve("logos/acme.png"),
            Some(PathBuf::from("/srv/assets/logos/acme.png"))
        );
    }

    #[test]
    fn missing_file_is_none() {
        let loader = FsAssetLoader::new(std::env::temp_dir());
        assert!(loader.load("qrfaktura-does-not-exist.png").is_none());
    }

    #[test]
    fn memory_assets() {
        let assets = MemoryAssets::new().with("logo", vec![1, 2, 3]);
        assert_eq!(assets.load("logo"), Some(vec![1, 2, 3]));
        assert!(assets.load("other").is_none());
        assert!(NoAssets.load("logo").is_none());
    }

    #[test]
    fn garbage_is_not_an_image() {
        assert!(matches!(
            decode_image(b"not an image"),
            Err(FakturaError::Asset(_))
        ));
    }
}
