//! Persistent favorites store — the advisor's only durable state.
//!
//! One JSON file holds the serialized favorites list, rewritten in full on
//! every mutation. The contract is deliberately lossy on failure: a load
//! that cannot read or parse the file yields an empty list, and a failed
//! save leaves the in-memory list authoritative. Neither path ever surfaces
//! an error to the caller.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::models::CareerPath;

/// Storage contract for the favorites list.
///
/// Carried by the advisor as `Box<dyn FavoritesStore>` so tests substitute a
/// recording double for the file system.
pub trait FavoritesStore: Send + Sync {
    /// Loads the persisted favorites, or an empty list if the store is
    /// missing or unreadable.
    fn load(&self) -> Vec<CareerPath>;

    /// Persists the full favorites list. Failures are logged and swallowed.
    fn save(&self, favorites: &[CareerPath]);
}

/// File-backed store: a single JSON array, rewritten atomically on save.
pub struct JsonFavoritesStore {
    path: PathBuf,
}

impl JsonFavoritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the user data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("advisor")
            .join("favorites.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes to a tmp sibling, fsyncs, then renames over the target, so a
    /// crash mid-save never leaves a torn file behind.
    fn write_atomic(&self, content: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)
    }
}

impl FavoritesStore for JsonFavoritesStore {
    fn load(&self) -> Vec<CareerPath> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No favorites file at {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(
                    "Ignoring unreadable favorites file {}: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, favorites: &[CareerPath]) {
        let content = match serde_json::to_string_pretty(favorites) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize favorites: {e}");
                return;
            }
        };

        if let Err(e) = self.write_atomic(&content) {
            warn!("Failed to save favorites to {}: {e}", self.path.display());
        }
    }
}
