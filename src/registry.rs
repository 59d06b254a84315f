//! Startup discovery of serialized model artifacts.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::model::{ModelEntry, ModelFormat};

/// All successfully loaded prediction models, keyed by file name.
///
/// Built by one directory scan at startup and immutable afterwards, so it
/// can be read from any number of sessions without locking. Consumers must
/// treat the mapping as unordered; [`names`](ModelRegistry::names) sorts
/// for stable presentation.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    entries: HashMap<String, ModelEntry>,
}

impl ModelRegistry {
    /// Scans `dir` and loads every recognized artifact it can.
    ///
    /// This never fails. A missing directory yields an empty registry, and
    /// a corrupt artifact is dropped while its siblings keep loading; a
    /// broken model file must never take application startup down with it.
    pub fn discover_and_load<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let mut entries = HashMap::new();

        let listing = match fs::read_dir(dir) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(
                    "Model directory {} is not readable ({}); starting with no models",
                    dir.display(),
                    e
                );
                return Self { entries };
            }
        };

        for dirent in listing.flatten() {
            let path = dirent.path();
            if !path.is_file() {
                continue;
            }

            match ModelFormat::from_path(&path) {
                None => {
                    debug!("Skipping {} (unrecognized extension)", path.display());
                }
                Some(_) => match ModelEntry::load(&path) {
                    Ok(entry) => {
                        entries.insert(entry.name.clone(), entry);
                    }
                    Err(e) => {
                        warn!("Failed to load model {}: {}; skipping", path.display(), e);
                    }
                },
            }
        }

        info!("Loaded {} models from {}", entries.len(), dir.display());
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.get(name)
    }

    /// Model names sorted lexicographically, independent of directory
    /// iteration order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.values()
    }

    /// Default artifact directory.
    pub fn default_models_dir() -> PathBuf {
        // 1. Explicit override
        if let Ok(path) = env::var("DIASCREEN_MODELS") {
            return PathBuf::from(path);
        }

        // 2. A models/ directory next to the working directory
        let local = PathBuf::from("models");
        if local.is_dir() {
            return local;
        }

        // 3. Platform cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("diascreen").join("models");
        }

        local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_yields_empty_registry() {
        let registry = ModelRegistry::discover_and_load("definitely/not/a/real/path");
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_default_models_dir_env_override() {
        env::set_var("DIASCREEN_MODELS", "/tmp/diascreen-test-models");
        let dir = ModelRegistry::default_models_dir();
        assert_eq!(dir, PathBuf::from("/tmp/diascreen-test-models"));
        env::remove_var("DIASCREEN_MODELS");
    }
}
