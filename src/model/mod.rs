//! Model handles and loaders for the two supported artifact families.

mod neural;
mod tabular;

pub use neural::NeuralModel;
pub use tabular::{Standardizer, TabularModel};

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use crate::features::FeatureVector;
use crate::inference::{InferenceError, ModelOutput};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unsupported model extension: {0}")]
    UnsupportedExtension(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed estimator artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to load network archive: {0}")]
    Session(#[from] ort::Error),
    #[error("estimator has {found} parameters per feature row, expected {expected}")]
    FeatureCount { expected: usize, found: usize },
}

/// The two recognized artifact families, classified by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Serialized classical estimator (`.json`).
    Tabular,
    /// Neural-network archive (`.onnx`).
    Neural,
}

impl ModelFormat {
    /// Classifies a file by extension; `None` for anything unrecognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(OsStr::to_str)?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(ModelFormat::Tabular),
            "onnx" => Some(ModelFormat::Neural),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFormat::Tabular => "tabular",
            ModelFormat::Neural => "neural",
        }
    }
}

/// A usable model of either family.
#[derive(Debug)]
pub enum ModelHandle {
    Tabular(TabularModel),
    Neural(NeuralModel),
}

impl ModelHandle {
    /// Family-specific inference, producing the family's native output
    /// shape. The family tag was fixed at load time, so no probing of the
    /// returned value is ever needed.
    pub fn raw_predict(&self, features: &FeatureVector) -> Result<ModelOutput, InferenceError> {
        match self {
            ModelHandle::Tabular(model) => Ok(model.raw_predict(features)),
            ModelHandle::Neural(model) => model.raw_predict(features),
        }
    }
}

/// One loaded model: file name (the registry key), family tag, and handle.
/// Immutable once loaded; lives until process shutdown.
#[derive(Debug)]
pub struct ModelEntry {
    pub name: String,
    pub format: ModelFormat,
    pub handle: ModelHandle,
}

impl ModelEntry {
    /// Loads a single artifact with the deserialization strategy matching
    /// its extension.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let format = ModelFormat::from_path(path).ok_or_else(|| {
            LoadError::UnsupportedExtension(
                path.extension()
                    .and_then(OsStr::to_str)
                    .unwrap_or_default()
                    .to_string(),
            )
        })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let handle = match format {
            ModelFormat::Tabular => ModelHandle::Tabular(TabularModel::load(path)?),
            ModelFormat::Neural => ModelHandle::Neural(NeuralModel::load(path)?),
        };

        Ok(ModelEntry {
            name,
            format,
            handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_classification() {
        assert_eq!(
            ModelFormat::from_path(Path::new("models/logreg.json")),
            Some(ModelFormat::Tabular)
        );
        assert_eq!(
            ModelFormat::from_path(Path::new("models/mlp.onnx")),
            Some(ModelFormat::Neural)
        );
        // Case-insensitive, like the artifacts exported on Windows hosts.
        assert_eq!(
            ModelFormat::from_path(Path::new("models/MLP.ONNX")),
            Some(ModelFormat::Neural)
        );
        assert_eq!(ModelFormat::from_path(Path::new("models/readme.txt")), None);
        assert_eq!(ModelFormat::from_path(Path::new("models/noext")), None);
    }

    #[test]
    fn test_load_rejects_unrecognized_extension() {
        let result = ModelEntry::load(Path::new("somewhere/notes.txt"));
        assert!(matches!(result, Err(LoadError::UnsupportedExtension(ext)) if ext == "txt"));
    }
}
