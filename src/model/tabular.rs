use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::inference::ModelOutput;
use crate::model::LoadError;

/// Per-feature standardization parameters exported alongside the estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standardizer {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

/// A serialized classical estimator: logistic regression over the eight
/// screening measurements, with an optional input standardizer.
///
/// The artifact is a plain JSON document:
///
/// ```json
/// {
///   "coefficients": [0.12, 0.035, -0.01, 0.002, 0.0004, 0.09, 0.95, 0.015],
///   "intercept": -8.4,
///   "scaler": { "mean": [...], "scale": [...] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularModel {
    pub coefficients: Vec<f32>,
    pub intercept: f32,
    #[serde(default)]
    pub scaler: Option<Standardizer>,
}

impl TabularModel {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let model: TabularModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;
        info!(
            "Loaded estimator {} ({} coefficients)",
            path.display(),
            model.coefficients.len()
        );
        Ok(model)
    }

    fn validate(&self) -> Result<(), LoadError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(LoadError::FeatureCount {
                expected: FEATURE_COUNT,
                found: self.coefficients.len(),
            });
        }
        if let Some(scaler) = &self.scaler {
            for found in [scaler.mean.len(), scaler.scale.len()] {
                if found != FEATURE_COUNT {
                    return Err(LoadError::FeatureCount {
                        expected: FEATURE_COUNT,
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    /// Scalar probability for one input row. Estimators expose their score
    /// directly, unlike the batched network outputs.
    pub fn raw_predict(&self, features: &FeatureVector) -> ModelOutput {
        let mut z = self.intercept;
        for (i, &value) in features.as_slice().iter().enumerate() {
            let value = match &self.scaler {
                Some(scaler) => (value - scaler.mean[i]) / scaler.scale[i],
                None => value,
            };
            z += self.coefficients[i] * value;
        }
        ModelOutput::Scalar(sigmoid(z))
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}
