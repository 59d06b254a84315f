//! Normalizes heterogeneous model outputs into one scalar score and derives
//! the diagnostic label from it.

use ndarray::Array2;

use crate::features::FeatureVector;
use crate::model::ModelEntry;

/// Scores strictly above this threshold are labeled diabetic.
pub const DIAGNOSIS_THRESHOLD: f32 = 0.5;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("model output batch was empty")]
    EmptyOutput,
    #[error("unexpected model output shape {dims:?}")]
    OutputShape { dims: Vec<usize> },
    #[error("inference session failed: {0}")]
    Session(#[from] ort::Error),
}

/// What a model family natively produces for a single-row batch.
///
/// Estimators expose their score directly; network archives keep the batch
/// dimensions. The tag is decided by the loader, so collapsing to a scalar
/// never has to probe the value at call time.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    Scalar(f32),
    Batch(Array2<f32>),
}

impl ModelOutput {
    /// Collapses the output to one scalar score: a scalar passes through
    /// unchanged, a batch contributes its `[0][0]` entry.
    pub fn into_score(self) -> Result<f32, InferenceError> {
        match self {
            ModelOutput::Scalar(score) => Ok(score),
            ModelOutput::Batch(batch) => batch
                .get((0, 0))
                .copied()
                .ok_or(InferenceError::EmptyOutput),
        }
    }
}

/// Binary diagnostic label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Diabetic,
    NotDiabetic,
}

impl Diagnosis {
    /// Threshold rule: diabetic iff `score > 0.5`. The boundary score 0.5
    /// itself is not diabetic.
    pub fn from_score(score: f32) -> Self {
        if score > DIAGNOSIS_THRESHOLD {
            Diagnosis::Diabetic
        } else {
            Diagnosis::NotDiabetic
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            Diagnosis::Diabetic => "diabetic",
            Diagnosis::NotDiabetic => "not_diabetic",
        }
    }
}

/// A derived prediction: raw score plus its thresholded label. Never
/// stored; recomputed on each result render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub score: f32,
    pub diagnosis: Diagnosis,
}

/// Runs one model on one input row and returns the normalized scalar score.
///
/// The score is passed through as-is: no clamping and no validation that it
/// lies in `[0, 1]`, since uncalibrated models may legitimately produce
/// values outside that range.
pub fn predict_score(
    entry: &ModelEntry,
    features: &FeatureVector,
) -> Result<f32, InferenceError> {
    entry.handle.raw_predict(features)?.into_score()
}

/// [`predict_score`] plus label derivation.
pub fn predict(
    entry: &ModelEntry,
    features: &FeatureVector,
) -> Result<Prediction, InferenceError> {
    let score = predict_score(entry, features)?;
    Ok(Prediction {
        score,
        diagnosis: Diagnosis::from_score(score),
    })
}
