use ndarray::{arr2, Array2};
use thiserror::Error;

/// Number of physiological measurements in one screening input.
pub const FEATURE_COUNT: usize = 8;

/// Translation keys for the eight measurements, in wire order.
///
/// The order is fixed by the trained models and must never change:
/// pregnancies, glucose, blood pressure, skin thickness, insulin, BMI,
/// diabetes pedigree function, age.
pub const FEATURE_KEYS: [&str; FEATURE_COUNT] = [
    "pregnancies",
    "glucose",
    "bp",
    "skin",
    "insulin",
    "bmi",
    "dpf",
    "age",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {FEATURE_COUNT} features, got {found}")]
pub struct FeatureCountError {
    pub found: usize,
}

/// One screening input: exactly eight numeric measurements in the fixed
/// order of [`FEATURE_KEYS`].
///
/// Range constraints on individual fields are a presentation concern; any
/// numeric octuple is accepted here.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// The single-row batch the model runtimes consume (shape `[1, 8]`).
    pub fn to_row(&self) -> Array2<f32> {
        arr2(&[self.0])
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f32]> for FeatureVector {
    type Error = FeatureCountError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let fixed: [f32; FEATURE_COUNT] = values
            .try_into()
            .map_err(|_| FeatureCountError { found: values.len() })?;
        Ok(Self(fixed))
    }
}
