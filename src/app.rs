//! Page controller for the two-page navigation machine.
//!
//! Event handlers mutate the session state; rendering is a pure function of
//! the state plus the read-only registry. The controller itself holds no
//! state of its own; every render re-derives its view from scratch.

use log::warn;
use thiserror::Error;

use crate::features::{FeatureVector, FEATURE_KEYS};
use crate::i18n::t;
use crate::inference::{self, InferenceError, Prediction};
use crate::registry::ModelRegistry;
use crate::session::{SelectionError, SessionState, Theme};

/// Failures raised by an explicit user action on the result page. Unlike
/// load-time failures these are always surfaced; the user keeps the back
/// navigation either way.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model '{0}' is no longer available")]
    ModelNotFound(String),
    #[error("no pending input to evaluate")]
    NoPendingInput,
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl PredictError {
    pub fn translation_key(&self) -> &'static str {
        match self {
            PredictError::ModelNotFound(_) => "model_missing",
            PredictError::NoPendingInput | PredictError::Inference(_) => "prediction_failed",
        }
    }
}

/// The predict event on the home page.
///
/// Guard: the registry must hold at least one model and one must be
/// selected. If the guard refuses, the state is left untouched on `Home`
/// and the error is surfaced there. On success the pending pair is written
/// and the machine moves to `Result`.
pub fn handle_predict(
    state: &mut SessionState,
    registry: &ModelRegistry,
    input: FeatureVector,
    selection: Option<&str>,
) -> Result<(), SelectionError> {
    if registry.is_empty() {
        return Err(SelectionError::EmptyRegistry);
    }
    let model = selection.ok_or(SelectionError::NoModelSelected)?;
    state.submit_prediction(input, model);
    Ok(())
}

/// Resolves the pending pair against the registry and runs the dispatcher.
///
/// Reads the session state without consuming it, so rendering stays pure;
/// the pair is discarded when the user navigates back.
pub fn evaluate_result(
    state: &SessionState,
    registry: &ModelRegistry,
) -> Result<Prediction, PredictError> {
    let (input, model) = state.pending().ok_or(PredictError::NoPendingInput)?;
    let entry = registry
        .get(model)
        .ok_or_else(|| PredictError::ModelNotFound(model.to_string()))?;
    Ok(inference::predict(entry, input)?)
}

/// Everything the presentation layer needs to draw the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub title: String,
    pub description: String,
    pub select_model_label: String,
    pub model_names: Vec<String>,
    pub input_header: String,
    pub field_labels: Vec<String>,
    pub predict_label: String,
    pub theme: Theme,
}

pub fn render_home(state: &SessionState, registry: &ModelRegistry) -> HomeView {
    let lang = state.language();
    HomeView {
        title: t(lang, "title"),
        description: t(lang, "description"),
        select_model_label: t(lang, "select_model"),
        model_names: registry.names().iter().map(|s| s.to_string()).collect(),
        input_header: t(lang, "input_header"),
        field_labels: FEATURE_KEYS.iter().map(|key| t(lang, key)).collect(),
        predict_label: t(lang, "predict"),
        theme: state.theme(),
    }
}

/// Everything the presentation layer needs to draw the result page:
/// either a localized verdict plus the raw score, or a localized error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub title: String,
    pub verdict: Option<String>,
    pub score: Option<f32>,
    pub error: Option<String>,
    pub back_label: String,
    pub theme: Theme,
}

pub fn render_result(state: &SessionState, registry: &ModelRegistry) -> ResultView {
    let lang = state.language();
    let (verdict, score, error) = match evaluate_result(state, registry) {
        Ok(prediction) => (
            Some(t(lang, prediction.diagnosis.translation_key())),
            Some(prediction.score),
            None,
        ),
        Err(e) => {
            warn!("Result page could not produce a prediction: {}", e);
            (None, None, Some(t(lang, e.translation_key())))
        }
    };

    ResultView {
        title: t(lang, "result_title"),
        verdict,
        score,
        error,
        back_label: t(lang, "back"),
        theme: state.theme(),
    }
}
