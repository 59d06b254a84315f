//! Clinical decision-support core for single-prediction diabetes screening.
//!
//! Eight physiological measurements go in, one pre-trained model is
//! selected, and a binary diagnostic label comes out. The crate covers the
//! model registry (directory discovery of heterogeneous serialized
//! artifacts), the inference dispatcher (one scalar score regardless of
//! model family), and the two-page session state machine that carries the
//! input from the home page to the result page. Presentation is left to the
//! caller; [`render_home`]/[`render_result`] produce plain view structs.
//!
//! # Basic Usage
//!
//! ```rust
//! use diascreen::{
//!     handle_predict, FeatureVector, ModelRegistry, SelectionError, SessionState,
//! };
//!
//! // A missing directory is a valid empty-registry state, not an error.
//! let registry = ModelRegistry::discover_and_load("does/not/exist");
//! assert!(registry.is_empty());
//!
//! let mut state = SessionState::new();
//! let input = FeatureVector::new([2.0, 130.0, 70.0, 20.0, 80.0, 28.5, 0.35, 33.0]);
//!
//! // With no models the predict transition is refused and the session
//! // stays on the home page.
//! let refused = handle_predict(&mut state, &registry, input, None);
//! assert_eq!(refused.unwrap_err(), SelectionError::EmptyRegistry);
//! ```

pub mod app;
pub mod features;
pub mod i18n;
pub mod inference;
pub mod model;
pub mod registry;
mod runtime;
pub mod session;

pub use app::{
    evaluate_result, handle_predict, render_home, render_result, HomeView, PredictError,
    ResultView,
};
pub use features::{FeatureCountError, FeatureVector, FEATURE_COUNT, FEATURE_KEYS};
pub use i18n::t;
pub use inference::{
    predict, predict_score, Diagnosis, InferenceError, ModelOutput, Prediction,
    DIAGNOSIS_THRESHOLD,
};
pub use model::{LoadError, ModelEntry, ModelFormat, ModelHandle, NeuralModel, TabularModel};
pub use registry::ModelRegistry;
pub use session::{Language, Page, SelectionError, SessionState, Theme};

pub fn init_logger() {
    env_logger::init();
}
