//! Process-wide ONNX Runtime environment.

use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::Result as OrtResult;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_onnx_environment() -> OrtResult<()> {
    ort::init().with_name("diascreen").commit()?;
    Ok(())
}

/// Initializes the ONNX Runtime environment exactly once per process.
pub fn ensure_initialized() -> OrtResult<()> {
    INIT.call_once(|| {
        init_onnx_environment().expect("Failed to initialize ONNX Runtime environment");
    });
    Ok(())
}

/// Session builder for loading network archives. Inference here is a
/// synchronous, single-row call, so one intra-op thread is enough.
pub fn create_session_builder() -> OrtResult<SessionBuilder> {
    ensure_initialized()?;
    let builder = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(1)?;
    Ok(builder)
}
