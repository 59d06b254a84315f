use std::collections::HashMap;
use std::path::Path;

use log::info;
use ndarray::Ix2;
use ort::session::Session;
use ort::value::Tensor;

use crate::features::FeatureVector;
use crate::inference::{InferenceError, ModelOutput};
use crate::model::LoadError;
use crate::runtime;

/// A loaded network archive: an ONNX session plus the tensor names recorded
/// at load time.
///
/// The network is expected to take one `[batch, 8]` float input and produce
/// a batched output (typically `[1, 1]` for a single sigmoid unit). The
/// batch shape is preserved here; collapsing to a scalar is the
/// dispatcher's job.
#[derive(Debug)]
pub struct NeuralModel {
    session: Session,
    input_name: String,
    output_name: String,
}

impl NeuralModel {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let session = runtime::create_session_builder()?.commit_from_file(path)?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "input".to_string());
        let output_name = session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .unwrap_or_else(|| "output".to_string());

        info!(
            "Loaded network archive {} (input={}, output={})",
            path.display(),
            input_name,
            output_name
        );

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Runs the network on a single-row batch and returns the output with
    /// its batch dimensions intact.
    pub fn raw_predict(&self, features: &FeatureVector) -> Result<ModelOutput, InferenceError> {
        let row_dyn = features.to_row().into_dyn();
        let row = row_dyn.as_standard_layout();

        let mut inputs = HashMap::new();
        inputs.insert(self.input_name.as_str(), Tensor::from_array(&row)?);

        let outputs = self.session.run(inputs)?;
        let view = outputs[0].try_extract_tensor::<f32>()?;
        let output = view.to_owned();
        let dims = output.shape().to_vec();

        // A rank-1 output is a batch of one row; anything beyond rank 2 has
        // no [0][0] interpretation.
        let batch = match output.ndim() {
            1 => {
                let len = output.len();
                output
                    .into_shape_with_order((1, len))
                    .map_err(|_| InferenceError::OutputShape { dims })?
            }
            2 => output
                .into_dimensionality::<Ix2>()
                .map_err(|_| InferenceError::OutputShape { dims })?,
            _ => return Err(InferenceError::OutputShape { dims }),
        };

        Ok(ModelOutput::Batch(batch))
    }
}
