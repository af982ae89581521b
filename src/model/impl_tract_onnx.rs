use crate::error::ClassifyError;
use crate::library::logger::interface::Logger;
use crate::model::interface::Model;
use crate::preprocessor::{ImageTensor, INPUT_SHAPE};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// ONNX model executed with tract. Expects NHWC float input of shape
/// (1, 224, 224, 3) and a single (1, N) score output.
pub struct ModelTractOnnx {
    plan: Plan,
    logger: Arc<dyn Logger + Send + Sync>,
}

fn load_plan(path: &Path) -> TractResult<Plan> {
    tract_onnx::onnx()
        .model_for_path(path)?
        .with_input_fact(0, f32::fact(INPUT_SHAPE).into())?
        .into_optimized()?
        .into_runnable()
}

impl ModelTractOnnx {
    pub fn load(
        path: impl AsRef<Path>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let path = path.as_ref();
        let logger = logger.with_namespace("model").with_namespace("tract");

        let _ = logger.info(&format!("Loading model from {}", path.display()));
        let started = Instant::now();

        let plan = load_plan(path).map_err(|e| {
            ClassifyError::inference(format!("failed to load {}: {:#}", path.display(), e))
        })?;

        let _ = logger.info(&format!("Model loaded in {:?}", started.elapsed()));

        Ok(Self { plan, logger })
    }
}

impl Model for ModelTractOnnx {
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, ClassifyError> {
        let started = Instant::now();

        let outputs = self
            .plan
            .run(tvec!(tensor.to_tract_tensor().into_tvalue()))
            .map_err(|e| ClassifyError::inference(format!("{:#}", e)))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::inference("model produced no outputs"))?;

        let scores = output
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::inference(format!("{:#}", e)))?
            .iter()
            .copied()
            .collect::<Vec<f32>>();

        let _ = self.logger.info(&format!(
            "Inference produced {} scores in {:?}",
            scores.len(),
            started.elapsed()
        ));

        Ok(scores)
    }
}
