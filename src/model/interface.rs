use crate::error::ClassifyError;
use crate::preprocessor::ImageTensor;

/// A loaded, read-only model. `predict` must not mutate the weights, so one
/// instance can be shared across calls without locking.
pub trait Model: Send + Sync {
    /// Raw per-category scores for a single image, in label table order.
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, ClassifyError>;
}
