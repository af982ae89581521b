use thiserror::Error;

/// Failures surfaced by the classification pipeline.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The uploaded bytes could not be decoded as an image.
    #[error("invalid image: {0}")]
    InvalidImage(#[source] image::ImageError),

    /// The model failed to load or the forward pass failed.
    #[error("inference failed: {message}")]
    Inference { message: String },

    /// The label resource could not be read or parsed.
    #[error("label table: {message}")]
    LabelTable { message: String },

    /// A tensor did not have the (1, 224, 224, 3) input shape.
    #[error("tensor shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

impl ClassifyError {
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn label_table(message: impl Into<String>) -> Self {
        Self::LabelTable {
            message: message.into(),
        }
    }

    /// Everything except a bad upload is an inference-side failure.
    pub fn is_inference(&self) -> bool {
        !matches!(self, Self::InvalidImage(_))
    }
}
