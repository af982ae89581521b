use crate::error::ClassifyError;
use crate::label_table::LabelTable;
use crate::library::argmax::argmax;
use crate::library::logger::interface::Logger;
use crate::model::interface::Model;
use crate::preprocessor::{ImageTensor, INPUT_SHAPE};
use crate::waste_category::WasteCategory;
use std::sync::Arc;


#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Label line exactly as it appears in the label resource, e.g. `"8 Cardboard\n"`.
    pub label: String,
    pub confidence: f32,
    pub index: usize,
    pub category: Option<WasteCategory>,
}

/// Pairs a loaded model with its label table. Both are loaded once and shared
/// read-only across calls.
#[derive(Clone)]
pub struct ImageClassifier {
    model: Arc<dyn Model + Send + Sync>,
    labels: Arc<LabelTable>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifier {
    pub fn new(
        model: Arc<dyn Model + Send + Sync>,
        labels: Arc<LabelTable>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            labels,
            logger: logger.with_namespace("classifier"),
        }
    }

    pub fn classify(&self, tensor: &ImageTensor) -> Result<Classification, ClassifyError> {
        if tensor.shape() != INPUT_SHAPE {
            return Err(ClassifyError::ShapeMismatch {
                expected: INPUT_SHAPE.to_vec(),
                actual: tensor.shape().to_vec(),
            });
        }

        let scores = self.model.predict(tensor)?;

        if scores.len() != self.labels.len() {
            return Err(ClassifyError::inference(format!(
                "model returned {} scores for {} labels",
                scores.len(),
                self.labels.len()
            )));
        }

        let index = argmax(&scores)
            .ok_or_else(|| ClassifyError::inference("model returned no comparable scores"))?;

        let label = self
            .labels
            .get(index)
            .ok_or_else(|| ClassifyError::inference(format!("no label at index {}", index)))?;

        let classification = Classification {
            label: label.raw.clone(),
            confidence: scores[index],
            index,
            category: label.category,
        };

        let _ = self.logger.info(&format!(
            "Classified as {:?} (index {}) with confidence {:.4}",
            label.name, classification.index, classification.confidence
        ));

        Ok(classification)
    }
}
