use crate::error::ClassifyError;
use crate::library::logger::interface::Logger;
use crate::model::interface::Model;
use crate::preprocessor::ImageTensor;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

#[allow(dead_code)]
pub enum FakeScores {
    Fixed(Vec<f32>),
    /// Fresh softmax-normalized scores over this many categories on every call.
    Random(usize),
    Failing(String),
}

pub struct ModelFake {
    scores: FakeScores,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelFake {
    pub fn new(scores: FakeScores, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            scores,
            logger: logger.with_namespace("model").with_namespace("fake"),
        }
    }

    fn random_scores(count: usize) -> Result<Vec<f32>, ClassifyError> {
        let mut rng = rand::rng();
        let dist = Uniform::new(0.0f32, 4.0).map_err(|e| ClassifyError::inference(e.to_string()))?;

        let exps: Vec<f32> = (0..count).map(|_| dist.sample(&mut rng).exp()).collect();
        let total: f32 = exps.iter().sum();

        Ok(exps.into_iter().map(|e| e / total).collect())
    }
}

impl Model for ModelFake {
    fn predict(&self, _tensor: &ImageTensor) -> Result<Vec<f32>, ClassifyError> {
        let _ = self.logger.info("Predicting with fake model...");

        match &self.scores {
            FakeScores::Fixed(scores) => Ok(scores.clone()),
            FakeScores::Random(count) => Self::random_scores(*count),
            FakeScores::Failing(message) => Err(ClassifyError::inference(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use crate::preprocessor::preprocess_image;
    use image::{DynamicImage, RgbImage};

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(chrono::FixedOffset::west_opt(7 * 3600).unwrap()))
    }

    fn tensor() -> ImageTensor {
        preprocess_image(&DynamicImage::ImageRgb8(RgbImage::new(10, 10)))
    }

    #[test]
    fn test_random_scores_sum_to_one() {
        let model = ModelFake::new(FakeScores::Random(9), logger());

        let scores = model.predict(&tensor()).unwrap();

        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        assert!((scores.iter().sum::<f32>() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_failing() {
        let model = ModelFake::new(FakeScores::Failing("no weights".to_string()), logger());

        let err = model.predict(&tensor()).unwrap_err();

        assert!(matches!(err, ClassifyError::Inference { .. }));
    }
}
