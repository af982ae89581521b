use crate::config::{Config, ModelSource};
use crate::error::ClassifyError;
use crate::image_classifier::{Classification, ImageClassifier};
use crate::label_table::LabelTable;
use crate::library::logger::interface::Logger;
use crate::model::impl_fake::{FakeScores, ModelFake};
use crate::model::impl_tract_onnx::ModelTractOnnx;
use crate::model::interface::Model;
use crate::preprocessor::preprocess_bytes;
use crate::render::{render, Page};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub classification: Classification,
    pub source_dimensions: (u32, u32),
}

/// The whole upload-to-guidance flow. Holds the classifier built at startup,
/// or the error that kept it from loading so each request can report it.
pub struct WasteClassifier {
    classifier: Result<ImageClassifier, String>,
    show_institution: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl WasteClassifier {
    pub fn new(
        classifier: Result<ImageClassifier, ClassifyError>,
        show_institution: bool,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("waste_classifier");

        if let Err(e) = &classifier {
            let _ = logger.warn(&format!("Classifier unavailable: {}", e));
        }

        Self {
            classifier: classifier.map_err(|e| e.to_string()),
            show_institution,
            logger,
        }
    }

    /// Loads the labels and model named in the config. Never fails; a load
    /// error is kept and surfaced on every request instead.
    pub fn load(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let classifier = load_classifier(config, logger.clone());
        Self::new(classifier, config.show_institution_guide, logger)
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_ok()
    }

    /// Decodes, preprocesses and classifies one uploaded file. Bad input is
    /// rejected before the model is touched.
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<Report, ClassifyError> {
        let _ = self
            .logger
            .info(&format!("Classifying upload of {} bytes", bytes.len()));

        let tensor = preprocess_bytes(bytes)?;

        let classifier = self
            .classifier
            .as_ref()
            .map_err(|message| ClassifyError::inference(message.clone()))?;

        let classification = classifier.classify(&tensor)?;

        Ok(Report {
            classification,
            source_dimensions: tensor.source_dimensions(),
        })
    }

    pub fn run(&self, bytes: &[u8]) -> Page {
        let outcome = self.classify_bytes(bytes);

        match &outcome {
            Err(e) if e.is_inference() => {
                let _ = self.logger.warn(&format!("Classification failed: {}", e));
            }
            Err(e) => {
                let _ = self.logger.info(&format!("Rejected upload: {}", e));
            }
            Ok(_) => {}
        }

        render(&outcome, self.show_institution)
    }
}

fn load_model(
    config: &Config,
    labels: &LabelTable,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn Model + Send + Sync>, ClassifyError> {
    match &config.model {
        ModelSource::Onnx(path) => Ok(Arc::new(ModelTractOnnx::load(path, logger)?)),
        ModelSource::Fake => Ok(Arc::new(ModelFake::new(
            FakeScores::Random(labels.len()),
            logger,
        ))),
    }
}

pub fn load_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<ImageClassifier, ClassifyError> {
    let labels = LabelTable::load(&config.labels_path)?;
    let _ = logger.info(&format!(
        "Loaded {} labels from {}",
        labels.len(),
        config.labels_path.display()
    ));

    let model = load_model(config, &labels, logger.clone())?;

    Ok(ImageClassifier::new(model, Arc::new(labels), logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use std::path::PathBuf;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(
            chrono::FixedOffset::west_opt(7 * 3600).unwrap(),
        ))
    }

    fn write_labels(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.txt", name, std::process::id()));
        std::fs::write(&path, "0 Paper\n1 Plastic\n2 Glass\n3 Metal\n4 Organic\n5 E-Waste\n6 Textile/Clothing\n7 Landfill\n8 Cardboard\n").unwrap();
        path
    }

    #[test]
    fn test_load_with_fake_model() {
        let labels_path = write_labels("waste-labels-fake");
        let config = Config {
            model: ModelSource::Fake,
            labels_path: labels_path.clone(),
            ..Config::default()
        };

        let waste_classifier = WasteClassifier::load(&config, logger());

        assert!(waste_classifier.is_ready());
        let _ = std::fs::remove_file(labels_path);
    }

    #[test]
    fn test_load_with_missing_model_file() {
        let labels_path = write_labels("waste-labels-onnx");
        let config = Config {
            model: ModelSource::Onnx(PathBuf::from("./does/not/exist/model.onnx")),
            labels_path: labels_path.clone(),
            ..Config::default()
        };

        let err = load_classifier(&config, logger()).err().unwrap();

        assert!(matches!(err, ClassifyError::Inference { .. }));
        assert!(!WasteClassifier::load(&config, logger()).is_ready());
        let _ = std::fs::remove_file(labels_path);
    }

    #[test]
    fn test_load_with_missing_labels() {
        let config = Config {
            model: ModelSource::Fake,
            labels_path: PathBuf::from("./does/not/exist/labels.txt"),
            ..Config::default()
        };

        let err = load_classifier(&config, logger()).err().unwrap();

        assert!(matches!(err, ClassifyError::LabelTable { .. }));
    }
}
